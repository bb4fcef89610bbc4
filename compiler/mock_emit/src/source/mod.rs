//! C# source backend.
//!
//! One `namespace` block per group and one class per plan, members in a
//! fixed order: backing fields, constructor, properties, events, methods.
//!
//! ```text
//! namespace Acme.Mocks
//! {
//!     public class Mock_Widget : Acme.IWidget
//!     {
//!         private int _Count;
//!
//!         public Mock_Widget()
//!         {
//!         }
//!
//!         public int Count
//!         {
//!             get { return _Count; }
//!             set { _Count = value; }
//!         }
//!         ...
//! ```

mod writer;

use std::io::Write;

use mock_ir::{
    AccessorKind, BackingField, DefaultBody, DefaultValue, EventDescriptor, MethodSignature,
    NamespaceGroup, SynthesizedTypePlan, TypeRef,
};

use crate::{Backend, BuildContext, EmitKind, EmitResult};
use writer::CodeWriter;

const HEADER: &str = "\
// <auto-generated>
//     Generated by mockgen. Changes to this file will be lost.
// </auto-generated>
";

/// Writes plans as C# classes.
#[derive(Debug, Default)]
pub struct SourceBackend {
    groups: usize,
}

impl SourceBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for SourceBackend {
    fn kind(&self) -> EmitKind {
        EmitKind::Source
    }

    fn begin(&mut self, cx: &mut BuildContext) -> EmitResult<()> {
        cx.write_all(HEADER.as_bytes())?;
        Ok(())
    }

    fn emit_group(&mut self, cx: &mut BuildContext, group: &NamespaceGroup) -> EmitResult<()> {
        cx.write_all(b"\n")?;
        cx.write_all(render_group(group).as_bytes())?;
        self.groups += 1;
        Ok(())
    }

    fn finish(&mut self, _cx: &mut BuildContext) -> EmitResult<()> {
        tracing::trace!(groups = self.groups, "source backend finished");
        Ok(())
    }
}

/// Render one namespace block.
pub fn render_group(group: &NamespaceGroup) -> String {
    let mut w = CodeWriter::new();
    w.line(&format!("namespace {}", group.namespace));
    w.open();
    for (i, plan) in group.plans.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        write_class(&mut w, plan);
    }
    w.close();
    w.output()
}

fn write_class(w: &mut CodeWriter, plan: &SynthesizedTypePlan) {
    w.line(&format!(
        "public class {} : {}",
        plan.type_name, plan.implemented_contract
    ));
    w.open();

    for field in &plan.backing_fields {
        w.line(&format!("private {} {};", field.ty(), field.field_name));
    }
    if !plan.backing_fields.is_empty() {
        w.blank();
    }

    w.line(&format!("public {}()", plan.type_name));
    w.open();
    w.close();

    for field in &plan.backing_fields {
        write_property(w, plan, field);
    }
    for event in &plan.events {
        write_event(w, event);
    }
    for body in &plan.default_method_bodies {
        write_method(w, plan, body);
    }

    w.close();
}

fn write_property(w: &mut CodeWriter, plan: &SynthesizedTypePlan, field: &BackingField) {
    let property = &field.property;
    let accessors: Vec<String> = plan
        .accessors_of(&property.name)
        .filter_map(|accessor| match accessor.kind {
            AccessorKind::Get(_) => Some(format!("get {{ return {}; }}", field.field_name)),
            AccessorKind::Set(_) => Some(format!("set {{ {} = value; }}", field.field_name)),
            AccessorKind::Add | AccessorKind::Remove => None,
        })
        .collect();
    // A property without accessors is not expressible; the field stands alone.
    if accessors.is_empty() {
        return;
    }

    w.blank();
    w.line(&format!("public {} {}", property.ty, property.name));
    w.open();
    for accessor in &accessors {
        w.line(accessor);
    }
    w.close();
}

fn write_event(w: &mut CodeWriter, event: &EventDescriptor) {
    w.blank();
    w.line(&format!("public event {} {}", event.ty, event.name));
    w.open();
    w.line("add { }");
    w.line("remove { }");
    w.close();
}

fn write_method(w: &mut CodeWriter, plan: &SynthesizedTypePlan, body: &DefaultBody) {
    let signature = &body.signature;
    w.blank();
    if body.explicit {
        let interface = signature
            .declaring
            .as_ref()
            .unwrap_or(&plan.implemented_contract);
        w.line(&format!(
            "{} {}.{}({})",
            signature.return_type,
            interface,
            signature.name,
            params(signature)
        ));
    } else {
        w.line(&format!(
            "public {} {}({})",
            signature.return_type,
            signature.name,
            params(signature)
        ));
    }
    w.open();
    if let Some(value) = body.returns {
        w.line(&format!(
            "return {};",
            default_literal(value, &signature.return_type)
        ));
    }
    w.close();
}

fn params(signature: &MethodSignature) -> String {
    signature
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The C# spelling of a default value.
pub fn default_literal(value: DefaultValue, ty: &TypeRef) -> String {
    match value {
        DefaultValue::Zero => "0".to_string(),
        DefaultValue::False => "false".to_string(),
        DefaultValue::NullChar => r"'\0'".to_string(),
        DefaultValue::Default => format!("default({ty})"),
        DefaultValue::Null => "null".to_string(),
    }
}
