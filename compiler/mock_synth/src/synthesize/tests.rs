use mock_ir::{ContractKind, DefaultValue, MemberKind, QualifiedName, TypeKind};
use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::{diamond, insert, method, ty};

fn plan_for(table: &ContractTable, id: ContractId) -> SynthesizedTypePlan {
    synthesize_contract(table, id).unwrap_or_else(|e| panic!("{e}"))
}

fn widget_table() -> (ContractTable, ContractId) {
    let mut table = ContractTable::new();
    let id = insert(
        &mut table,
        InterfaceContract::interface("Acme", "IWidget")
            .with_property(PropertyDescriptor::read_write("Count", ty("int")))
            .with_property(PropertyDescriptor::read_only("Label", ty("string")))
            .with_event(EventDescriptor::new(
                "Changed",
                TypeRef::reference("EventHandler"),
            ))
            .with_method(method("Reset", "void", &[]))
            .with_method(method("Scale", "double", &["int"]))
            .with_method(method("Describe", "string", &[]))
            .with_method(method("Origin", "void", &[])),
    );
    (table, id)
}

#[test]
fn names_and_constructor() {
    let (table, id) = widget_table();
    let plan = plan_for(&table, id);

    assert_eq!(plan.type_name, "Mock_Widget");
    assert_eq!(plan.target_namespace, "Acme.Mocks");
    assert_eq!(plan.implemented_contract, QualifiedName::new("Acme", "IWidget"));
    assert_eq!(plan.constructor, Constructor);
}

#[test]
fn one_backing_field_per_property() {
    let (table, id) = widget_table();
    let plan = plan_for(&table, id);

    let fields: Vec<(&str, &str)> = plan
        .backing_fields
        .iter()
        .map(|f| (f.field_name.as_str(), f.ty().name()))
        .collect();
    assert_eq!(fields, vec![("_Count", "int"), ("_Label", "string")]);
}

#[test]
fn getters_read_and_setters_write_the_backing_field() {
    let (table, id) = widget_table();
    let plan = plan_for(&table, id);

    let count: Vec<_> = plan.accessors_of("Count").collect();
    assert_eq!(count.len(), 2);
    assert!(matches!(count[0].kind, AccessorKind::Get(f) if plan.field(f).field_name == "_Count"));
    assert!(matches!(count[1].kind, AccessorKind::Set(f) if plan.field(f).field_name == "_Count"));

    let label: Vec<_> = plan.accessors_of("Label").collect();
    assert_eq!(label.len(), 1);
    assert!(matches!(label[0].kind, AccessorKind::Get(_)));
}

#[test]
fn event_accessors_are_no_ops() {
    let (table, id) = widget_table();
    let plan = plan_for(&table, id);

    let kinds: Vec<AccessorKind> = plan.accessors_of("Changed").map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AccessorKind::Add, AccessorKind::Remove]);
    assert_eq!(plan.events.len(), 1);
}

#[test]
fn default_values_follow_return_type() {
    let (table, id) = widget_table();
    let plan = plan_for(&table, id);

    let returns: Vec<(&str, Option<DefaultValue>)> = plan
        .default_method_bodies
        .iter()
        .map(|d| (d.signature.name.as_str(), d.returns))
        .collect();
    assert_eq!(
        returns,
        vec![
            ("Reset", None),
            ("Scale", Some(DefaultValue::Zero)),
            ("Describe", Some(DefaultValue::Null)),
            ("Origin", None),
        ]
    );
}

#[test]
fn value_type_returns_default_value() {
    let mut table = ContractTable::new();
    let point = TypeRef::new("Point", TypeKind::Struct);
    let id = insert(
        &mut table,
        InterfaceContract::interface("Geo", "IShape")
            .with_method(MethodSignature::new("Center", point, Vec::new()))
            .with_method(method("IsEmpty", "bool", &[]))
            .with_method(method("Initial", "char", &[])),
    );

    let plan = plan_for(&table, id);
    let returns: Vec<_> = plan.default_method_bodies.iter().map(|d| d.returns).collect();
    assert_eq!(
        returns,
        vec![
            Some(DefaultValue::Default),
            Some(DefaultValue::False),
            Some(DefaultValue::NullChar),
        ]
    );
}

#[test]
fn accessors_never_get_default_bodies() {
    let (table, id) = widget_table();
    let plan = plan_for(&table, id);

    for body in &plan.default_method_bodies {
        assert_eq!(body.signature.kind, MemberKind::Plain, "{}", body.signature.name);
    }
    for accessor in &plan.accessor_bodies {
        assert!(plan.default_for(&accessor.signature).is_none());
    }
}

#[test]
fn diamond_plan_covers_each_member_once() {
    let mut table = ContractTable::new();
    let d = diamond(&mut table);
    let plan = plan_for(&table, d.top);

    let covered: Vec<&str> = plan.covered_methods().map(|m| m.name.as_str()).collect();
    assert_eq!(
        covered,
        vec!["get_Id", "set_Id", "add_Changed", "remove_Changed", "M", "Left", "Right"]
    );
    assert_eq!(plan.backing_fields.len(), 1);
    assert_eq!(plan.type_name, "Mock_C");
}

#[test]
fn non_interface_is_rejected() {
    let mut table = ContractTable::new();
    let id = insert(
        &mut table,
        InterfaceContract::new("Acme", "Widget", ContractKind::Class)
            .with_method(method("Reset", "void", &[])),
    );

    let err = synthesize_contract(&table, id);
    assert_eq!(
        err,
        Err(SynthError::InvalidContractKind {
            type_name: QualifiedName::new("Acme", "Widget"),
            kind: ContractKind::Class,
        })
    );
}

#[test]
fn synthesize_rejects_non_interface_directly() {
    let contract = InterfaceContract::new("Geo", "Point", ContractKind::Struct);
    let err = synthesize(&contract, &ClassifiedMembers::default(), &[], &[])
        .err()
        .unwrap_or_else(|| panic!("struct must be rejected"));
    assert_eq!(err.type_name(), &QualifiedName::new("Geo", "Point"));
    assert!(err.to_string().contains("Geo.Point"));
}

#[test]
fn plain_method_in_accessor_slot_is_explicit() {
    let mut table = ContractTable::new();
    let id = insert(
        &mut table,
        InterfaceContract::interface("Acme", "ICounter")
            .with_property(PropertyDescriptor::read_only("Count", ty("int")))
            .with_method(method("get_Count", "int", &[]))
            .with_method(method("Count", "int", &[])),
    );

    let plan = plan_for(&table, id);
    let explicit: Vec<(&str, bool)> = plan
        .default_method_bodies
        .iter()
        .map(|d| (d.signature.name.as_str(), d.explicit))
        .collect();
    assert_eq!(explicit, vec![("get_Count", true), ("Count", false)]);
}

#[test]
fn accessor_without_property_still_gets_a_field() {
    let contract = InterfaceContract::interface("Acme", "ILoose");
    let prop = PropertyDescriptor::read_write("Size", ty("long"));
    let classified = classify(&[], std::slice::from_ref(&prop), &[]);

    // Property list deliberately left empty.
    let plan = synthesize(&contract, &classified, &[], &[]).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(plan.backing_fields.len(), 1);
    assert_eq!(plan.backing_fields[0].field_name, "_Size");
    assert_eq!(plan.backing_fields[0].ty(), &ty("long"));
    assert!(plan
        .accessor_bodies
        .iter()
        .all(|a| a.kind.field() == Some(FieldId(0))));
}

#[test]
fn synthesis_is_independent_per_call() {
    let (table, id) = widget_table();
    let first = plan_for(&table, id);
    let second = plan_for(&table, id);
    assert_eq!(first, second);
}
