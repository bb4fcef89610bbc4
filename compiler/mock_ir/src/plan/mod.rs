//! Synthesized type plans.
//!
//! A [`SynthesizedTypePlan`] is the format-independent description of one stub
//! type: its name, the interface it implements, its backing fields, and a body
//! for every member. Emitters turn plans into source text or binary artifacts;
//! they never need to look back at the contract table.

use crate::{
    DefaultValue, EventDescriptor, MethodSignature, PropertyDescriptor, QualifiedName, TypeRef,
};

/// Index of a backing field within its plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldId(pub u32);

impl FieldId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Private storage for one property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackingField {
    pub field_name: String,
    pub property: PropertyDescriptor,
}

impl BackingField {
    pub fn ty(&self) -> &TypeRef {
        &self.property.ty
    }
}

/// Behavior of an accessor body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessorKind {
    /// Return the field's current value.
    Get(FieldId),
    /// Overwrite the field with the argument.
    Set(FieldId),
    /// Accept a handler and discard it.
    Add,
    /// Accept a handler and discard it.
    Remove,
}

impl AccessorKind {
    pub fn field(self) -> Option<FieldId> {
        match self {
            AccessorKind::Get(field) | AccessorKind::Set(field) => Some(field),
            AccessorKind::Add | AccessorKind::Remove => None,
        }
    }
}

/// Body for a property or event accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessorBody {
    pub signature: MethodSignature,
    /// Name of the owning property or event.
    pub owner: String,
    pub kind: AccessorKind,
}

/// Body for a plain method: do nothing, then return `returns` if present.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultBody {
    pub signature: MethodSignature,
    /// `None` for void-returning methods.
    pub returns: Option<DefaultValue>,
    /// Emit as an explicit implementation qualified by the declaring
    /// interface, because an accessor already occupies the same slot.
    pub explicit: bool,
}

/// The stub's constructor: public, parameterless, no initialization.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constructor;

/// Everything needed to emit one stub type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesizedTypePlan {
    pub type_name: String,
    pub target_namespace: String,
    pub implemented_contract: QualifiedName,
    pub constructor: Constructor,
    pub backing_fields: Vec<BackingField>,
    pub accessor_bodies: Vec<AccessorBody>,
    pub default_method_bodies: Vec<DefaultBody>,
    pub events: Vec<EventDescriptor>,
}

impl SynthesizedTypePlan {
    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.target_namespace.clone(), self.type_name.clone())
    }

    pub fn field(&self, id: FieldId) -> &BackingField {
        &self.backing_fields[id.index()]
    }

    /// Accessors belonging to the named property or event, in plan order.
    pub fn accessors_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a AccessorBody> {
        self.accessor_bodies.iter().filter(move |a| a.owner == owner)
    }

    pub fn accessor_for(&self, signature: &MethodSignature) -> Option<&AccessorBody> {
        self.accessor_bodies.iter().find(|a| &a.signature == signature)
    }

    pub fn default_for(&self, signature: &MethodSignature) -> Option<&DefaultBody> {
        self.default_method_bodies
            .iter()
            .find(|d| &d.signature == signature)
    }

    /// Every method signature the plan provides a body for.
    pub fn covered_methods(&self) -> impl Iterator<Item = &MethodSignature> {
        self.accessor_bodies
            .iter()
            .map(|a| &a.signature)
            .chain(self.default_method_bodies.iter().map(|d| &d.signature))
    }
}

/// Plans sharing a target namespace, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespaceGroup {
    pub namespace: String,
    pub plans: Vec<SynthesizedTypePlan>,
}
