//! Interface members: methods, properties, and events.
//!
//! Properties and events are backed by accessor methods. A property `Count`
//! of type `int` owns the signatures `get_Count() -> int` and
//! `set_Count(int) -> void`; an event `Changed` owns `add_Changed(handler)`
//! and `remove_Changed(handler)`. Those signatures are ordinary
//! [`MethodSignature`] values tagged with the matching [`MemberKind`], which
//! is what lets the classifier subtract them from a contract's method set.

use std::hash::{Hash, Hasher};

use crate::{QualifiedName, TypeRef};

/// What declared a method signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberKind {
    /// A method declared in its own right.
    Plain,
    PropertyGet,
    PropertySet,
    EventAdd,
    EventRemove,
}

impl MemberKind {
    pub fn is_accessor(self) -> bool {
        !matches!(self, MemberKind::Plain)
    }
}

/// A method parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

/// A method signature.
///
/// # Identity
///
/// Two signatures are equal when their name, parameter types, and member kind
/// match. The return type, parameter names, and declaring interface are
/// carried along but ignored by `Eq` and `Hash`, so the same method
/// redeclared on two branches of an inheritance diamond collapses to one set
/// entry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodSignature {
    pub name: String,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
    pub kind: MemberKind,
    /// The interface this signature was first collected from, if known.
    pub declaring: Option<QualifiedName>,
}

impl MethodSignature {
    /// A plain method.
    pub fn new(name: impl Into<String>, return_type: TypeRef, params: Vec<Param>) -> Self {
        MethodSignature {
            name: name.into(),
            return_type,
            params,
            kind: MemberKind::Plain,
            declaring: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: MemberKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn declared_by(mut self, interface: QualifiedName) -> Self {
        self.declaring = Some(interface);
        self
    }

    /// Parameter types in declaration order.
    pub fn param_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.params.iter().map(|p| &p.ty)
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    /// Whether `other` occupies the same emitted slot (name and parameter
    /// types), regardless of member kind.
    pub fn same_slot(&self, other: &MethodSignature) -> bool {
        self.name == other.name && self.param_types().eq(other.param_types())
    }
}

impl PartialEq for MethodSignature {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.same_slot(other)
    }
}

impl Eq for MethodSignature {}

impl Hash for MethodSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.params.len().hash(state);
        for ty in self.param_types() {
            ty.hash(state);
        }
    }
}

/// A property declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: TypeRef,
    pub has_getter: bool,
    pub has_setter: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef, has_getter: bool, has_setter: bool) -> Self {
        PropertyDescriptor {
            name: name.into(),
            ty,
            has_getter,
            has_setter,
        }
    }

    /// A property with both accessors.
    pub fn read_write(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, ty, true, true)
    }

    /// A property with only a getter.
    pub fn read_only(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name, ty, true, false)
    }

    /// `get_<Name>() -> T`, when the property has a getter.
    pub fn getter(&self) -> Option<MethodSignature> {
        self.has_getter.then(|| {
            MethodSignature::new(format!("get_{}", self.name), self.ty.clone(), Vec::new())
                .with_kind(MemberKind::PropertyGet)
        })
    }

    /// `set_<Name>(T value) -> void`, when the property has a setter.
    pub fn setter(&self) -> Option<MethodSignature> {
        self.has_setter.then(|| {
            MethodSignature::new(
                format!("set_{}", self.name),
                TypeRef::void(),
                vec![Param::new("value", self.ty.clone())],
            )
            .with_kind(MemberKind::PropertySet)
        })
    }
}

/// An event declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventDescriptor {
    pub name: String,
    /// The handler (delegate) type.
    pub ty: TypeRef,
}

impl EventDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        EventDescriptor {
            name: name.into(),
            ty,
        }
    }

    pub fn adder(&self) -> MethodSignature {
        MethodSignature::new(
            format!("add_{}", self.name),
            TypeRef::void(),
            vec![Param::new("value", self.ty.clone())],
        )
        .with_kind(MemberKind::EventAdd)
    }

    pub fn remover(&self) -> MethodSignature {
        MethodSignature::new(
            format!("remove_{}", self.name),
            TypeRef::void(),
            vec![Param::new("value", self.ty.clone())],
        )
        .with_kind(MemberKind::EventRemove)
    }
}
