//! Type references.
//!
//! A [`TypeRef`] is a type as written by the interface source (its display
//! name) paired with a [`TypeKind`]. The synthesizer only ever needs the kind,
//! to decide what a stub method returns; emitters only ever need the name.

use std::fmt;

/// Classification of a referenced type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    /// No value (`void`).
    Void,
    Bool,
    Char,
    /// Any fixed-width or native-width integer.
    Integer,
    /// `float` / `double`.
    Floating,
    Decimal,
    String,
    /// A user-defined value type.
    Struct,
    Enum,
    /// A value type wrapped to admit an absent value (`int?`).
    Nullable,
    /// Classes, interfaces, delegates, arrays, `object`, and unknown types.
    Reference,
}

impl TypeKind {
    /// The value a stub returns for a member of this kind.
    ///
    /// Returns `None` for `Void`: there is nothing to return.
    pub fn default_value(self) -> Option<DefaultValue> {
        match self {
            TypeKind::Void => None,
            TypeKind::Bool => Some(DefaultValue::False),
            TypeKind::Char => Some(DefaultValue::NullChar),
            TypeKind::Integer | TypeKind::Floating | TypeKind::Decimal => Some(DefaultValue::Zero),
            TypeKind::Struct | TypeKind::Enum => Some(DefaultValue::Default),
            TypeKind::String | TypeKind::Nullable | TypeKind::Reference => Some(DefaultValue::Null),
        }
    }

    /// Whether the kind is numeric (its default value is zero).
    pub fn is_numeric(self) -> bool {
        matches!(self, TypeKind::Integer | TypeKind::Floating | TypeKind::Decimal)
    }

    /// Whether a value of this kind can be absent (its default is null).
    pub fn is_reference_like(self) -> bool {
        matches!(self, TypeKind::String | TypeKind::Nullable | TypeKind::Reference)
    }
}

/// The zero/default value a synthesized method body returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultValue {
    /// Numeric zero of the return type.
    Zero,
    False,
    /// The `'\0'` character.
    NullChar,
    /// The all-zero value of a value type (`default(T)`).
    Default,
    /// The absence of a value.
    Null,
}

/// A reference to a type, by display name and kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    name: String,
    kind: TypeKind,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeRef {
            name: name.into(),
            kind,
        }
    }

    /// The `void` type.
    pub fn void() -> Self {
        TypeRef::new("void", TypeKind::Void)
    }

    /// A reference-kinded type with the given name.
    pub fn reference(name: impl Into<String>) -> Self {
        TypeRef::new(name, TypeKind::Reference)
    }

    /// Look up a built-in type keyword (`int`, `string`, `object`, ...).
    pub fn builtin(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "void" => TypeKind::Void,
            "bool" => TypeKind::Bool,
            "char" => TypeKind::Char,
            "byte" | "sbyte" | "short" | "ushort" | "int" | "uint" | "long" | "ulong" | "nint"
            | "nuint" => TypeKind::Integer,
            "float" | "double" => TypeKind::Floating,
            "decimal" => TypeKind::Decimal,
            "string" => TypeKind::String,
            "object" => TypeKind::Reference,
            _ => return None,
        };
        Some(TypeRef::new(keyword, kind))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Void
    }

    /// Shorthand for `self.kind().default_value()`.
    pub fn default_value(&self) -> Option<DefaultValue> {
        self.kind.default_value()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
