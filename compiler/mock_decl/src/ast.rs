//! Syntax tree for declaration files.
//!
//! The tree is flat: nested `namespace` blocks are folded into each
//! declaration's `namespace` string while parsing.

use std::fmt;

use mock_ir::ContractKind;

use crate::Span;

/// A possibly dotted name as written: `IBase`, `Acme.Common.INamed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    pub text: String,
    pub span: Span,
}

/// A type as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Named(Path),
    Generic { path: Path, args: Vec<TypeExpr> },
    Array(Box<TypeExpr>),
    Nullable(Box<TypeExpr>),
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(path) => f.write_str(&path.text),
            TypeExpr::Generic { path, args } => {
                write!(f, "{}<", path.text)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeExpr::Array(elem) => write!(f, "{elem}[]"),
            TypeExpr::Nullable(inner) => write!(f, "{inner}?"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeExpr,
}

/// A member of an interface body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberDecl {
    Method {
        name: String,
        return_type: TypeExpr,
        params: Vec<ParamDecl>,
    },
    Property {
        name: String,
        ty: TypeExpr,
        get: bool,
        set: bool,
    },
    Event {
        name: String,
        ty: TypeExpr,
    },
}

/// One type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub namespace: String,
    pub name: String,
    pub name_span: Span,
    pub kind: ContractKind,
    /// Base list after `:`. Only resolved for interfaces.
    pub bases: Vec<Path>,
    /// Always empty for anything but interfaces.
    pub members: Vec<MemberDecl>,
}

/// A parsed file: every declaration in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclFile {
    pub decls: Vec<TypeDecl>,
}
