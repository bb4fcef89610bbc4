//! Declaration-file diagnostics.

use mock_ir::{ContractKind, QualifiedName};

use crate::lexer::TokenKind;
use crate::Span;

/// A lexical, syntax, or resolution error in a declaration file.
///
/// Errors are collected, never thrown: the parser and resolver keep going
/// after each one so a single run reports everything it can.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    #[error("unexpected character `{text}`")]
    UnexpectedCharacter { text: String, span: Span },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: &'static str, span: Span },

    #[error("property `{property}` has no accessors")]
    NoAccessors { property: String, span: Span },

    #[error("`{accessor}` accessor is declared more than once")]
    DuplicateAccessor {
        accessor: &'static str,
        span: Span,
        first: Span,
    },

    #[error("type `{name}` is declared more than once")]
    DuplicateType {
        name: QualifiedName,
        span: Span,
        first: Span,
    },

    #[error("cannot find interface `{name}`")]
    UnresolvedBase { name: String, span: Span },

    #[error("`{name}` is a {kind}, only interfaces can be extended")]
    BaseNotInterface {
        name: QualifiedName,
        kind: ContractKind,
        span: Span,
    },

    #[error("interface `{name}` inherits from itself")]
    CyclicInheritance { name: QualifiedName, span: Span },
}

impl DeclError {
    /// The primary location of the error.
    pub fn span(&self) -> Span {
        match self {
            DeclError::UnexpectedCharacter { span, .. }
            | DeclError::UnexpectedToken { span, .. }
            | DeclError::UnexpectedEof { span, .. }
            | DeclError::NoAccessors { span, .. }
            | DeclError::DuplicateAccessor { span, .. }
            | DeclError::DuplicateType { span, .. }
            | DeclError::UnresolvedBase { span, .. }
            | DeclError::BaseNotInterface { span, .. }
            | DeclError::CyclicInheritance { span, .. } => *span,
        }
    }

    /// Short text for the label under the primary span.
    pub fn label(&self) -> &'static str {
        match self {
            DeclError::UnexpectedCharacter { .. } => "not valid here",
            DeclError::UnexpectedToken { .. } => "unexpected token",
            DeclError::UnexpectedEof { .. } => "file ends here",
            DeclError::NoAccessors { .. } => "needs `get`, `set`, or both",
            DeclError::DuplicateAccessor { .. } => "declared again here",
            DeclError::DuplicateType { .. } => "redeclared here",
            DeclError::UnresolvedBase { .. } => "not found in this file",
            DeclError::BaseNotInterface { .. } => "not an interface",
            DeclError::CyclicInheritance { .. } => "cycle starts here",
        }
    }

    /// A second location worth pointing at, with its label.
    pub fn secondary(&self) -> Option<(Span, &'static str)> {
        match self {
            DeclError::DuplicateType { first, .. } | DeclError::DuplicateAccessor { first, .. } => {
                Some((*first, "first declared here"))
            }
            _ => None,
        }
    }
}
