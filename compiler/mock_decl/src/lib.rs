//! Declaration-file interface source.
//!
//! Reads a small declaration language describing namespaces, interfaces,
//! and the value types their members mention, and builds the
//! [`ContractTable`] that synthesis runs on.
//!
//! ```text
//! namespace Acme.Widgets {
//!     interface IWidget : IBase {
//!         int Count { get; set; }
//!         event EventHandler Changed;
//!         double Scale(int factor, Point origin);
//!     }
//!     interface IBase { void Reset(); }
//!     struct Point { }
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source ──► lex() ──► parse() ──► DeclFile ──► resolve() ──► ContractTable
//! ```
//!
//! No stage stops at the first problem. [`parse_declarations`] returns the
//! table together with every [`DeclError`] found; [`render`] turns those into
//! `ariadne` reports.

mod ast;
mod error;
mod lexer;
mod parser;
mod report;
mod resolve;
mod span;

use mock_ir::ContractTable;

pub use ast::{DeclFile, MemberDecl, ParamDecl, Path, TypeDecl, TypeExpr};
pub use error::DeclError;
pub use lexer::{lex, Token, TokenKind};
pub use parser::{parse, ParseOutput};
pub use report::render;
pub use resolve::resolve;
pub use span::Span;

/// A resolved declaration file and everything wrong with it.
#[derive(Clone, Debug, Default)]
pub struct DeclOutput {
    pub table: ContractTable,
    /// Syntax errors first, then resolution errors, each in source order.
    pub errors: Vec<DeclError>,
}

impl DeclOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse and resolve `source`.
///
/// Resolution runs even after syntax errors, over whatever parsed cleanly.
pub fn parse_declarations(source: &str) -> DeclOutput {
    let parsed = parse(source);
    let (table, resolve_errors) = resolve(&parsed.file);

    let mut errors = parsed.errors;
    errors.extend(resolve_errors);
    DeclOutput { table, errors }
}

/// Parse and resolve `source`, failing unless it is entirely clean.
pub fn load(source: &str) -> Result<ContractTable, Vec<DeclError>> {
    let output = parse_declarations(source);
    if output.has_errors() {
        Err(output.errors)
    } else {
        Ok(output.table)
    }
}
