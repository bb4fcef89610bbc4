//! Emitters for synthesized stub plans.
//!
//! Two backends share the [`Backend`] trait:
//!
//! - [`SourceBackend`]: C# source text, one class per plan.
//! - [`BinaryBackend`]: a versioned `bincode` artifact holding every group,
//!   readable again with [`load_artifact`].
//!
//! A [`BuildContext`] owns the output sink for one run and flushes it on
//! every exit path. [`emit_to`] is the one-call entry point:
//!
//! ```text
//! Vec<NamespaceGroup> ──► emit_to(kind, sink) ──► begin / emit_group* / finish ──► Output
//! ```

mod backend;
mod binary;
mod context;
mod error;
mod source;

pub use backend::{backend_for, emit, emit_to, Backend, EmitKind};
pub use binary::{load_artifact, read_artifact, BinaryBackend, FORMAT_VERSION, MAGIC};
pub use context::{BuildContext, Output, Sink};
pub use error::{EmitError, EmitResult};
pub use source::{default_literal, render_group, SourceBackend};
