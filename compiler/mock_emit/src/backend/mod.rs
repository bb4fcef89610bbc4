//! The backend seam.
//!
//! A [`Backend`] turns namespace groups into bytes on a [`BuildContext`].
//! [`emit`] drives one: `begin`, one `emit_group` per group, `finish`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use mock_ir::NamespaceGroup;
use tracing::debug;

use crate::{BinaryBackend, BuildContext, EmitError, EmitResult, Output, Sink, SourceBackend};

/// An output format.
pub trait Backend {
    fn kind(&self) -> EmitKind;

    /// Write anything that precedes the first group.
    fn begin(&mut self, cx: &mut BuildContext) -> EmitResult<()>;

    fn emit_group(&mut self, cx: &mut BuildContext, group: &NamespaceGroup) -> EmitResult<()>;

    /// Write anything that follows the last group.
    fn finish(&mut self, cx: &mut BuildContext) -> EmitResult<()>;
}

/// Which backend to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmitKind {
    /// C# source text.
    #[default]
    Source,
    /// A `bincode` artifact, see [`load_artifact`](crate::load_artifact).
    Binary,
}

impl EmitKind {
    /// File extension that selects [`EmitKind::Binary`].
    pub const BINARY_EXTENSION: &'static str = "mockbin";

    /// Pick a backend from an output path: `.mockbin` is binary, anything
    /// else is source.
    pub fn for_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext == Self::BINARY_EXTENSION => EmitKind::Binary,
            _ => EmitKind::Source,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EmitKind::Source => "source",
            EmitKind::Binary => "binary",
        }
    }
}

impl fmt::Display for EmitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmitKind {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(EmitKind::Source),
            "binary" => Ok(EmitKind::Binary),
            other => Err(EmitError::UnknownKind(other.to_string())),
        }
    }
}

pub fn backend_for(kind: EmitKind) -> Box<dyn Backend> {
    match kind {
        EmitKind::Source => Box::new(SourceBackend::new()),
        EmitKind::Binary => Box::new(BinaryBackend::new()),
    }
}

/// Drive `backend` over `groups`.
///
/// On error the context is left as is; dropping it flushes what was written.
pub fn emit(
    backend: &mut dyn Backend,
    cx: &mut BuildContext,
    groups: &[NamespaceGroup],
) -> EmitResult<()> {
    backend.begin(cx)?;
    for group in groups {
        debug!(namespace = %group.namespace, plans = group.plans.len(), "emitting group");
        backend.emit_group(cx, group)?;
    }
    backend.finish(cx)
}

/// Emit `groups` into `sink` with the backend for `kind`, then finish.
pub fn emit_to(kind: EmitKind, sink: Sink, groups: &[NamespaceGroup]) -> EmitResult<Output> {
    let mut cx = BuildContext::new(sink);
    let mut backend = backend_for(kind);
    emit(backend.as_mut(), &mut cx, groups)?;
    debug!(kind = %backend.kind(), bytes = cx.written(), "emitted");
    cx.finish()
}
