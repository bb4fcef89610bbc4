//! Emitter errors.

use std::io;

use thiserror::Error;

pub type EmitResult<T> = Result<T, EmitError>;

/// Failure while writing or loading emitted output.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode artifact: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode artifact: {0}")]
    Decode(#[source] bincode::Error),

    #[error("not a mock artifact (bad magic header)")]
    BadMagic,

    #[error("unsupported artifact version {found} (this build reads version {supported})")]
    UnsupportedVersion { found: u16, supported: u16 },

    #[error("artifact is truncated")]
    Truncated,

    #[error("unknown emit kind `{0}` (expected `source` or `binary`)")]
    UnknownKind(String),
}
