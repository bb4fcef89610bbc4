//! CLI errors.

use std::io;
use std::path::PathBuf;

use mock_decl::DeclError;
use mock_emit::EmitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The declaration file has errors. Carries the text so they can be
    /// rendered against it.
    #[error("{} error(s) in `{}`", errors.len(), path.display())]
    Declarations {
        path: PathBuf,
        text: String,
        errors: Vec<DeclError>,
    },

    #[error("cannot write `{}`: {source}", path.display())]
    Emit {
        path: PathBuf,
        #[source]
        source: EmitError,
    },
}
