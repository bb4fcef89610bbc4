//! Binary artifact backend.
//!
//! # Format
//!
//! ```text
//! MAGIC        8 bytes   b"MOCKSTUB"
//! VERSION      u16 LE
//! record*      0x01, then one bincode-encoded NamespaceGroup
//! end          0x00
//! ```
//!
//! Groups are streamed as they arrive, so nothing is buffered beyond the
//! sink. [`load_artifact`] reads an artifact back into groups.

use std::io::Write;
use std::path::Path;

use mock_ir::NamespaceGroup;

use crate::{Backend, BuildContext, EmitError, EmitKind, EmitResult};

pub const MAGIC: [u8; 8] = *b"MOCKSTUB";
pub const FORMAT_VERSION: u16 = 1;

const GROUP_TAG: u8 = 1;
const END_TAG: u8 = 0;

/// Writes plans as a `bincode` artifact.
#[derive(Debug, Default)]
pub struct BinaryBackend {
    groups: usize,
}

impl BinaryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for BinaryBackend {
    fn kind(&self) -> EmitKind {
        EmitKind::Binary
    }

    fn begin(&mut self, cx: &mut BuildContext) -> EmitResult<()> {
        cx.write_all(&MAGIC)?;
        cx.write_all(&FORMAT_VERSION.to_le_bytes())?;
        Ok(())
    }

    fn emit_group(&mut self, cx: &mut BuildContext, group: &NamespaceGroup) -> EmitResult<()> {
        cx.write_all(&[GROUP_TAG])?;
        bincode::serialize_into(&mut *cx, group).map_err(EmitError::Encode)?;
        self.groups += 1;
        Ok(())
    }

    fn finish(&mut self, cx: &mut BuildContext) -> EmitResult<()> {
        cx.write_all(&[END_TAG])?;
        tracing::trace!(groups = self.groups, "binary backend finished");
        Ok(())
    }
}

/// Decode an artifact produced by [`BinaryBackend`].
pub fn load_artifact(bytes: &[u8]) -> EmitResult<Vec<NamespaceGroup>> {
    let rest = bytes.strip_prefix(&MAGIC).ok_or(EmitError::BadMagic)?;
    let (version, mut rest) = match rest {
        [lo, hi, rest @ ..] => (u16::from_le_bytes([*lo, *hi]), rest),
        _ => return Err(EmitError::Truncated),
    };
    if version != FORMAT_VERSION {
        return Err(EmitError::UnsupportedVersion {
            found: version,
            supported: FORMAT_VERSION,
        });
    }

    let mut groups = Vec::new();
    loop {
        let Some((&tag, tail)) = rest.split_first() else {
            return Err(EmitError::Truncated);
        };
        rest = tail;
        match tag {
            GROUP_TAG => {
                // Reading through `&mut &[u8]` advances `rest`.
                let group = bincode::deserialize_from(&mut rest).map_err(EmitError::Decode)?;
                groups.push(group);
            }
            END_TAG => return Ok(groups),
            _ => return Err(EmitError::Truncated),
        }
    }
}

/// Read and decode the artifact at `path`.
pub fn read_artifact(path: impl AsRef<Path>) -> EmitResult<Vec<NamespaceGroup>> {
    let bytes = std::fs::read(path)?;
    load_artifact(&bytes)
}
