//! Per-run output ownership.
//!
//! A [`BuildContext`] owns the sink for exactly one emission run. Backends
//! write through it; nothing else holds the sink. The sink is flushed when
//! the context is finished and, failing that, when it is dropped, so an
//! aborted run still leaves its partial output on disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::EmitResult;

/// Where emitted bytes go.
#[derive(Debug)]
pub enum Sink {
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
    Memory(Vec<u8>),
}

impl Sink {
    /// Create (or truncate) the file at `path`.
    pub fn file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let writer = BufWriter::new(File::create(&path)?);
        Ok(Sink::File { path, writer })
    }

    pub fn memory() -> Self {
        Sink::Memory(Vec::new())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File { writer, .. } => writer.flush(),
            Sink::Memory(_) => Ok(()),
        }
    }
}

/// What a finished run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// Bytes were written to this file.
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Owner of the output sink for one emission run.
#[derive(Debug)]
pub struct BuildContext {
    /// `None` once finished.
    sink: Option<Sink>,
    written: u64,
}

impl BuildContext {
    pub fn new(sink: Sink) -> Self {
        BuildContext {
            sink: Some(sink),
            written: 0,
        }
    }

    pub fn to_file(path: impl AsRef<Path>) -> EmitResult<Self> {
        Ok(Self::new(Sink::file(path)?))
    }

    pub fn in_memory() -> Self {
        Self::new(Sink::memory())
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush the sink and hand back what was produced.
    pub fn finish(mut self) -> EmitResult<Output> {
        let Some(mut sink) = self.sink.take() else {
            return Err(finished().into());
        };
        sink.flush()?;
        debug!(bytes = self.written, "output flushed");
        Ok(match sink {
            Sink::File { path, .. } => Output::File(path),
            Sink::Memory(bytes) => Output::Memory(bytes),
        })
    }
}

impl Write for BuildContext {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = match &mut self.sink {
            Some(Sink::File { writer, .. }) => writer.write(buf)?,
            Some(Sink::Memory(bytes)) => bytes.write(buf)?,
            None => return Err(finished()),
        };
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.sink {
            Some(sink) => sink.flush(),
            None => Err(finished()),
        }
    }
}

impl Drop for BuildContext {
    fn drop(&mut self) {
        if let Some(sink) = &mut self.sink {
            if let Err(error) = sink.flush() {
                warn!(%error, "failed to flush output on drop");
            }
        }
    }
}

fn finished() -> io::Error {
    io::Error::other("build context already finished")
}
