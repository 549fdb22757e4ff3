// crates/infra/src/output/sink.rs
use std::{
    io::{self, Write},
    path::PathBuf,
};

use muembed_shared_kernel::InfraResult;

use crate::persistence::FileWriter;

/// Destination for assembled text.
///
/// The variant is picked when the sink is created; all of them share the
/// `Write` capability. File output is buffered in memory and only lands on
/// disk, atomically, when [`OutputSink::finish`] consumes the sink.
#[derive(Debug)]
pub enum OutputSink {
    Stdout(io::Stdout),
    File { path: PathBuf, buffer: Vec<u8> },
    Memory(Vec<u8>),
}

impl OutputSink {
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into(), buffer: Vec::new() }
    }

    pub fn memory() -> Self {
        Self::Memory(Vec::new())
    }

    /// Flush or persist everything written. Returns the bytes for
    /// [`OutputSink::Memory`], an empty vector otherwise.
    pub fn finish(self) -> InfraResult<Vec<u8>> {
        match self {
            Self::Stdout(out) => {
                out.lock().flush()?;
                Ok(Vec::new())
            }
            Self::File { path, buffer } => {
                FileWriter::atomic_write(&path, &buffer)?;
                Ok(Vec::new())
            }
            Self::Memory(buffer) => Ok(buffer),
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File { buffer, .. } | Self::Memory(buffer) => buffer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File { .. } | Self::Memory(_) => Ok(()),
        }
    }
}
