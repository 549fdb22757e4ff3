// crates/ports/src/output.rs
use std::path::PathBuf;

use muembed_shared_kernel::Result;

/// Rendered single-file output for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledArtifact {
    pub target: String,
    pub output: PathBuf,
    pub content: String,
}

/// Port for persisting assembled artifacts.
pub trait AssemblyWriter: Send + Sync {
    fn write(&self, artifact: &AssembledArtifact) -> Result<()>;
}
