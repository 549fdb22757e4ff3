// crates/infra/src/output/writer.rs
use std::{
    io::Write,
    path::PathBuf,
    sync::Mutex,
};

use log::info;
use muembed_ports::output::{AssembledArtifact, AssemblyWriter};
use muembed_shared_kernel::{ErrorContext, InfrastructureError, Result};

use super::OutputSink;

/// Writes artifacts below an output directory, or all of them to stdout.
#[derive(Debug)]
pub struct FsAssemblyWriter {
    out_dir: PathBuf,
    to_stdout: bool,
    stdout_lock: Mutex<()>,
}

impl FsAssemblyWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self { out_dir: out_dir.into(), to_stdout: false, stdout_lock: Mutex::new(()) }
    }

    pub fn stdout() -> Self {
        Self { out_dir: PathBuf::from("."), to_stdout: true, stdout_lock: Mutex::new(()) }
    }

    /// Where `artifact` ends up; absolute output paths are kept as-is.
    pub fn destination(&self, artifact: &AssembledArtifact) -> PathBuf {
        if artifact.output.is_absolute() { artifact.output.clone() } else { self.out_dir.join(&artifact.output) }
    }

    fn open(&self, artifact: &AssembledArtifact) -> OutputSink {
        if self.to_stdout { OutputSink::stdout() } else { OutputSink::file(self.destination(artifact)) }
    }
}

impl AssemblyWriter for FsAssemblyWriter {
    fn write(&self, artifact: &AssembledArtifact) -> Result<()> {
        // Keeps whole artifacts from interleaving when targets run in parallel.
        let _guard = if self.to_stdout {
            Some(self.stdout_lock.lock().map_err(|_| InfrastructureError::OutputError {
                message: "stdout lock poisoned".to_string(),
                source: None,
            })?)
        } else {
            None
        };

        let mut sink = self.open(artifact);
        sink.write_all(artifact.content.as_bytes())
            .map_err(InfrastructureError::from)
            .and_then(|()| sink.finish().map(drop))
            .with_context(|| format!("writing target '{}'", artifact.target))?;

        if !self.to_stdout {
            info!("wrote {} ({} bytes)", self.destination(artifact).display(), artifact.content.len());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(output: &str) -> AssembledArtifact {
        AssembledArtifact { target: "demo".into(), output: PathBuf::from(output), content: "/* demo */\n".into() }
    }

    #[test]
    fn writes_relative_outputs_below_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FsAssemblyWriter::new(dir.path());

        writer.write(&artifact("include/demo.h")).unwrap();

        let written = std::fs::read_to_string(dir.path().join("include/demo.h")).unwrap();
        assert_eq!(written, "/* demo */\n");
    }

    #[test]
    fn absolute_outputs_ignore_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("abs.h");
        let writer = FsAssemblyWriter::new("/unused");

        assert_eq!(writer.destination(&artifact(absolute.to_str().unwrap())), absolute);
    }
}
