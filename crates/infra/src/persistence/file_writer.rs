// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use muembed_shared_kernel::{InfraResult, InfrastructureError};
use tempfile::NamedTempFile;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename, creating
    /// missing parent directories first.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let fail = |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(fail)?;

        // Same directory as the target so the rename stays atomic.
        let tmp = NamedTempFile::new_in(parent).map_err(fail)?;
        let write_tmp = |tmp: &NamedTempFile| -> std::io::Result<()> {
            let mut w = BufWriter::new(tmp.as_file());
            w.write_all(data)?;
            w.flush()?;
            let _ = tmp.as_file().sync_all();
            Ok(())
        };
        write_tmp(&tmp).map_err(fail)?;
        tmp.persist(path).map_err(|err| fail(err.error))?;

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
