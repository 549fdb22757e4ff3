// crates/infra/src/persistence/file_reader.rs
use std::{fs, path::Path};

use muembed_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read text, replacing a leading UTF-8 byte order mark and normalising
    /// CRLF line endings to LF.
    pub fn read_source(path: &Path) -> InfraResult<String> {
        let text = Self::read_to_string(path)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        Ok(if text.contains("\r\n") { text.replace("\r\n", "\n") } else { text.to_string() })
    }
}
