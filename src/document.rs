// Document loading — the boundary between files and the scoring core.
//
// The core only ever sees decoded text. Everything that can go wrong with a
// file (missing, unreadable, not UTF-8) is reported here, before any score is
// produced.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {}: not valid UTF-8 text ({source})", path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Read a UTF-8 text file, dropping a leading byte-order mark and
/// surrounding whitespace.
pub fn load(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode(&bytes).map_err(|source| DocumentError::InvalidInput {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), chars = text.chars().count(), "Loaded document");
    Ok(text)
}

/// Decode bytes as UTF-8 text, without a BOM and trimmed.
pub fn decode(bytes: &[u8]) -> Result<String, std::str::Utf8Error> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    Ok(text.trim().to_string())
}
