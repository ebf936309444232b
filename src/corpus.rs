use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Reads a whole input file into memory.
///
/// Unlike a silent empty read, a missing or unreadable file is an error, so a
/// run never starts on data it did not get.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
