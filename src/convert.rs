//! Conversion output files.
//!
//! Serialized datasets are written as `address_book.<format>` inside a
//! caller-specified directory. On collision a numeric suffix (`_1`, `_2`,
//! ...) is probed sequentially until a free name is found.

use crate::error::ConvertError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `data` into `directory` under the next free `address_book.<format>`
/// name and return the path written.
///
/// # Errors
///
/// Returns [`ConvertError::MissingDirectory`] when `directory` does not
/// exist, and [`ConvertError::Io`] when the write itself fails.
pub fn save_serialized(directory: &Path, format: &str, data: &str) -> Result<PathBuf, ConvertError> {
    if !directory.is_dir() {
        return Err(ConvertError::MissingDirectory(directory.to_path_buf()));
    }

    let path = next_free_path(directory, format);
    fs::write(&path, data)?;
    info!(path = %path.display(), "serialized data saved");
    Ok(path)
}

fn next_free_path(directory: &Path, format: &str) -> PathBuf {
    let mut candidate = directory.join(format!("address_book.{format}"));
    let mut index = 1;
    while candidate.exists() {
        candidate = directory.join(format!("address_book_{index}.{format}"));
        index += 1;
    }
    candidate
}
