use std::fs;
use std::path::Path;

use crate::utils::error::{BuildError, BuildResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BuildResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| BuildError::write(path.as_ref(), e))
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BuildResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| BuildError::write(path, e))?;
    }
    Ok(())
}

/// Read a file as raw bytes; decoding is left to the caller
pub fn read_file<P: AsRef<Path>>(path: P) -> BuildResult<Vec<u8>> {
    fs::read(path.as_ref()).map_err(|e| BuildError::access(path.as_ref(), e))
}

/// Write a string to a file, creating parent directories first
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BuildResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_directory(parent)?;
    }

    fs::write(path, contents).map_err(|e| BuildError::write(path, e))
}
