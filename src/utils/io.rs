//! File I/O primitives with consistent error handling.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::internal_io(
                format!("File not found: {}", path.display()),
                Some(operation.to_string()),
            )
        } else {
            Error::internal_io(e.to_string(), Some(operation.to_string()))
        }
    })
}

/// Rename a file with standardized error handling.
pub fn rename_file(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::rename(from, to)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}
