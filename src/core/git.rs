use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Initialize a git repository rooted at `path`.
///
/// Callers treat this as a convenience, not a correctness requirement of
/// the generated project: the pipeline converts a failure here into a
/// warning and continues.
pub fn init_repo(path: &Path) -> Result<()> {
    let output = Command::new("git")
        .args(["init"])
        .current_dir(path)
        .output()
        .map_err(|e| Error::git_command_failed(format!("Failed to run git init: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_command_failed(format!(
            "git init failed: {}",
            stderr
        )));
    }

    Ok(())
}

/// Check whether `path` is inside a git working tree.
pub fn is_git_repo(path: &Path) -> bool {
    let output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .current_dir(path)
        .output();

    match output {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}
