use std::path::Path;
use std::process::Command;

use crate::error::{DifflyError, Result};

/// Arguments shared by both diff invocations: no `a/` `b/` prefixes, and no user
/// configuration that would change the text format.
const DIFF_ARGS: [&str; 4] = ["diff", "--no-prefix", "--no-color", "--no-ext-diff"];

/// Working tree against the index.
pub fn get_unstaged_diff(root: &Path) -> Result<String> {
    run_git_command(root, &DIFF_ARGS)
}

/// Index against HEAD.
pub fn get_staged_diff(root: &Path) -> Result<String> {
    let mut args = DIFF_ARGS.to_vec();
    args.push("--cached");
    run_git_command(root, &args)
}

fn run_git_command(root: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(root)
        .args(args)
        .output()
        .map_err(|e| DifflyError::VcsCommand(format!("Failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DifflyError::VcsCommand(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
