use std::path::PathBuf;

use crate::error::Result;
use crate::model::{CommitEntry, DiffPayload, RepoStatus};

/// Repository information
#[derive(Debug, Clone)]
pub struct VcsInfo {
    pub root_path: PathBuf,
    pub head_commit: String,
    pub branch_name: Option<String>,
}

/// Read-only view of a repository's working tree.
pub trait VcsBackend: Send {
    /// Get repository information
    fn info(&self) -> &VcsInfo;

    /// Categorized working-tree status
    fn status(&self) -> Result<RepoStatus>;

    /// Unified diff of the working tree against the index, without path prefixes
    fn unstaged_diff(&self) -> Result<String>;

    /// Unified diff of the index against HEAD, without path prefixes
    fn staged_diff(&self) -> Result<String>;

    /// Pseudo-diffs for untracked files, each shown as entirely new
    fn untracked_diff(&self, paths: &[String]) -> Result<String>;

    /// Most recent commits first, at most `max_count`
    fn log(&self, max_count: usize) -> Result<Vec<CommitEntry>>;

    /// Everything the diff view needs in one payload.
    fn diff_payload(&self) -> Result<DiffPayload> {
        let status = self.status()?;
        let unstaged = self.unstaged_diff()?;
        let staged = self.staged_diff()?;
        let untracked = self.untracked_diff(&status.not_added)?;
        Ok(DiffPayload::new(staged, unstaged, untracked))
    }
}
