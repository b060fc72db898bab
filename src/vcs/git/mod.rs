pub mod diff;
pub mod repository;

use git2::{ObjectType, Oid, Repository};
use std::path::Path;

use crate::error::{DifflyError, Result};
use crate::model::{CommitEntry, RepoStatus};
use crate::vcs::untracked::untracked_diffs;

use super::traits::{VcsBackend, VcsInfo};

pub use diff::{get_staged_diff, get_unstaged_diff};
pub use repository::{get_log, get_status};

/// Git backend: git2 for repository metadata, the git CLI for diff text
pub struct GitBackend {
    repo: Repository,
    info: VcsInfo,
}

impl GitBackend {
    /// Discover a git repository from `start` or any of its parents
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|_| DifflyError::NotARepository)?;

        let root_path = repo
            .workdir()
            .ok_or(DifflyError::NotARepository)?
            .to_path_buf();

        let head_commit = repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok())
            .map(|c| c.id().to_string())
            .unwrap_or_else(|| "HEAD".to_string());

        let branch_name = repository::current_branch(&repo);

        let info = VcsInfo {
            root_path,
            head_commit,
            branch_name,
        };

        Ok(Self { repo, info })
    }
}

impl VcsBackend for GitBackend {
    fn info(&self) -> &VcsInfo {
        &self.info
    }

    fn status(&self) -> Result<RepoStatus> {
        get_status(&self.repo)
    }

    fn unstaged_diff(&self) -> Result<String> {
        get_unstaged_diff(&self.info.root_path)
    }

    fn staged_diff(&self) -> Result<String> {
        get_staged_diff(&self.info.root_path)
    }

    fn untracked_diff(&self, paths: &[String]) -> Result<String> {
        Ok(untracked_diffs(&self.info.root_path, paths, |bytes| {
            Oid::hash_object(ObjectType::Blob, bytes)
                .ok()
                .map(|oid| oid.to_string())
        }))
    }

    fn log(&self, max_count: usize) -> Result<Vec<CommitEntry>> {
        get_log(&self.repo, max_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn should_fail_outside_repository() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = GitBackend::discover(dir.path());
        assert!(matches!(result, Err(DifflyError::NotARepository)));
    }

    #[test]
    fn should_discover_from_subdirectory() {
        let dir = tempdir().expect("failed to create temp dir");
        Repository::init(dir.path()).expect("failed to init repo");
        let nested = dir.path().join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        let backend = GitBackend::discover(&nested).unwrap();

        let root = backend.info().root_path.canonicalize().unwrap();
        assert_eq!(root, dir.path().canonicalize().unwrap());
        assert_eq!(backend.info().head_commit, "HEAD");
    }

    #[test]
    fn should_synthesize_untracked_files_with_blob_id() {
        let dir = tempdir().expect("failed to create temp dir");
        Repository::init(dir.path()).expect("failed to init repo");
        fs::write(dir.path().join("empty.txt"), "").unwrap();
        let backend = GitBackend::discover(dir.path()).unwrap();

        let status = backend.status().unwrap();
        assert_eq!(status.not_added, vec!["empty.txt"]);

        let text = backend.untracked_diff(&status.not_added).unwrap();

        // Blob id of the empty file
        assert!(text.contains("index 0000000..e69de29\n"));
        assert!(text.contains("@@ -0,0 +1,0 @@\n"));
    }
}
