use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Format of `CommitEntry::date`, same shape as git's `%ai`.
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedPath {
    pub from: String,
    pub to: String,
}

/// Categorized working-tree status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoStatus {
    /// Checked-out branch, `None` when detached
    pub current: Option<String>,
    pub modified: Vec<String>,
    /// Untracked paths
    pub not_added: Vec<String>,
    /// New files added to the index
    pub created: Vec<String>,
    pub deleted: Vec<String>,
    pub renamed: Vec<RenamedPath>,
    /// Every path with index changes
    pub staged: Vec<String>,
    pub conflicted: Vec<String>,
}

impl RepoStatus {
    pub fn is_clean(&self) -> bool {
        self.modified.is_empty()
            && self.not_added.is_empty()
            && self.created.is_empty()
            && self.deleted.is_empty()
            && self.renamed.is_empty()
            && self.conflicted.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEntry {
    pub hash: String,
    pub date: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
}

impl CommitEntry {
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }

    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.date, COMMIT_DATE_FORMAT).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPayload {
    pub all: Vec<CommitEntry>,
    pub total: usize,
    pub latest: Option<CommitEntry>,
}

impl LogPayload {
    pub fn new(all: Vec<CommitEntry>) -> Self {
        Self {
            total: all.len(),
            latest: all.first().cloned(),
            all,
        }
    }
}

/// Raw diff text handed to the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPayload {
    pub staged: String,
    pub unstaged: String,
    pub untracked: String,
    /// Unstaged, staged and untracked text joined together for older clients
    pub diff: String,
}

impl DiffPayload {
    pub fn new(staged: String, unstaged: String, untracked: String) -> Self {
        let diff = [unstaged.as_str(), staged.as_str(), untracked.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            staged,
            unstaged,
            untracked,
            diff,
        }
    }

    /// Working-tree changes plus untracked pseudo-diffs.
    pub fn unstaged_with_untracked(&self) -> String {
        if self.untracked.is_empty() {
            self.unstaged.clone()
        } else if self.unstaged.is_empty() || self.unstaged.ends_with('\n') {
            format!("{}{}", self.unstaged, self.untracked)
        } else {
            format!("{}\n{}", self.unstaged, self.untracked)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(hash: &str, date: &str) -> CommitEntry {
        CommitEntry {
            hash: hash.to_string(),
            date: date.to_string(),
            message: "Fix bug".to_string(),
            author_name: "Test User".to_string(),
            author_email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn should_join_non_empty_parts_for_legacy_diff() {
        let payload = DiffPayload::new("S".into(), "U".into(), String::new());
        assert_eq!(payload.diff, "U\nS");

        let payload = DiffPayload::new(String::new(), String::new(), "T".into());
        assert_eq!(payload.diff, "T");
    }

    #[test]
    fn should_append_untracked_to_unstaged() {
        let payload = DiffPayload::new(String::new(), "a\n".into(), "b\n".into());
        assert_eq!(payload.unstaged_with_untracked(), "a\nb\n");

        let payload = DiffPayload::new(String::new(), "a".into(), "b\n".into());
        assert_eq!(payload.unstaged_with_untracked(), "a\nb\n");
    }

    #[test]
    fn should_shorten_hash() {
        assert_eq!(commit("abc123def456", "").short_hash(), "abc123d");
        assert_eq!(commit("abc", "").short_hash(), "abc");
    }

    #[test]
    fn should_parse_commit_date() {
        let entry = commit("abc", "2024-03-05 14:22:10 +0100");
        let date = entry.parsed_date().unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-03-05");
        assert!(commit("abc", "yesterday").parsed_date().is_none());
    }

    #[test]
    fn should_build_log_payload_with_latest_first() {
        let payload = LogPayload::new(vec![commit("new", ""), commit("old", "")]);
        assert_eq!(payload.total, 2);
        assert_eq!(payload.latest.unwrap().hash, "new");
    }

    #[test]
    fn should_treat_untracked_only_status_as_dirty() {
        let status = RepoStatus {
            not_added: vec!["notes.txt".into()],
            ..RepoStatus::default()
        };
        assert!(!status.is_clean());
        assert!(RepoStatus::default().is_clean());
    }
}
