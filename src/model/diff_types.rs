use serde::{Deserialize, Serialize};

/// How a file reads in the split view, derived from its line counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    New,
    Deleted,
    Modified,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::New => "new",
            FileStatus::Deleted => "deleted",
            FileStatus::Modified => "modified",
        }
    }
}

/// Where a reconciled file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Staged,
    Unstaged,
    Both,
}

impl Provenance {
    pub fn has_staged(&self) -> bool {
        matches!(self, Provenance::Staged | Provenance::Both)
    }

    pub fn has_unstaged(&self) -> bool {
        matches!(self, Provenance::Unstaged | Provenance::Both)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Staged => "Staged",
            Provenance::Unstaged => "Unstaged",
            Provenance::Both => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Context,
    Added,
    Removed,
}

impl LineKind {
    pub fn marker(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Context => "context",
            LineKind::Added => "added",
            LineKind::Removed => "removed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: LineKind,
    /// Line content without its leading marker
    pub text: String,
}

impl DiffLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Line ranges from an `@@ -o,oc +n,nc @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunkRange {
    pub old_start: u32,
    pub old_count: u32,
    pub new_start: u32,
    pub new_count: u32,
}

impl Default for HunkRange {
    fn default() -> Self {
        Self {
            old_start: 1,
            old_count: 1,
            new_start: 1,
            new_count: 1,
        }
    }
}

/// Outcome of reading a hunk header. Unreadable headers still open a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HunkHeader {
    Parsed(HunkRange),
    Defaulted,
}

impl HunkHeader {
    pub fn range(&self) -> HunkRange {
        match self {
            HunkHeader::Parsed(range) => *range,
            HunkHeader::Defaulted => HunkRange::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub header: HunkHeader,
    /// Starting line number in the old file
    pub old_start: u32,
    /// Number of lines from the old file in this hunk
    pub old_count: u32,
    /// Starting line number in the new file
    pub new_start: u32,
    /// Number of lines from the new file in this hunk
    pub new_count: u32,
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    pub fn new(header: HunkHeader) -> Self {
        let range = header.range();
        Self {
            header,
            old_start: range.old_start,
            old_count: range.old_count,
            new_start: range.new_start,
            new_count: range.new_count,
            lines: Vec::new(),
        }
    }

    pub fn is_defaulted(&self) -> bool {
        self.header == HunkHeader::Defaulted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub hunks: Vec<Hunk>,
    pub added_lines: usize,
    pub removed_lines: usize,
    /// Only set by the stage reconciler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl FileChange {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hunks: Vec::new(),
            added_lines: 0,
            removed_lines: 0,
            provenance: None,
        }
    }

    pub fn status(&self) -> FileStatus {
        match (self.added_lines, self.removed_lines) {
            (0, removed) if removed > 0 => FileStatus::Deleted,
            (added, 0) if added > 0 => FileStatus::New,
            _ => FileStatus::Modified,
        }
    }

    pub fn has_content(&self) -> bool {
        self.hunks.iter().any(|hunk| !hunk.lines.is_empty())
    }

    /// Final path segment, used for tree labels
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// One side of a split-view row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideLine {
    pub line_number: u32,
    pub text: String,
    pub kind: LineKind,
}

/// One row of the split view. At least one side is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    pub old: Option<SideLine>,
    pub new: Option<SideLine>,
}
