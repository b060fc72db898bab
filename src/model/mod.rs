pub mod diff_types;
pub mod repo;

pub use diff_types::{
    DiffLine, FileChange, FileStatus, Hunk, HunkHeader, HunkRange, LineKind, LinePair, Provenance,
    SideLine,
};
pub use repo::{
    COMMIT_DATE_FORMAT, CommitEntry, DiffPayload, ErrorPayload, LogPayload, RenamedPath, RepoStatus,
};
