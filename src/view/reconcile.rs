use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{FileChange, Provenance};

/// Which side of the index to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageFilter {
    #[default]
    All,
    Staged,
    Unstaged,
}

impl StageFilter {
    pub const ALL: [StageFilter; 3] = [StageFilter::All, StageFilter::Staged, StageFilter::Unstaged];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageFilter::All => "all",
            StageFilter::Staged => "staged",
            StageFilter::Unstaged => "unstaged",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageFilter::All => "All changes",
            StageFilter::Staged => "Staged",
            StageFilter::Unstaged => "Unstaged",
        }
    }
}

/// Combine staged and unstaged parses according to the filter.
///
/// With `All`, a path present on both sides is emitted once using the staged record.
/// Staged records come first in their own order, followed by unstaged-only records.
pub fn reconcile(
    staged: &[FileChange],
    unstaged: &[FileChange],
    filter: StageFilter,
) -> Vec<FileChange> {
    match filter {
        StageFilter::Staged => staged.to_vec(),
        StageFilter::Unstaged => unstaged.to_vec(),
        StageFilter::All => merge_by_path(staged, unstaged),
    }
}

fn merge_by_path(staged: &[FileChange], unstaged: &[FileChange]) -> Vec<FileChange> {
    let unstaged_paths: HashSet<&str> = unstaged.iter().map(|f| f.path.as_str()).collect();
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut merged: Vec<FileChange> = Vec::with_capacity(staged.len() + unstaged.len());

    for file in staged {
        if !emitted.insert(&file.path) {
            continue;
        }
        let provenance = if unstaged_paths.contains(file.path.as_str()) {
            Provenance::Both
        } else {
            Provenance::Staged
        };
        merged.push(with_provenance(file, provenance));
    }

    for file in unstaged {
        if !emitted.insert(&file.path) {
            continue;
        }
        merged.push(with_provenance(file, Provenance::Unstaged));
    }

    merged
}

fn with_provenance(file: &FileChange, provenance: Provenance) -> FileChange {
    FileChange {
        provenance: Some(provenance),
        ..file.clone()
    }
}
