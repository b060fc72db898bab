//! Pure transforms from parsed diffs to what the split view shows.

pub mod file_tree;
pub mod pairing;
pub mod reconcile;

pub use file_tree::{FileTreeNode, FolderNode, build_file_tree};
pub use pairing::pair_hunk;
pub use reconcile::{StageFilter, reconcile};
