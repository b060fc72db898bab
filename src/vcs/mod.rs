//! Repository access and diff text handling.
//!
//! Git is the only backend. Metadata (discovery, status, history) goes through git2;
//! diff text comes from the git CLI so its output matches what users see in a terminal.

pub mod diff_parser;
pub mod git;
pub mod traits;
pub mod untracked;

use std::path::Path;

pub use diff_parser::parse_unified_diff;
pub use git::GitBackend;
pub use traits::{VcsBackend, VcsInfo};

use crate::error::Result;

/// Find the repository containing `start` and return its backend.
pub fn discover(start: &Path) -> Result<Box<dyn VcsBackend>> {
    Ok(Box::new(GitBackend::discover(start)?))
}
