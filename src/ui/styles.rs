//! CSS class names and inline icons shared by the renderers.

use crate::model::{FileStatus, LineKind, Provenance};

pub const ACTIVE: &str = "active";
pub const COLLAPSED: &str = "collapsed";
pub const EMPTY_STATE: &str = "empty-state";
pub const ERROR: &str = "error";
pub const LOADING: &str = "loading-content";

pub fn line_class(kind: Option<LineKind>) -> &'static str {
    match kind {
        Some(LineKind::Context) => "context",
        Some(LineKind::Added) => "added",
        Some(LineKind::Removed) => "removed",
        None => "empty",
    }
}

pub fn file_block_class(status: FileStatus) -> &'static str {
    match status {
        FileStatus::New => "diff-file-new",
        FileStatus::Deleted => "diff-file-deleted",
        FileStatus::Modified => "",
    }
}

pub fn file_header_class(status: FileStatus) -> &'static str {
    match status {
        FileStatus::New => "diff-file-header-new",
        FileStatus::Deleted => "diff-file-header-deleted",
        FileStatus::Modified => "",
    }
}

pub fn provenance_class(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::Staged => "badge-staged",
        Provenance::Unstaged => "badge-unstaged",
        Provenance::Both => "badge-mixed",
    }
}

pub fn status_icon(status: FileStatus, added: usize, removed: usize) -> Option<&'static str> {
    match status {
        FileStatus::New => Some(ICON_ADDED),
        FileStatus::Deleted => Some(ICON_REMOVED),
        FileStatus::Modified if added > 0 && removed > 0 => Some(ICON_MODIFIED),
        FileStatus::Modified => None,
    }
}

pub const ICON_FILE: &str = r#"<svg class="icon-file" aria-hidden="true" height="16" viewBox="0 0 16 16" width="16"><path d="M2 1.75C2 .784 2.784 0 3.75 0h6.586c.464 0 .909.184 1.237.513l2.914 2.914c.329.328.513.773.513 1.237v9.586A1.75 1.75 0 0 1 13.25 16h-9.5A1.75 1.75 0 0 1 2 14.25Zm1.75-.25a.25.25 0 0 0-.25.25v12.5c0 .138.112.25.25.25h9.5a.25.25 0 0 0 .25-.25V6h-2.75A1.75 1.75 0 0 1 9 4.25V1.5Zm6.75.062V4.25c0 .138.112.25.25.25h2.688l-.011-.013-2.914-2.914-.013-.011Z"></path></svg>"#;

pub const ICON_DIRECTORY: &str = r#"<svg class="icon-directory" aria-hidden="true" height="16" viewBox="0 0 16 16" width="16"><path d="M1.75 1A1.75 1.75 0 0 0 0 2.75v10.5C0 14.216.784 15 1.75 15h12.5A1.75 1.75 0 0 0 16 13.25v-8.5A1.75 1.75 0 0 0 14.25 3H7.5a.25.25 0 0 1-.2-.1l-.9-1.2C6.07 1.26 5.55 1 5 1H1.75Z"></path></svg>"#;

pub const ICON_CHEVRON: &str = r#"<svg class="folder-arrow" aria-hidden="true" height="16" viewBox="0 0 16 16" width="16"><path d="M6.22 3.22a.75.75 0 0 1 1.06 0l4.25 4.25a.75.75 0 0 1 0 1.06l-4.25 4.25a.75.75 0 0 1-1.06-1.06L9.94 8 6.22 4.28a.75.75 0 0 1 0-1.06Z"></path></svg>"#;

pub const ICON_ADDED: &str = r#"<svg class="icon-added" aria-hidden="true" height="16" viewBox="0 0 16 16" width="16"><path d="M2.75 1h10.5c.966 0 1.75.784 1.75 1.75v10.5A1.75 1.75 0 0 1 13.25 15H2.75A1.75 1.75 0 0 1 1 13.25V2.75C1 1.784 1.784 1 2.75 1Zm10.5 1.5H2.75a.25.25 0 0 0-.25.25v10.5c0 .138.112.25.25.25h10.5a.25.25 0 0 0 .25-.25V2.75a.25.25 0 0 0-.25-.25ZM8 4a.75.75 0 0 1 .75.75v2.5h2.5a.75.75 0 0 1 0 1.5h-2.5v2.5a.75.75 0 0 1-1.5 0v-2.5h-2.5a.75.75 0 0 1 0-1.5h2.5v-2.5A.75.75 0 0 1 8 4Z"></path></svg>"#;

pub const ICON_REMOVED: &str = r#"<svg class="icon-removed" aria-hidden="true" height="16" viewBox="0 0 16 16" width="16"><path d="M13.25 1c.966 0 1.75.784 1.75 1.75v10.5A1.75 1.75 0 0 1 13.25 15H2.75A1.75 1.75 0 0 1 1 13.25V2.75C1 1.784 1.784 1 2.75 1ZM2.75 2.5a.25.25 0 0 0-.25.25v10.5c0 .138.112.25.25.25h10.5a.25.25 0 0 0 .25-.25V2.75a.25.25 0 0 0-.25-.25Zm8.5 6.25h-6.5a.75.75 0 0 1 0-1.5h6.5a.75.75 0 0 1 0 1.5Z"></path></svg>"#;

pub const ICON_MODIFIED: &str = r#"<svg class="icon-modified" aria-hidden="true" height="16" viewBox="0 0 16 16" width="16"><path d="M13.25 1c.966 0 1.75.784 1.75 1.75v10.5A1.75 1.75 0 0 1 13.25 15H2.75A1.75 1.75 0 0 1 1 13.25V2.75C1 1.784 1.784 1 2.75 1ZM2.75 2.5a.25.25 0 0 0-.25.25v10.5c0 .138.112.25.25.25h10.5a.25.25 0 0 0 .25-.25V2.75a.25.25 0 0 0-.25-.25ZM8 10a2 2 0 1 1-.001-3.999A2 2 0 0 1 8 10Z"></path></svg>"#;
