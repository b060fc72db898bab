//! Pseudo-diffs for untracked files, so they show up as entirely new files.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Abbreviated id written when the blob id is not known.
const ZERO_ID: &str = "0000000";

/// Build a unified diff that adds every line of `content` as a new file.
pub fn synthesize_new_file_diff(path: &str, content: &str, blob_id: Option<&str>) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let short_id = blob_id.map_or(ZERO_ID, |id| &id[..7.min(id.len())]);

    let mut out = String::new();
    let _ = writeln!(out, "diff --git {path} {path}");
    let _ = writeln!(out, "new file mode 100644");
    let _ = writeln!(out, "index {ZERO_ID}..{short_id}");
    let _ = writeln!(out, "--- /dev/null");
    let _ = writeln!(out, "+++ {path}");
    let _ = writeln!(out, "@@ -0,0 +1,{} @@", lines.len());
    for line in lines {
        let _ = writeln!(out, "+{line}");
    }
    out
}

/// Read each untracked file below `root` and concatenate their pseudo-diffs.
///
/// Files that cannot be read as text (permissions, deleted since status, binary) are
/// left out with a warning.
pub fn untracked_diffs<F>(root: &Path, paths: &[String], blob_id: F) -> String
where
    F: Fn(&[u8]) -> Option<String>,
{
    let mut out = String::new();
    for path in paths {
        let bytes = match fs::read(root.join(path)) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Could not read untracked file: {path} ({e})");
                continue;
            }
        };
        let Ok(content) = std::str::from_utf8(&bytes) else {
            log::warn!("Could not read untracked file: {path} (not valid UTF-8)");
            continue;
        };
        let id = blob_id(&bytes);
        out.push_str(&synthesize_new_file_diff(path, content, id.as_deref()));
    }
    out
}
