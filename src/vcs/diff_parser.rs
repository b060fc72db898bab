//! Unified diff parser.
//!
//! Turns `git diff` output (with or without `a/`/`b/` prefixes) and synthesized
//! untracked-file diffs into FileChange records. Parsing never fails: unreadable
//! headers fall back to defaults and unknown lines are skipped.

use std::fmt::Write;

use crate::model::{DiffLine, FileChange, Hunk, HunkHeader, HunkRange, LineKind};

const FILE_HEADER: &str = "diff --git";
const HUNK_MARKER: &str = "@@";

/// Path recorded when a file header cannot be read.
pub const UNKNOWN_PATH: &str = "unknown";

/// Parse unified diff output into FileChange records, in input order.
pub fn parse_unified_diff(diff_text: &str) -> Vec<FileChange> {
    let mut files: Vec<FileChange> = Vec::new();
    let mut current_file: Option<FileChange> = None;
    let mut current_hunk: Option<Hunk> = None;

    for line in diff_text.lines() {
        if let Some(header) = line.strip_prefix(FILE_HEADER) {
            finish_file(&mut files, current_file.take(), current_hunk.take());
            current_file = Some(FileChange::new(parse_file_header_path(header)));
            continue;
        }

        // Hunks are only meaningful once a file header has been seen
        let Some(file) = current_file.as_mut() else {
            continue;
        };

        if line.starts_with(HUNK_MARKER) {
            finish_hunk(file, current_hunk.take());
            current_hunk = Some(Hunk::new(parse_hunk_header(line)));
            continue;
        }

        // Outside a hunk everything is metadata: index, mode, ---/+++ markers
        let Some(hunk) = current_hunk.as_mut() else {
            continue;
        };

        if let Some(text) = line.strip_prefix('+') {
            hunk.lines.push(DiffLine::new(LineKind::Added, text));
            file.added_lines += 1;
        } else if let Some(text) = line.strip_prefix('-') {
            hunk.lines.push(DiffLine::new(LineKind::Removed, text));
            file.removed_lines += 1;
        } else if let Some(text) = line.strip_prefix(' ') {
            hunk.lines.push(DiffLine::new(LineKind::Context, text));
        }
        // "\ No newline at end of file" and stray lines carry nothing to render
    }

    finish_file(&mut files, current_file, current_hunk);
    files
}

fn finish_hunk(file: &mut FileChange, hunk: Option<Hunk>) {
    if let Some(hunk) = hunk
        && !hunk.lines.is_empty()
    {
        file.hunks.push(hunk);
    }
}

fn finish_file(files: &mut Vec<FileChange>, file: Option<FileChange>, hunk: Option<Hunk>) {
    if let Some(mut file) = file {
        finish_hunk(&mut file, hunk);
        files.push(file);
    }
}

/// Read the path from the text following `diff --git`.
///
/// Tries `a/<old> b/<new>` first, then `<old> <new>`. The destination path wins.
fn parse_file_header_path(header: &str) -> String {
    let Some(paths) = header.strip_prefix(' ') else {
        return UNKNOWN_PATH.to_string();
    };

    prefixed_path(paths)
        .or_else(|| bare_path(paths))
        .unwrap_or(UNKNOWN_PATH)
        .to_string()
}

fn prefixed_path(paths: &str) -> Option<&str> {
    let rest = paths.strip_prefix("a/")?;
    let (old, new) = rest.rsplit_once(" b/")?;
    (!old.is_empty() && !new.is_empty()).then_some(new)
}

fn bare_path(paths: &str) -> Option<&str> {
    // Identical halves are unambiguous even when the path contains spaces
    let mid = paths.len() / 2;
    if paths.len() % 2 == 1
        && paths.as_bytes()[mid] == b' '
        && paths[..mid] == paths[mid + 1..]
    {
        return Some(&paths[..mid]);
    }

    let (old, new) = paths.rsplit_once(' ')?;
    (!old.is_empty() && !new.is_empty()).then_some(new)
}

/// Read `@@ -old_start[,old_count] +new_start[,new_count] @@`.
pub fn parse_hunk_header(line: &str) -> HunkHeader {
    read_hunk_range(line).map_or(HunkHeader::Defaulted, HunkHeader::Parsed)
}

fn read_hunk_range(line: &str) -> Option<HunkRange> {
    let mut parts = line.split_whitespace();
    if parts.next()? != HUNK_MARKER {
        return None;
    }

    let (old_start, old_count) = parse_range(parts.next()?.strip_prefix('-')?)?;
    let (new_start, new_count) = parse_range(parts.next()?.strip_prefix('+')?)?;

    if parts.next()? != HUNK_MARKER {
        return None;
    }

    Some(HunkRange {
        old_start,
        old_count,
        new_start,
        new_count,
    })
}

fn parse_range(s: &str) -> Option<(u32, u32)> {
    match s.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((s.parse().ok()?, 1)),
    }
}

/// Serialize FileChange records back into unified diff text.
///
/// Headers are written without prefixes and hunk headers always carry counts.
pub fn write_unified_diff(files: &[FileChange]) -> String {
    let mut out = String::new();
    for file in files {
        let _ = writeln!(out, "{FILE_HEADER} {} {}", file.path, file.path);
        for hunk in &file.hunks {
            let _ = writeln!(
                out,
                "{HUNK_MARKER} -{},{} +{},{} {HUNK_MARKER}",
                hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
            );
            for line in &hunk.lines {
                let _ = writeln!(out, "{}{}", line.kind.marker(), line.text);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(hunk: &Hunk) -> Vec<LineKind> {
        hunk.lines.iter().map(|l| l.kind).collect()
    }

    #[test]
    fn should_return_nothing_for_empty_diff() {
        assert!(parse_unified_diff("").is_empty());
        assert!(parse_unified_diff("   \n\t\n").is_empty());
    }

    #[test]
    fn should_parse_simple_file_change() {
        let diff = "diff --git file.txt file.txt\n@@ -1,2 +1,3 @@\n context\n-old\n+new1\n+new2\n";

        let files = parse_unified_diff(diff);

        assert_eq!(files.len(), 1);
        let file = &files[0];
        assert_eq!(file.path, "file.txt");
        assert_eq!(file.added_lines, 2);
        assert_eq!(file.removed_lines, 1);
        assert_eq!(file.hunks.len(), 1);
        assert_eq!(
            kinds(&file.hunks[0]),
            vec![
                LineKind::Context,
                LineKind::Removed,
                LineKind::Added,
                LineKind::Added
            ]
        );
        assert_eq!(file.hunks[0].lines[0].text, "context");
        assert_eq!(file.hunks[0].lines[2].text, "new1");
    }

    #[test]
    fn should_default_malformed_hunk_header() {
        let files = parse_unified_diff("diff --git a.txt a.txt\n@@ garbage @@\n+x\n");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "a.txt");
        let hunk = &files[0].hunks[0];
        assert_eq!(hunk.header, HunkHeader::Defaulted);
        assert_eq!(
            (hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count),
            (1, 1, 1, 1)
        );
        assert_eq!(hunk.lines, vec![DiffLine::new(LineKind::Added, "x")]);
    }

    #[test]
    fn should_parse_hunk_header() {
        assert_eq!(
            parse_hunk_header("@@ -1,3 +1,4 @@"),
            HunkHeader::Parsed(HunkRange {
                old_start: 1,
                old_count: 3,
                new_start: 1,
                new_count: 4
            })
        );
        assert_eq!(
            parse_hunk_header("@@ -10,5 +20,8 @@ fn context()").range(),
            HunkRange {
                old_start: 10,
                old_count: 5,
                new_start: 20,
                new_count: 8
            }
        );
    }

    #[test]
    fn should_parse_hunk_header_without_count() {
        let range = parse_hunk_header("@@ -5 +10 @@").range();
        assert_eq!(range.old_start, 5);
        assert_eq!(range.old_count, 1);
        assert_eq!(range.new_start, 10);
        assert_eq!(range.new_count, 1);
    }

    #[test]
    fn should_keep_zero_counts() {
        let range = parse_hunk_header("@@ -0,0 +1,2 @@").range();
        assert_eq!((range.old_start, range.old_count), (0, 0));
        assert_eq!((range.new_start, range.new_count), (1, 2));
    }

    #[test]
    fn should_default_unreadable_hunk_headers() {
        assert_eq!(parse_hunk_header("@@ invalid"), HunkHeader::Defaulted);
        assert_eq!(parse_hunk_header("@@ -a,b +c,d @@"), HunkHeader::Defaulted);
        assert_eq!(parse_hunk_header("@@ -1,2 +1,2"), HunkHeader::Defaulted);
        assert_eq!(parse_hunk_header("@@ +1,2 -1,2 @@"), HunkHeader::Defaulted);
    }

    #[test]
    fn should_parse_range() {
        assert_eq!(parse_range("10,5"), Some((10, 5)));
        assert_eq!(parse_range("42"), Some((42, 1)));
        assert_eq!(parse_range("abc"), None);
        assert_eq!(parse_range("1,def"), None);
    }

    #[test]
    fn should_read_prefixed_and_bare_headers() {
        assert_eq!(parse_file_header_path(" a/src/main.rs b/src/main.rs"), "src/main.rs");
        assert_eq!(parse_file_header_path(" src/main.rs src/main.rs"), "src/main.rs");
        assert_eq!(parse_file_header_path(" my notes.txt my notes.txt"), "my notes.txt");
        assert_eq!(parse_file_header_path(" a/old.txt b/new.txt"), "new.txt");
        assert_eq!(parse_file_header_path(" old.txt new.txt"), "new.txt");
    }

    #[test]
    fn should_fall_back_to_unknown_path() {
        assert_eq!(parse_file_header_path(""), UNKNOWN_PATH);
        assert_eq!(parse_file_header_path(" lonely"), UNKNOWN_PATH);
        assert_eq!(parse_file_header_path("x a b"), UNKNOWN_PATH);

        let files = parse_unified_diff("diff --git\n@@ -1 +1 @@\n+x\n");
        assert_eq!(files[0].path, UNKNOWN_PATH);
        assert_eq!(files[0].added_lines, 1);
    }

    #[test]
    fn should_parse_multiple_files_in_order() {
        let diff = "\
diff --git b.txt b.txt
index 1111111..2222222 100644
--- b.txt
+++ b.txt
@@ -1 +1 @@
-foo
+bar
diff --git a.txt a.txt
--- a.txt
+++ a.txt
@@ -1 +1 @@
-old
+new
";
        let files = parse_unified_diff(diff);
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["b.txt", "a.txt"]);
        assert!(files.iter().all(|f| f.hunks.len() == 1));
    }

    #[test]
    fn should_parse_multiple_hunks() {
        let diff = "\
diff --git multi.rs multi.rs
@@ -1,3 +1,4 @@
 fn first() {
+    // added
 }
@@ -10,3 +11,4 @@
 fn second() {
+    // also added
 }
";
        let files = parse_unified_diff(diff);
        assert_eq!(files[0].hunks.len(), 2);
        assert_eq!(files[0].hunks[0].old_start, 1);
        assert_eq!(files[0].hunks[1].old_start, 10);
        assert_eq!(files[0].hunks[1].new_start, 11);
        assert_eq!(files[0].added_lines, 2);
    }

    #[test]
    fn should_drop_metadata_and_no_newline_markers() {
        let diff = "\
diff --git no_newline.rs no_newline.rs
new file mode 100644
index 0000000..e69de29
--- /dev/null
+++ no_newline.rs
@@ -1,1 +1,1 @@
-old
\\ No newline at end of file
+new
\\ No newline at end of file
";
        let files = parse_unified_diff(diff);
        assert_eq!(files[0].hunks[0].lines.len(), 2);
        assert_eq!(files[0].added_lines, 1);
        assert_eq!(files[0].removed_lines, 1);
    }

    #[test]
    fn should_discard_empty_hunks() {
        let diff = "\
diff --git a.txt a.txt
@@ -1,1 +1,1 @@
@@ -5,1 +5,2 @@
 keep
+added
@@ -20,0 +21,0 @@
";
        let files = parse_unified_diff(diff);
        assert_eq!(files[0].hunks.len(), 1);
        assert_eq!(files[0].hunks[0].old_start, 5);
    }

    #[test]
    fn should_keep_file_without_hunks() {
        let diff = "diff --git image.png image.png\nBinary files image.png and image.png differ\n";
        let files = parse_unified_diff(diff);
        assert_eq!(files.len(), 1);
        assert!(files[0].hunks.is_empty());
        assert!(!files[0].has_content());
    }

    #[test]
    fn should_ignore_hunks_before_any_file_header() {
        let files = parse_unified_diff("@@ -1 +1 @@\n+orphan\ndiff --git a b\n");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].added_lines, 0);
    }

    #[test]
    fn should_count_exactly_the_classified_lines() {
        let diff = "\
diff --git a.rs a.rs
@@ -1,4 +1,4 @@
 one
-two
+deux
+zwei
 three
@@ -9 +9,0 @@
-nine
diff --git b.rs b.rs
@@ -1 +1 @@
+only
";
        for file in parse_unified_diff(diff) {
            let lines = file.hunks.iter().flat_map(|h| h.lines.iter());
            let added = lines.clone().filter(|l| l.kind == LineKind::Added).count();
            let removed = lines.filter(|l| l.kind == LineKind::Removed).count();
            assert_eq!(file.added_lines, added, "{}", file.path);
            assert_eq!(file.removed_lines, removed, "{}", file.path);
        }
    }

    #[test]
    fn should_reparse_written_diff_to_same_structure() {
        let diff = "\
diff --git a/src/lib.rs b/src/lib.rs
index 1111111..2222222 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -3,4 +3,5 @@ pub mod app;
 use std::fmt;
-use std::io;
+use std::io::{self, Write};
+use std::path::Path;

 fn main() {}
diff --git notes.txt notes.txt
@@ -0,0 +1,2 @@
+a
+b
";
        let parsed = parse_unified_diff(diff);
        let reparsed = parse_unified_diff(&write_unified_diff(&parsed));

        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn should_write_unprefixed_headers_with_counts() {
        let files = parse_unified_diff("diff --git a/x b/x\n@@ -2 +2 @@\n-a\n+b\n");
        assert_eq!(
            write_unified_diff(&files),
            "diff --git x x\n@@ -2,1 +2,1 @@\n-a\n+b\n"
        );
    }
}
