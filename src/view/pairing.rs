use crate::model::{DiffLine, Hunk, LineKind, LinePair, SideLine};

/// Pair a hunk's lines into split-view rows.
///
/// A run of removed lines is matched positionally against the run of added lines that
/// directly follows it. This is an approximation: unrelated neighbours can end up on the
/// same row when the runs differ in length.
pub fn pair_hunk(hunk: &Hunk) -> Vec<LinePair> {
    let lines = &hunk.lines;
    let mut rows = Vec::with_capacity(lines.len());
    let mut old_lineno = hunk.old_start;
    let mut new_lineno = hunk.new_start;

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        match line.kind {
            LineKind::Context => {
                rows.push(LinePair {
                    old: Some(side(old_lineno, line)),
                    new: Some(side(new_lineno, line)),
                });
                old_lineno += 1;
                new_lineno += 1;
                i += 1;
            }
            LineKind::Removed => {
                let del_start = i;
                let del_end = run_end(lines, del_start, LineKind::Removed);
                let add_start = del_end;
                let add_end = run_end(lines, add_start, LineKind::Added);

                let del_count = del_end - del_start;
                let add_count = add_end - add_start;

                for offset in 0..del_count.max(add_count) {
                    let old = (offset < del_count).then(|| {
                        let row = side(old_lineno, &lines[del_start + offset]);
                        old_lineno += 1;
                        row
                    });
                    let new = (offset < add_count).then(|| {
                        let row = side(new_lineno, &lines[add_start + offset]);
                        new_lineno += 1;
                        row
                    });
                    rows.push(LinePair { old, new });
                }

                i = add_end;
            }
            LineKind::Added => {
                rows.push(LinePair {
                    old: None,
                    new: Some(side(new_lineno, line)),
                });
                new_lineno += 1;
                i += 1;
            }
        }
    }

    rows
}

fn run_end(lines: &[DiffLine], start: usize, kind: LineKind) -> usize {
    lines[start..]
        .iter()
        .position(|line| line.kind != kind)
        .map_or(lines.len(), |len| start + len)
}

fn side(line_number: u32, line: &DiffLine) -> SideLine {
    SideLine {
        line_number,
        text: line.text.clone(),
        kind: line.kind,
    }
}
