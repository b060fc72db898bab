use crate::app::{Loadable, ViewState};
use crate::model::{FileChange, FileStatus, Hunk, SideLine};
use crate::ui::html::{Element, el, text};
use crate::ui::styles;
use crate::view::pair_hunk;

pub fn file_block_id(index: usize) -> String {
    format!("file-{index}")
}

/// Contents of `#diff-content`.
pub fn render_diff_body(state: &ViewState) -> Element {
    let root = el("div");
    match &state.diff {
        Loadable::NotLoaded | Loadable::Loading => root.child(
            el("div")
                .class(styles::LOADING)
                .text("Loading diff..."),
        ),
        Loadable::Failed(message) => root.child(render_error(message)),
        Loadable::Ready(_) if state.files.is_empty() => root.child(
            el("div")
                .class(styles::EMPTY_STATE)
                .text("No changes to display"),
        ),
        Loadable::Ready(_) => root.children(
            state
                .files
                .iter()
                .enumerate()
                .map(|(index, file)| render_file_block(file, index, state.is_collapsed(index))),
        ),
    }
}

pub fn render_error(message: &str) -> Element {
    el("div")
        .class(styles::ERROR)
        .text(format!("Error: {message}"))
}

pub fn render_file_block(file: &FileChange, index: usize, collapsed: bool) -> Element {
    let status = file.status();
    el("div")
        .classes([
            "diff-file",
            styles::file_block_class(status),
            if collapsed { styles::COLLAPSED } else { "" },
        ])
        .id(file_block_id(index))
        .attr("data-file", file.path.as_str())
        .attr("data-file-index", index.to_string())
        .child(render_file_header(file, index, status, collapsed))
        .child(render_file_content(file, status))
}

fn render_file_header(file: &FileChange, index: usize, status: FileStatus, collapsed: bool) -> Element {
    let mut stats = el("span").class("file-stats-header");
    match status {
        FileStatus::Deleted => {
            stats = stats
                .child(el("span").class("file-deleted-badge").text("DELETED"))
                .child(removed_count(file));
        }
        FileStatus::New => {
            stats = stats
                .child(el("span").class("file-new-badge").text("NEW"))
                .child(added_count(file));
        }
        FileStatus::Modified => {
            stats = stats
                .child(added_count(file))
                .child(text(" "))
                .child(removed_count(file));
        }
    }

    let mut header = el("div")
        .classes(["diff-file-header", styles::file_header_class(status)])
        .child(
            el("button")
                .class("collapse-toggle")
                .attr("type", "button")
                .attr("data-collapse-index", index.to_string())
                .attr("aria-expanded", (!collapsed).to_string())
                .attr("title", "Toggle file")
                .trusted(styles::ICON_CHEVRON),
        )
        .child(el("span").class("file-path").text(file.path.as_str()));

    if let Some(provenance) = file.provenance {
        if provenance.has_staged() {
            header = header.child(el("span").class("badge badge-staged").text("Staged"));
        }
        if provenance.has_unstaged() {
            header = header.child(el("span").class("badge badge-unstaged").text("Unstaged"));
        }
    }
    header.child(stats)
}

fn added_count(file: &FileChange) -> Element {
    el("span")
        .class("added")
        .text(format!("+{}", file.added_lines))
}

fn removed_count(file: &FileChange) -> Element {
    el("span")
        .class("removed")
        .text(format!("-{}", file.removed_lines))
}

fn render_file_content(file: &FileChange, status: FileStatus) -> Element {
    match status {
        FileStatus::Deleted => el("div").class("diff-deleted-content").child(
            el("div")
                .class("deleted-message")
                .child(el("span").class("deleted-text").text("This file was deleted")),
        ),
        _ if !file.has_content() => el("div").class("diff-empty-content").child(
            el("div")
                .class("empty-diff-message")
                .child(el("span").class("empty-text").text("No diff content available"))
                .child(el("span").class("empty-subtext").text(
                    "This file may be binary, too large, or have formatting changes",
                )),
        ),
        FileStatus::New => el("div")
            .classes(["diff-split-view", "single"])
            .child(render_side(&file.hunks, Side::New, true)),
        FileStatus::Modified => el("div")
            .class("diff-split-view")
            .child(render_side(&file.hunks, Side::Old, false))
            .child(render_side(&file.hunks, Side::New, false)),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Old,
    New,
}

/// One column of the split view. With `present_only`, rows where this side is absent
/// are skipped instead of padded.
fn render_side(hunks: &[Hunk], side: Side, present_only: bool) -> Element {
    let mut column = el("div").classes([
        "diff-side",
        match side {
            Side::Old => "old",
            Side::New => "new",
        },
    ]);

    for hunk in hunks.iter().filter(|h| !h.lines.is_empty()) {
        column = column.child(render_hunk_header(hunk));
        for pair in pair_hunk(hunk) {
            let line = match side {
                Side::Old => pair.old,
                Side::New => pair.new,
            };
            if line.is_none() && present_only {
                continue;
            }
            column = column.child(render_split_line(line.as_ref()));
        }
    }
    column
}

fn render_hunk_header(hunk: &Hunk) -> Element {
    let label = if hunk.is_defaulted() {
        "@@ @@".to_string()
    } else {
        format!(
            "@@ -{},{} +{},{} @@",
            hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
        )
    };
    el("div").class("diff-hunk-header").text(label)
}

fn render_split_line(line: Option<&SideLine>) -> Element {
    let (number, content) = match line {
        Some(line) => (line.line_number.to_string(), line.text.as_str()),
        None => (String::new(), ""),
    };
    el("div")
        .classes(["diff-split-line", styles::line_class(line.map(|l| l.kind))])
        .child(el("span").class("diff-line-number").text(number))
        .child(el("span").class("diff-line-content").text(content))
}
