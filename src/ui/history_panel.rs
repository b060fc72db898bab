use crate::app::{Loadable, ViewState};
use crate::model::{CommitEntry, LogPayload};
use crate::ui::diff_view::render_error;
use crate::ui::html::{Element, el};
use crate::ui::styles;

const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Contents of `#history-content`.
pub fn render_history_panel(state: &ViewState) -> Element {
    let root = el("div");
    match &state.history {
        Loadable::NotLoaded => root,
        Loadable::Loading => root.child(el("div").class(styles::LOADING).text("Loading history...")),
        Loadable::Failed(message) => root.child(render_error(message)),
        Loadable::Ready(log) => root.children(render_log(log)),
    }
}

fn render_log(log: &LogPayload) -> Vec<Element> {
    if log.all.is_empty() {
        return vec![
            el("div")
                .class(styles::EMPTY_STATE)
                .text("No commit history available"),
        ];
    }
    log.all.iter().map(render_commit).collect()
}

fn render_commit(commit: &CommitEntry) -> Element {
    // Fall back to the raw string for dates git formatted unexpectedly
    let date = commit
        .parsed_date()
        .map(|d| d.format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|| commit.date.clone());

    el("div")
        .class("commit-item")
        .attr("title", commit.hash.as_str())
        .child(el("div").class("commit-hash").text(commit.short_hash()))
        .child(el("div").class("commit-message").text(commit.message.as_str()))
        .child(
            el("div")
                .class("commit-author")
                .text(format!("{} • {}", commit.author_name, date)),
        )
}
