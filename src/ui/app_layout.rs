use crate::app::{Tab, ViewState};
use crate::ui::diff_view::render_diff_body;
use crate::ui::file_list::{render_file_count, render_file_list, render_filter_bar};
use crate::ui::history_panel::render_history_panel;
use crate::ui::html::{Element, el};
use crate::ui::patches::{
    DIFF_CONTENT_ID, FILE_COUNT_ID, FILE_LIST_ID, FILTER_BAR_ID, HISTORY_CONTENT_ID,
    STATUS_CONTENT_ID,
};
use crate::ui::status_bar::render_header;
use crate::ui::status_panel::render_status_panel;
use crate::ui::styles;
use crate::vcs::VcsInfo;

/// The whole page, as served from `/`. The page script sends `session_id` back with
/// every action.
pub fn render_page(state: &ViewState, info: &VcsInfo, session_id: &str) -> String {
    let head = el("head")
        .child(el("meta").attr("charset", "utf-8"))
        .child(
            el("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(el("title").text("Diffly"))
        .child(
            el("link")
                .attr("rel", "stylesheet")
                .attr("href", "/assets/style.css"),
        );

    let body = el("body")
        .attr("data-session", session_id)
        .child(render_header(state, info))
        .child(render_main_content(state))
        .child(el("script").attr("src", "/assets/app.js"));

    let html = el("html").attr("lang", "en").child(head).child(body);
    format!("<!DOCTYPE html>\n{}", html.render())
}

fn render_main_content(state: &ViewState) -> Element {
    el("main")
        .class("main")
        .child(
            tab_section(state, Tab::Diff)
                .child(render_sidebar(state))
                .child(
                    render_diff_body(state)
                        .id(DIFF_CONTENT_ID)
                        .class("diff-content"),
                ),
        )
        .child(tab_section(state, Tab::Status).child(render_status_panel(state).id(STATUS_CONTENT_ID)))
        .child(
            tab_section(state, Tab::History).child(render_history_panel(state).id(HISTORY_CONTENT_ID)),
        )
}

fn tab_section(state: &ViewState, tab: Tab) -> Element {
    el("section")
        .id(format!("{}-tab", tab.as_str()))
        .classes([
            "tab-content",
            if state.tab == tab { styles::ACTIVE } else { "" },
        ])
}

fn render_sidebar(state: &ViewState) -> Element {
    el("aside")
        .class("sidebar")
        .child(
            el("div")
                .class("sidebar-header")
                .child(el("span").text("Files changed"))
                .child(
                    el("span")
                        .id(FILE_COUNT_ID)
                        .class("file-count")
                        .text(render_file_count(state)),
                ),
        )
        .child(render_filter_bar(state).id(FILTER_BAR_ID).class("filter-bar"))
        .child(
            el("div")
                .class("collapse-controls")
                .child(
                    el("button")
                        .attr("type", "button")
                        .attr("data-action", "collapse_all")
                        .text("Collapse all"),
                )
                .child(
                    el("button")
                        .attr("type", "button")
                        .attr("data-action", "expand_all")
                        .text("Expand all"),
                ),
        )
        .child(render_file_list(state).id(FILE_LIST_ID).class("file-list"))
}
