use crate::app::{Tab, ViewState};
use crate::ui::html::{Element, el};
use crate::ui::styles;
use crate::vcs::VcsInfo;

pub fn render_header(state: &ViewState, info: &VcsInfo) -> Element {
    let repo_name = info
        .root_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| info.root_path.display().to_string());
    let branch = info.branch_name.as_deref().unwrap_or("detached");

    el("header")
        .class("header")
        .child(
            el("div")
                .class("header-title")
                .child(el("span").class("app-name").text("Diffly"))
                .child(el("span").class("repo-name").text(repo_name))
                .child(el("span").class("branch-name").text(branch)),
        )
        .child(render_tabs(state.tab))
}

fn render_tabs(active: Tab) -> Element {
    el("nav").class("nav").id("tabs").children(Tab::ALL.iter().map(|tab| {
        el("button")
            .classes(["nav-btn", if *tab == active { styles::ACTIVE } else { "" }])
            .attr("type", "button")
            .attr("data-tab", tab.as_str())
            .text(tab.label())
    }))
}
