use crate::app::{Loadable, ViewState};
use crate::model::RepoStatus;
use crate::ui::diff_view::render_error;
use crate::ui::html::{Element, el};
use crate::ui::styles;

/// Contents of `#status-content`.
pub fn render_status_panel(state: &ViewState) -> Element {
    let root = el("div");
    match &state.status {
        Loadable::NotLoaded => root,
        Loadable::Loading => root.child(el("div").class(styles::LOADING).text("Loading status...")),
        Loadable::Failed(message) => root.child(render_error(message)),
        Loadable::Ready(status) => root.children(render_status(status)),
    }
}

fn render_status(status: &RepoStatus) -> Vec<Element> {
    let mut sections = Vec::new();

    if let Some(branch) = &status.current {
        sections.push(
            el("div")
                .class("status-branch")
                .text(format!("On branch {branch}")),
        );
    }

    let renamed: Vec<String> = status
        .renamed
        .iter()
        .map(|r| format!("{} → {}", r.from, r.to))
        .collect();

    let categories: [(&str, &[String], &str); 6] = [
        ("Modified", status.modified.as_slice(), "status-modified"),
        ("Added", status.created.as_slice(), "status-added"),
        ("Untracked", status.not_added.as_slice(), "status-added"),
        ("Deleted", status.deleted.as_slice(), "status-deleted"),
        ("Renamed", renamed.as_slice(), "status-renamed"),
        ("Conflicted", status.conflicted.as_slice(), "status-conflicted"),
    ];

    let mut any = false;
    for (title, files, class) in categories {
        if files.is_empty() {
            continue;
        }
        any = true;
        sections.push(
            el("div")
                .class("status-item")
                .child(
                    el("div")
                        .class("status-category")
                        .text(format!("{title} ({})", files.len())),
                )
                .children(
                    files
                        .iter()
                        .map(|file| el("div").classes(["status-file", class]).text(file.as_str())),
                ),
        );
    }

    if !any {
        sections.push(
            el("div")
                .class(styles::EMPTY_STATE)
                .text("Working directory clean"),
        );
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RenamedPath;

    fn ready(status: RepoStatus) -> ViewState {
        let mut state = ViewState::default();
        state.status = Loadable::Ready(status);
        state
    }

    #[test]
    fn should_show_clean_working_directory() {
        let html = render_status_panel(&ready(RepoStatus {
            current: Some("main".to_string()),
            ..RepoStatus::default()
        }))
        .render();

        assert!(html.contains("On branch main"));
        assert!(html.contains("Working directory clean"));
    }

    #[test]
    fn should_list_categories_with_counts() {
        let html = render_status_panel(&ready(RepoStatus {
            modified: vec!["a.rs".to_string(), "b.rs".to_string()],
            not_added: vec!["notes.txt".to_string()],
            renamed: vec![RenamedPath {
                from: "old.rs".to_string(),
                to: "new.rs".to_string(),
            }],
            ..RepoStatus::default()
        }))
        .render();

        assert!(html.contains("Modified (2)"));
        assert!(html.contains("Untracked (1)"));
        assert!(html.contains("old.rs → new.rs"));
        assert!(!html.contains("Deleted"));
        assert!(!html.contains("Working directory clean"));
    }

    #[test]
    fn should_show_inline_error() {
        let mut state = ViewState::default();
        state.status = Loadable::Failed("index locked".to_string());

        let html = render_status_panel(&state).render();

        assert!(html.contains("class=\"error\">Error: index locked<"));
    }
}
