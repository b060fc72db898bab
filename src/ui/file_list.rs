use crate::app::{Loadable, ViewState};
use crate::model::FileChange;
use crate::ui::html::{Element, Node, el};
use crate::ui::styles;
use crate::view::{FileTreeNode, FolderNode, StageFilter, build_file_tree};

const INDENT_PX: usize = 20;

/// Contents of `#file-list`.
pub fn render_file_list(state: &ViewState) -> Element {
    let root = el("div");
    match &state.diff {
        Loadable::NotLoaded | Loadable::Loading => root,
        Loadable::Failed(_) => root.child(no_files()),
        Loadable::Ready(_) if state.files.is_empty() => root.child(no_files()),
        Loadable::Ready(_) => {
            let tree = build_file_tree(&state.files);
            root.children(render_folder(&tree, 0, state.active_file))
        }
    }
}

/// Contents of `#file-count`.
pub fn render_file_count(state: &ViewState) -> String {
    state.files.len().to_string()
}

/// Contents of `#filter-bar`.
pub fn render_filter_bar(state: &ViewState) -> Element {
    el("div").children(StageFilter::ALL.iter().map(|filter| {
        el("button")
            .classes([
                "filter-btn",
                if *filter == state.filter { styles::ACTIVE } else { "" },
            ])
            .attr("type", "button")
            .attr("data-filter", filter.as_str())
            .text(filter.label())
    }))
}

fn no_files() -> Element {
    el("div")
        .classes([styles::EMPTY_STATE, "file-list-empty"])
        .text("No files changed")
}

fn render_folder(folder: &FolderNode<'_>, level: usize, active: Option<usize>) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (name, entry) in folder.entries() {
        match entry {
            FileTreeNode::Folder(child) => {
                nodes.push(
                    el("div")
                        .class("tree-folder")
                        .attr("style", format!("padding-left: {}px", level * INDENT_PX))
                        .attr("data-level", level.to_string())
                        .child(el("div").class("folder-toggle").trusted(styles::ICON_CHEVRON))
                        .trusted(styles::ICON_DIRECTORY)
                        .child(el("span").class("folder-name").text(name))
                        .into(),
                );
                nodes.push(
                    el("div")
                        .class("folder-contents")
                        .children(render_folder(child, level + 1, active))
                        .into(),
                );
            }
            FileTreeNode::Leaf(leaf) => {
                nodes.push(render_file_entry(name, leaf.file, leaf.index, level, active).into());
            }
        }
    }
    nodes
}

fn render_file_entry(
    name: &str,
    file: &FileChange,
    index: usize,
    level: usize,
    active: Option<usize>,
) -> Element {
    let is_active = active == Some(index);
    let mut entry = el("div")
        .classes(["tree-file", if is_active { styles::ACTIVE } else { "" }])
        .attr("data-file-index", index.to_string())
        .attr("title", file.path.as_str())
        .attr("style", format!("padding-left: {}px", level * INDENT_PX + INDENT_PX))
        .child(
            el("div")
                .class("file-info")
                .trusted(styles::ICON_FILE)
                .child(el("span").class("file-name").text(name)),
        );

    if let Some(provenance) = file.provenance {
        entry = entry.child(
            el("span")
                .classes(["badge", styles::provenance_class(provenance)])
                .text(provenance.label()),
        );
    }
    if let Some(icon) = styles::status_icon(file.status(), file.added_lines, file.removed_lines) {
        entry = entry.trusted(icon);
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DiffSources;
    use crate::model::Provenance;

    fn state_with(paths: &[&str]) -> ViewState {
        let files: Vec<FileChange> = paths
            .iter()
            .map(|p| FileChange {
                added_lines: 1,
                ..FileChange::new(*p)
            })
            .collect();
        let mut state = ViewState::default();
        state.diff = Loadable::Ready(DiffSources::default());
        state.active_file = if files.is_empty() { None } else { Some(0) };
        state.files = files;
        state
    }

    #[test]
    fn should_show_empty_state_without_files() {
        let html = render_file_list(&state_with(&[])).render();
        assert!(html.contains("No files changed"));
    }

    #[test]
    fn should_render_nested_tree_with_active_file() {
        let html = render_file_list(&state_with(&["src/main.rs", "Cargo.toml"])).render();

        let folder = html.find("folder-name\">src<").unwrap();
        let cargo = html.find(">Cargo.toml<").unwrap();
        assert!(cargo < folder, "Cargo.toml sorts before src");
        assert!(html.contains("class=\"tree-file active\" data-file-index=\"0\""));
        assert!(html.contains("class=\"tree-file\" data-file-index=\"1\""));
        assert!(html.contains("padding-left: 20px"));
    }

    #[test]
    fn should_escape_file_names() {
        let html = render_file_list(&state_with(&["<img src=x>.rs"])).render();
        assert!(html.contains("&lt;img src=x&gt;.rs"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn should_show_provenance_badge() {
        let mut state = state_with(&["a.rs"]);
        state.files[0].provenance = Some(Provenance::Both);

        let html = render_file_list(&state).render();

        assert!(html.contains("badge badge-mixed\">Mixed<"));
    }

    #[test]
    fn should_mark_active_filter() {
        let mut state = ViewState::default();
        state.filter = StageFilter::Staged;

        let html = render_filter_bar(&state).render();

        assert!(html.contains("class=\"filter-btn active\" type=\"button\" data-filter=\"staged\""));
        assert!(html.contains("class=\"filter-btn\" type=\"button\" data-filter=\"all\""));
    }
}
