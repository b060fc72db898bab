use serde::{Deserialize, Serialize};

use crate::app::{Region, Tab, ViewState};
use crate::ui::diff_view::{file_block_id, render_diff_body};
use crate::ui::file_list::{render_file_count, render_file_list, render_filter_bar};
use crate::ui::history_panel::render_history_panel;
use crate::ui::html::escape_html;
use crate::ui::status_panel::render_status_panel;
use crate::ui::styles;

pub const FILE_LIST_ID: &str = "file-list";
pub const FILE_COUNT_ID: &str = "file-count";
pub const FILTER_BAR_ID: &str = "filter-bar";
pub const DIFF_CONTENT_ID: &str = "diff-content";
pub const STATUS_CONTENT_ID: &str = "status-content";
pub const HISTORY_CONTENT_ID: &str = "history-content";

/// One DOM update for the page script to apply. Targets are element ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomPatch {
    /// Replace the inner HTML of the target
    Replace { target: String, html: String },
    SetClass {
        target: String,
        class: String,
        on: bool,
    },
    /// Move the tree highlight
    ActiveFile { index: Option<usize> },
    ScrollTo { target: String },
    ShowTab { tab: Tab },
}

impl DomPatch {
    fn replace(target: &str, html: String) -> Self {
        DomPatch::Replace {
            target: target.to_string(),
            html,
        }
    }

    fn collapse(state: &ViewState, index: usize) -> Self {
        DomPatch::SetClass {
            target: file_block_id(index),
            class: styles::COLLAPSED.to_string(),
            on: state.is_collapsed(index),
        }
    }
}

/// Turn refreshed regions into patches against the current state, in order.
pub fn render_patches(state: &ViewState, regions: &[Region]) -> Vec<DomPatch> {
    let mut patches = Vec::new();
    for region in regions {
        match *region {
            Region::Tabs => patches.push(DomPatch::ShowTab { tab: state.tab }),
            Region::FileList => {
                patches.push(DomPatch::replace(
                    FILE_LIST_ID,
                    render_file_list(state).render_children(),
                ));
                patches.push(DomPatch::replace(
                    FILE_COUNT_ID,
                    escape_html(&render_file_count(state)),
                ));
                patches.push(DomPatch::replace(
                    FILTER_BAR_ID,
                    render_filter_bar(state).render_children(),
                ));
            }
            Region::DiffBody => patches.push(DomPatch::replace(
                DIFF_CONTENT_ID,
                render_diff_body(state).render_children(),
            )),
            Region::FileCollapse(index) if index < state.files.len() => {
                patches.push(DomPatch::collapse(state, index));
            }
            Region::FileCollapse(_) => {}
            Region::AllCollapse => {
                patches.extend((0..state.files.len()).map(|index| DomPatch::collapse(state, index)));
            }
            Region::ActiveFile => patches.push(DomPatch::ActiveFile {
                index: state.active_file,
            }),
            Region::ScrollToFile(index) => patches.push(DomPatch::ScrollTo {
                target: file_block_id(index),
            }),
            Region::StatusPanel => patches.push(DomPatch::replace(
                STATUS_CONTENT_ID,
                render_status_panel(state).render_children(),
            )),
            Region::HistoryPanel => patches.push(DomPatch::replace(
                HISTORY_CONTENT_ID,
                render_history_panel(state).render_children(),
            )),
        }
    }
    patches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DiffSources, Loadable};
    use crate::model::FileChange;

    fn state_with_files(paths: &[&str]) -> ViewState {
        let mut state = ViewState::default();
        state.diff = Loadable::Ready(DiffSources::default());
        state.files = paths.iter().map(|p| FileChange::new(*p)).collect();
        state.active_file = Some(0);
        state
    }

    #[test]
    fn should_patch_only_the_toggled_block() {
        let mut state = state_with_files(&["a.rs", "b.rs"]);
        state.collapsed.insert("b.rs".to_string());

        let patches = render_patches(&state, &[Region::FileCollapse(1)]);

        assert_eq!(
            patches,
            vec![DomPatch::SetClass {
                target: "file-1".to_string(),
                class: "collapsed".to_string(),
                on: true,
            }]
        );
    }

    #[test]
    fn should_patch_every_block_for_collapse_all() {
        let state = state_with_files(&["a.rs", "b.rs", "c.rs"]);
        let patches = render_patches(&state, &[Region::AllCollapse]);
        assert_eq!(patches.len(), 3);
    }

    #[test]
    fn should_replace_list_count_and_filter_bar() {
        let state = state_with_files(&["a.rs", "b.rs"]);

        let patches = render_patches(&state, &[Region::FileList]);

        let targets: Vec<_> = patches
            .iter()
            .filter_map(|p| match p {
                DomPatch::Replace { target, .. } => Some(target.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec!["file-list", "file-count", "filter-bar"]);
        assert_eq!(patches[1], DomPatch::replace("file-count", "2".to_string()));
    }

    #[test]
    fn should_serialize_with_op_tag() {
        let json = serde_json::to_value(DomPatch::ScrollTo {
            target: "file-2".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"op": "scroll_to", "target": "file-2"}));

        let json = serde_json::to_value(DomPatch::ShowTab { tab: Tab::History }).unwrap();
        assert_eq!(json, serde_json::json!({"op": "show_tab", "tab": "history"}));
    }

    #[test]
    fn should_skip_collapse_patch_for_missing_file() {
        let state = state_with_files(&["a.rs"]);
        assert!(render_patches(&state, &[Region::FileCollapse(5)]).is_empty());
    }
}
