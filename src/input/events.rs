use serde::{Deserialize, Serialize};

use crate::app::{Action, ObservedEntry, SelectOrigin, Tab};
use crate::view::StageFilter;

/// A browser event forwarded by the page script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// File tree click
    SelectFile { index: usize },
    /// IntersectionObserver callback batch
    Observe { entries: Vec<ObservedEntry> },
    ToggleCollapse { index: usize },
    CollapseAll,
    ExpandAll,
    SetFilter { filter: StageFilter },
    SwitchTab { tab: Tab },
}

pub fn map_event_to_action(event: ClientEvent) -> Action {
    match event {
        ClientEvent::SelectFile { index } => Action::SelectFile {
            index,
            origin: SelectOrigin::Click,
        },
        ClientEvent::Observe { entries } => Action::Observe(entries),
        ClientEvent::ToggleCollapse { index } => Action::ToggleCollapse { index },
        ClientEvent::CollapseAll => Action::CollapseAll,
        ClientEvent::ExpandAll => Action::ExpandAll,
        ClientEvent::SetFilter { filter } => Action::SetFilter(filter),
        ClientEvent::SwitchTab { tab } => Action::SwitchTab(tab),
    }
}
