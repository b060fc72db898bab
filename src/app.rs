use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::model::{DiffPayload, FileChange, LogPayload, RepoStatus};
use crate::view::{StageFilter, reconcile};
use crate::vcs::parse_unified_diff;

/// How long a click selection suppresses scroll tracking, covering a smooth scroll.
pub const NAVIGATION_GUARD: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Diff,
    Status,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Diff, Tab::Status, Tab::History];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Diff => "diff",
            Tab::Status => "status",
            Tab::History => "history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Diff => "Changes",
            Tab::Status => "Status",
            Tab::History => "History",
        }
    }
}

/// Load state of one panel's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    #[default]
    NotLoaded,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

/// Identifies one fetch so late responses to superseded fetches can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

/// The two parses the stage filter chooses between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSources {
    pub staged: Vec<FileChange>,
    /// Working-tree changes, untracked pseudo-diffs included
    pub unstaged: Vec<FileChange>,
}

impl DiffSources {
    pub fn from_payload(payload: &DiffPayload) -> Self {
        Self {
            staged: parse_unified_diff(&payload.staged),
            unstaged: parse_unified_diff(&payload.unstaged_with_untracked()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectOrigin {
    /// File tree click: scrolls to the file and pauses scroll tracking
    Click,
    /// Derived from the scroll position
    Scroll,
}

/// One intersection observation of a rendered file block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedEntry {
    pub index: usize,
    pub ratio: f64,
    pub intersecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectFile { index: usize, origin: SelectOrigin },
    Observe(Vec<ObservedEntry>),
    ToggleCollapse { index: usize },
    CollapseAll,
    ExpandAll,
    SetFilter(StageFilter),
    SwitchTab(Tab),
    DiffLoaded {
        request: RequestId,
        result: Result<DiffPayload, String>,
    },
    StatusLoaded {
        request: RequestId,
        result: Result<RepoStatus, String>,
    },
    HistoryLoaded {
        request: RequestId,
        result: Result<LogPayload, String>,
    },
}

/// Part of the page that needs re-rendering after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Tabs,
    /// File tree and file count
    FileList,
    /// Every file block, rebuilt from scratch
    DiffBody,
    /// Collapse class of one file block
    FileCollapse(usize),
    /// Collapse class of every file block
    AllCollapse,
    /// Highlighted tree entry
    ActiveFile,
    ScrollToFile(usize),
    StatusPanel,
    HistoryPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { tab: Tab, request: RequestId },
    PersistCollapsed(BTreeSet<String>),
    Refresh(Region),
}

/// Everything the page shows, driven only through [`reduce`].
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub tab: Tab,
    pub filter: StageFilter,
    pub diff: Loadable<DiffSources>,
    pub status: Loadable<RepoStatus>,
    pub history: Loadable<LogPayload>,
    /// Reconciled, filtered list the tree and diff body are built from
    pub files: Vec<FileChange>,
    /// `None` iff `files` is empty
    pub active_file: Option<usize>,
    /// Collapsed file paths; may hold paths no longer in `files`
    pub collapsed: BTreeSet<String>,
    guard_until: Option<Instant>,
    next_request: u64,
    latest_request: HashMap<Tab, RequestId>,
}

impl ViewState {
    pub fn new(collapsed: BTreeSet<String>) -> Self {
        Self {
            collapsed,
            ..Self::default()
        }
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.files
            .get(index)
            .is_some_and(|file| self.collapsed.contains(&file.path))
    }

    /// True while a click selection is still settling.
    pub fn navigation_guarded(&self, now: Instant) -> bool {
        self.guard_until.is_some_and(|until| now < until)
    }

    /// Mark `tab` as loading and hand out the id its response must carry.
    pub fn begin_load(&mut self, tab: Tab) -> RequestId {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.latest_request.insert(tab, request);
        match tab {
            Tab::Diff => self.diff = Loadable::Loading,
            Tab::Status => self.status = Loadable::Loading,
            Tab::History => self.history = Loadable::Loading,
        }
        request
    }

    fn is_current(&self, tab: Tab, request: RequestId) -> bool {
        self.latest_request.get(&tab) == Some(&request)
    }

    fn refilter(&mut self) {
        self.files = match self.diff.ready() {
            Some(sources) => reconcile(&sources.staged, &sources.unstaged, self.filter),
            None => Vec::new(),
        };
    }

    fn clamp_active(&mut self) {
        self.active_file = match (self.active_file, self.files.len()) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => Some(0),
        };
    }
}

/// Apply one action and report what has to happen next.
///
/// Pure with respect to the outside world: fetching, persisting and rendering are
/// carried out by the caller from the returned effects.
pub fn reduce(state: &mut ViewState, action: Action, now: Instant) -> Vec<Effect> {
    match action {
        Action::SwitchTab(tab) => switch_tab(state, tab),
        Action::SelectFile { index, origin } => select_file(state, index, origin, now),
        Action::Observe(entries) => observe(state, &entries, now),
        Action::ToggleCollapse { index } => toggle_collapse(state, index),
        Action::CollapseAll => {
            state.collapsed = state.files.iter().map(|f| f.path.clone()).collect();
            vec![
                Effect::Refresh(Region::AllCollapse),
                Effect::PersistCollapsed(state.collapsed.clone()),
            ]
        }
        Action::ExpandAll => {
            state.collapsed.clear();
            vec![
                Effect::Refresh(Region::AllCollapse),
                Effect::PersistCollapsed(state.collapsed.clone()),
            ]
        }
        Action::SetFilter(filter) => {
            state.filter = filter;
            state.refilter();
            state.clamp_active();
            vec![
                Effect::Refresh(Region::FileList),
                Effect::Refresh(Region::DiffBody),
            ]
        }
        Action::DiffLoaded { request, result } => {
            if !state.is_current(Tab::Diff, request) {
                log::debug!("Dropping stale diff response {request:?}");
                return Vec::new();
            }
            state.diff = match result {
                Ok(payload) => Loadable::Ready(DiffSources::from_payload(&payload)),
                Err(message) => Loadable::Failed(message),
            };
            state.refilter();
            state.active_file = if state.files.is_empty() { None } else { Some(0) };
            vec![
                Effect::Refresh(Region::FileList),
                Effect::Refresh(Region::DiffBody),
            ]
        }
        Action::StatusLoaded { request, result } => {
            if !state.is_current(Tab::Status, request) {
                log::debug!("Dropping stale status response {request:?}");
                return Vec::new();
            }
            state.status = result.map_or_else(Loadable::Failed, Loadable::Ready);
            vec![Effect::Refresh(Region::StatusPanel)]
        }
        Action::HistoryLoaded { request, result } => {
            if !state.is_current(Tab::History, request) {
                log::debug!("Dropping stale history response {request:?}");
                return Vec::new();
            }
            state.history = result.map_or_else(Loadable::Failed, Loadable::Ready);
            vec![Effect::Refresh(Region::HistoryPanel)]
        }
    }
}

fn switch_tab(state: &mut ViewState, tab: Tab) -> Vec<Effect> {
    state.tab = tab;
    let mut effects = vec![Effect::Refresh(Region::Tabs)];

    let fetch = match tab {
        Tab::Diff => state.files.is_empty() && !state.diff.is_loading(),
        Tab::Status | Tab::History => true,
    };
    if fetch {
        let request = state.begin_load(tab);
        effects.push(Effect::Fetch { tab, request });
        match tab {
            Tab::Diff => {
                effects.push(Effect::Refresh(Region::FileList));
                effects.push(Effect::Refresh(Region::DiffBody));
            }
            Tab::Status => effects.push(Effect::Refresh(Region::StatusPanel)),
            Tab::History => effects.push(Effect::Refresh(Region::HistoryPanel)),
        }
    }
    effects
}

fn select_file(
    state: &mut ViewState,
    index: usize,
    origin: SelectOrigin,
    now: Instant,
) -> Vec<Effect> {
    if index >= state.files.len() {
        return Vec::new();
    }
    state.active_file = Some(index);

    match origin {
        SelectOrigin::Click => {
            state.guard_until = Some(now + NAVIGATION_GUARD);
            vec![
                Effect::Refresh(Region::ActiveFile),
                Effect::Refresh(Region::ScrollToFile(index)),
            ]
        }
        SelectOrigin::Scroll => vec![Effect::Refresh(Region::ActiveFile)],
    }
}

fn observe(state: &mut ViewState, entries: &[ObservedEntry], now: Instant) -> Vec<Effect> {
    if state.navigation_guarded(now) {
        return Vec::new();
    }
    state.guard_until = None;

    let mut best: Option<&ObservedEntry> = None;
    let mut max_ratio = 0.0;
    for entry in entries {
        if entry.intersecting && entry.ratio > max_ratio && entry.index < state.files.len() {
            max_ratio = entry.ratio;
            best = Some(entry);
        }
    }

    match best {
        Some(entry) if state.active_file != Some(entry.index) => {
            select_file(state, entry.index, SelectOrigin::Scroll, now)
        }
        _ => Vec::new(),
    }
}

fn toggle_collapse(state: &mut ViewState, index: usize) -> Vec<Effect> {
    let Some(file) = state.files.get(index) else {
        return Vec::new();
    };
    if !state.collapsed.remove(&file.path) {
        state.collapsed.insert(file.path.clone());
    }
    vec![
        Effect::Refresh(Region::FileCollapse(index)),
        Effect::PersistCollapsed(state.collapsed.clone()),
    ]
}
