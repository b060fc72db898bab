//! Runs reducer effects against the repository and the collapse store.

use std::collections::{BTreeSet, VecDeque};
use std::time::Instant;

use crate::app::{Action, Effect, Region, RequestId, Tab, ViewState, reduce};
use crate::error::Result;
use crate::model::{DiffPayload, LogPayload, RepoStatus};
use crate::server::app_data::DifflyAppData;
use crate::server::errors::DifflyHttpError;
use crate::vcs::VcsBackend;

pub fn load_status(backend: &dyn VcsBackend) -> Result<RepoStatus> {
    backend.status()
}

pub fn load_diff(backend: &dyn VcsBackend) -> Result<DiffPayload> {
    backend.diff_payload()
}

pub fn load_log(backend: &dyn VcsBackend, log_limit: usize) -> Result<LogPayload> {
    Ok(LogPayload::new(backend.log(log_limit)?))
}

/// Start a fresh page session: stored collapse state, then the initial diff load.
pub fn start(app: &DifflyAppData, state: &mut ViewState, now: Instant) -> std::result::Result<(), DifflyHttpError> {
    let collapsed = app.store.load().unwrap_or_else(|e| {
        log::warn!("Could not load collapsed files, starting with none: {e}");
        BTreeSet::new()
    });
    *state = ViewState::new(collapsed);
    dispatch(app, state, Action::SwitchTab(Tab::Diff), now)?;
    Ok(())
}

/// Apply `action` and every follow-up load it triggers. Returns the regions to
/// re-render, each once, in first-touched order.
pub fn dispatch(
    app: &DifflyAppData,
    state: &mut ViewState,
    action: Action,
    now: Instant,
) -> std::result::Result<Vec<Region>, DifflyHttpError> {
    let mut pending = VecDeque::from([action]);
    let mut regions = Vec::new();

    while let Some(action) = pending.pop_front() {
        for effect in reduce(state, action, now) {
            match effect {
                Effect::Refresh(region) => {
                    if !regions.contains(&region) {
                        regions.push(region);
                    }
                }
                Effect::PersistCollapsed(collapsed) => {
                    if let Err(e) = app.store.save(&collapsed) {
                        log::warn!("Could not save collapsed files: {e}");
                    }
                }
                Effect::Fetch { tab, request } => pending.push_back(fetch(app, tab, request)?),
            }
        }
    }

    Ok(regions)
}

fn fetch(
    app: &DifflyAppData,
    tab: Tab,
    request: RequestId,
) -> std::result::Result<Action, DifflyHttpError> {
    let guard = app.backend()?;
    let backend: &dyn VcsBackend = &**guard;
    Ok(match tab {
        Tab::Diff => Action::DiffLoaded {
            request,
            result: load_diff(backend).map_err(|e| e.to_string()),
        },
        Tab::Status => Action::StatusLoaded {
            request,
            result: load_status(backend).map_err(|e| e.to_string()),
        },
        Tab::History => Action::HistoryLoaded {
            request,
            result: load_log(backend, app.log_limit).map_err(|e| e.to_string()),
        },
    })
}
