//! One view state per open page, keyed by the id the page sends back with each action.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::app::ViewState;

/// Header carrying the page's session id on `POST /api/actions`.
pub const SESSION_HEADER: &str = "x-diffly-session";

/// Oldest sessions are dropped past this many open pages.
pub const MAX_SESSIONS: usize = 32;

pub type SharedView = Arc<Mutex<ViewState>>;

#[derive(Debug, Default)]
pub struct ViewSessions {
    order: VecDeque<Uuid>,
    views: HashMap<Uuid, SharedView>,
}

impl ViewSessions {
    /// Register `state` under a fresh id.
    pub fn open(&mut self, state: ViewState) -> (Uuid, SharedView) {
        let id = Uuid::new_v4();
        let view = Arc::new(Mutex::new(state));
        self.views.insert(id, view.clone());
        self.order.push_back(id);

        while self.order.len() > MAX_SESSIONS {
            if let Some(expired) = self.order.pop_front() {
                log::debug!("Dropping view session {expired}");
                self.views.remove(&expired);
            }
        }
        (id, view)
    }

    pub fn get(&self, id: &Uuid) -> Option<SharedView> {
        self.views.get(id).cloned()
    }
}
