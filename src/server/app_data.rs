use actix_web::HttpRequest;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::app::ViewState;
use crate::persistence::CollapseStore;
use crate::server::errors::DifflyHttpError;
use crate::server::view_sessions::{SESSION_HEADER, SharedView, ViewSessions};
use crate::vcs::{VcsBackend, VcsInfo};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct DifflyAppData {
    pub backend: Arc<Mutex<Box<dyn VcsBackend>>>,
    pub info: Arc<VcsInfo>,
    pub sessions: Arc<Mutex<ViewSessions>>,
    pub store: Arc<dyn CollapseStore>,
    pub log_limit: usize,
}

impl DifflyAppData {
    pub fn new(backend: Box<dyn VcsBackend>, store: Arc<dyn CollapseStore>, log_limit: usize) -> Self {
        let info = Arc::new(backend.info().clone());
        DifflyAppData {
            backend: Arc::new(Mutex::new(backend)),
            info,
            sessions: Arc::new(Mutex::new(ViewSessions::default())),
            store,
            log_limit,
        }
    }

    pub fn backend(&self) -> Result<MutexGuard<'_, Box<dyn VcsBackend>>, DifflyHttpError> {
        self.backend.lock().map_err(|_| DifflyHttpError::LockPoisoned)
    }

    /// Keep `state` as the view of a newly served page.
    pub fn open_session(&self, state: ViewState) -> Result<(Uuid, SharedView), DifflyHttpError> {
        let mut sessions = self.sessions.lock().map_err(|_| DifflyHttpError::LockPoisoned)?;
        Ok(sessions.open(state))
    }

    /// The view of the page that sent `req`, named by its session header.
    pub fn session_view(&self, req: &HttpRequest) -> Result<SharedView, DifflyHttpError> {
        let id = req
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| DifflyHttpError::BadRequest(format!("Missing {SESSION_HEADER} header")))?;
        let id = Uuid::parse_str(id)
            .map_err(|_| DifflyHttpError::BadRequest(format!("Invalid session id '{id}'")))?;

        let sessions = self.sessions.lock().map_err(|_| DifflyHttpError::LockPoisoned)?;
        sessions.get(&id).ok_or(DifflyHttpError::SessionExpired)
    }
}

pub fn app_data(req: &HttpRequest) -> Result<&DifflyAppData, DifflyHttpError> {
    req.app_data::<DifflyAppData>()
        .ok_or(DifflyHttpError::AppDataDoesNotExist)
}
