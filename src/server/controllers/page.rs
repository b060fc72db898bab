use actix_web::{HttpRequest, HttpResponse};
use std::time::Instant;

use crate::app::ViewState;
use crate::server::app_data::app_data;
use crate::server::errors::DifflyHttpError;
use crate::server::session;
use crate::ui::render_page;

/// Serve the page, starting a new view session for it.
pub async fn index(req: HttpRequest) -> actix_web::Result<HttpResponse, DifflyHttpError> {
    let app_data = app_data(&req)?;
    let mut state = ViewState::default();
    session::start(app_data, &mut state, Instant::now())?;

    let (session_id, shared) = app_data.open_session(state)?;
    let view = shared.lock().map_err(|_| DifflyHttpError::LockPoisoned)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&view, &app_data.info, &session_id.to_string())))
}
