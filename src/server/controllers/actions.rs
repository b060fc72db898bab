use actix_web::{HttpRequest, HttpResponse, web};
use std::time::Instant;

use crate::input::{ClientEvent, map_event_to_action};
use crate::server::app_data::app_data;
use crate::server::errors::DifflyHttpError;
use crate::server::session;
use crate::ui::render_patches;

/// Apply one browser event to the sending page's view and answer with the DOM patches
/// it produced.
pub async fn dispatch(
    req: HttpRequest,
    body: web::Json<ClientEvent>,
) -> actix_web::Result<HttpResponse, DifflyHttpError> {
    let app_data = app_data(&req)?;
    let shared = app_data.session_view(&req)?;
    let action = map_event_to_action(body.into_inner());
    log::debug!("Dispatching {action:?}");

    let mut view = shared.lock().map_err(|_| DifflyHttpError::LockPoisoned)?;
    let regions = session::dispatch(app_data, &mut view, action, Instant::now())?;
    Ok(HttpResponse::Ok().json(render_patches(&view, &regions)))
}
