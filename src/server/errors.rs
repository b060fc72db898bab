use actix_web::{HttpResponse, error, http::StatusCode};
use thiserror::Error;

use crate::error::DifflyError;
use crate::model::ErrorPayload;

#[derive(Debug, Error)]
pub enum DifflyHttpError {
    #[error("App data does not exist")]
    AppDataDoesNotExist,

    #[error("Shared state lock poisoned")]
    LockPoisoned,

    #[error("{0}")]
    BadRequest(String),

    #[error("Session expired, reload the page")]
    SessionExpired,

    #[error(transparent)]
    Internal(#[from] DifflyError),
}

impl error::ResponseError for DifflyHttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            DifflyHttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DifflyHttpError::SessionExpired => StatusCode::GONE,
            DifflyHttpError::AppDataDoesNotExist
            | DifflyHttpError::LockPoisoned
            | DifflyHttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            DifflyHttpError::AppDataDoesNotExist => log::error!("AppData does not exist"),
            DifflyHttpError::LockPoisoned => log::error!("Shared state lock poisoned"),
            DifflyHttpError::BadRequest(msg) => log::warn!("Bad request: {msg}"),
            DifflyHttpError::SessionExpired => log::warn!("Action for an unknown view session"),
            DifflyHttpError::Internal(e) => log::error!("Request failed: {e}"),
        }
        HttpResponse::build(self.status_code()).json(ErrorPayload {
            error: self.to_string(),
        })
    }
}
