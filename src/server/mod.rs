//! HTTP surface: page, JSON API, view actions and static assets.

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;

pub mod app_data;
pub mod controllers;
pub mod errors;
pub mod session;
#[cfg(test)]
mod test_helper;
pub mod view_sessions;

pub use app_data::DifflyAppData;

use crate::server::errors::DifflyHttpError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(controllers::page::index))
        .route("/api/status", web::get().to(controllers::api::status))
        .route("/api/diff", web::get().to(controllers::api::diff))
        .route("/api/log", web::get().to(controllers::api::log))
        .route("/api/actions", web::post().to(controllers::actions::dispatch))
        .route("/assets/app.js", web::get().to(controllers::assets::script))
        .route(
            "/assets/style.css",
            web::get().to(controllers::assets::stylesheet),
        );
}

/// Malformed action bodies answer 400 with the usual error payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| DifflyHttpError::BadRequest(err.to_string()).into())
}

pub async fn run(app_data: DifflyAppData, listener: TcpListener) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .app_data(json_config())
            .configure(configure)
            .wrap(Logger::default())
    })
    .workers(1)
    .listen(listener)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use super::*;
    use crate::model::RepoStatus;
    use crate::server::test_helper::{app_data_with, fake_backend};

    #[actix_web::test]
    async fn test_configure_registers_every_route() {
        let app = test::init_service(
            App::new()
                .app_data(app_data_with(fake_backend()))
                .app_data(json_config())
                .configure(configure),
        )
        .await;

        for uri in ["/", "/api/status", "/api/diff", "/api/log", "/assets/app.js", "/assets/style.css"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        }

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let status: RepoStatus = test::call_and_read_body_json(&app, req).await;
        assert_eq!(status, RepoStatus::default());

        let req = test::TestRequest::get().uri("/api/actions").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
