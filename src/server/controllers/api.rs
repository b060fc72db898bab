use actix_web::{HttpRequest, HttpResponse};

use crate::server::app_data::app_data;
use crate::server::errors::DifflyHttpError;
use crate::server::session::{load_diff, load_log, load_status};

pub async fn status(req: HttpRequest) -> actix_web::Result<HttpResponse, DifflyHttpError> {
    let app_data = app_data(&req)?;
    let status = load_status(&**app_data.backend()?)?;
    Ok(HttpResponse::Ok().json(status))
}

pub async fn diff(req: HttpRequest) -> actix_web::Result<HttpResponse, DifflyHttpError> {
    let app_data = app_data(&req)?;
    let payload = load_diff(&**app_data.backend()?)?;
    Ok(HttpResponse::Ok().json(payload))
}

pub async fn log(req: HttpRequest) -> actix_web::Result<HttpResponse, DifflyHttpError> {
    let app_data = app_data(&req)?;
    let log = load_log(&**app_data.backend()?, app_data.log_limit)?;
    Ok(HttpResponse::Ok().json(log))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};

    use crate::model::{CommitEntry, DiffPayload, ErrorPayload, LogPayload, RepoStatus};
    use crate::server::controllers;
    use crate::server::test_helper::{app_data_with, fake_backend};
    use crate::vcs::traits::testing::FakeBackend;

    #[actix_web::test]
    async fn test_controllers_api_status() {
        let mut backend = fake_backend();
        backend.status.modified = vec!["src/lib.rs".to_string()];
        let app = test::init_service(
            App::new()
                .app_data(app_data_with(backend))
                .route("/api/status", web::get().to(controllers::api::status)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let status: RepoStatus = test::call_and_read_body_json(&app, req).await;

        assert_eq!(status.modified, vec!["src/lib.rs"]);
    }

    #[actix_web::test]
    async fn test_controllers_api_diff_joins_parts() {
        let mut backend = fake_backend();
        backend.unstaged = "diff --git a a\n".to_string();
        backend.staged = "diff --git b b\n".to_string();
        let app = test::init_service(
            App::new()
                .app_data(app_data_with(backend))
                .route("/api/diff", web::get().to(controllers::api::diff)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/diff").to_request();
        let payload: DiffPayload = test::call_and_read_body_json(&app, req).await;

        assert_eq!(payload.staged, "diff --git b b\n");
        assert_eq!(payload.diff, "diff --git a a\n\ndiff --git b b\n");
        assert!(payload.untracked.is_empty());
    }

    #[actix_web::test]
    async fn test_controllers_api_log_respects_limit() {
        let mut backend = fake_backend();
        backend.commits = (0..3)
            .map(|i| CommitEntry {
                hash: format!("{i}"),
                date: String::new(),
                message: format!("m{i}"),
                author_name: String::new(),
                author_email: String::new(),
            })
            .collect();
        let app = test::init_service(
            App::new()
                .app_data(app_data_with(backend))
                .route("/api/log", web::get().to(controllers::api::log)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/log").to_request();
        let log: LogPayload = test::call_and_read_body_json(&app, req).await;

        // test_helper caps history at two commits
        assert_eq!(log.total, 2);
        assert_eq!(log.latest.unwrap().message, "m0");
    }

    #[actix_web::test]
    async fn test_controllers_api_reports_backend_errors_as_json() {
        let backend = FakeBackend {
            fail_with: Some("not a git repository".to_string()),
            ..fake_backend()
        };
        let app = test::init_service(
            App::new()
                .app_data(app_data_with(backend))
                .route("/api/diff", web::get().to(controllers::api::diff)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/diff").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let payload: ErrorPayload = test::read_body_json(resp).await;
        assert_eq!(payload.error, "VCS command failed: not a git repository");
    }
}
