use actix_web::HttpResponse;

const APP_JS: &str = include_str!("../../../assets/app.js");
const STYLE_CSS: &str = include_str!("../../../assets/style.css");

pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(APP_JS)
}

pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(STYLE_CSS)
}
