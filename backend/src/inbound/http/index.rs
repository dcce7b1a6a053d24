//! Landing page served at `/`.

use actix_web::{HttpResponse, get, http::header::ContentType};

const INDEX_HTML: &str = include_str!("../../../views/index.html");

/// Serve the bundled HTML form for creating users and logging exercises.
#[utoipa::path(
    get,
    path = "/",
    tags = ["pages"],
    responses((status = 200, description = "Landing page", content_type = "text/html"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
