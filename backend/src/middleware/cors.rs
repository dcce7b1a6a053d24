//! Cross-origin access for browser clients.
//!
//! The API is public and carries no credentials, so every origin may call
//! it. Responses use the wildcard origin and expose the `trace-id` header
//! to scripts.

use actix_cors::Cors;

use crate::domain::TRACE_ID_HEADER;

/// Permissive CORS policy applied to every route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::middleware::cors;
///
/// let app = App::new().wrap(cors());
/// ```
#[must_use]
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .expose_headers([TRACE_ID_HEADER])
}
