//! Domain errors rendered as HTTP responses.
//!
//! Statuses follow the error code; the JSON body is the domain envelope with
//! internal messages and details replaced before they leave the process. The
//! user-scoped exercise routes keep their historical not-found shape through
//! [`legacy_not_found_response`].

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

pub use crate::domain::ApiResult;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const REDACTED_MESSAGE: &str = "Internal server error";

/// Body sent to the client: internal failures keep only their code and
/// trace id.
fn client_view(err: &Error) -> Error {
    if err.code() != ErrorCode::InternalError {
        return err.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match err.trace_id() {
        Some(trace_id) => redacted.with_trace_id(trace_id.to_owned()),
        None => redacted,
    }
}

/// Unknown-user answer for `/api/users/{_id}/...`: HTTP 200 with only
/// `{ "error": <message> }`.
pub(crate) fn legacy_not_found_response(err: &Error) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "error": err.message() }))
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = self.trace_id().unwrap_or_default();
        if status.is_server_error() {
            error!(%status, trace_id, message = self.message(), "request failed");
        } else {
            debug!(%status, trace_id, message = self.message(), "request rejected");
        }

        let mut response = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_view(self))
    }
}
