//! Exercise API handlers.
//!
//! ```text
//! POST /api/users/{_id}/exercises {"description":"run","duration":30,"date":"2023-01-15"}
//! GET /api/users/{_id}/logs?from=2023-01-01&to=2023-12-31&limit=5
//! ```
//!
//! Both routes answer an unknown user with HTTP 200 and
//! `{ "error": "User not found" }`.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::ports::{AddExerciseRequest, ExerciseLogRequest};
use crate::domain::{
    Error, ErrorCode, ExerciseLog, ExerciseReceipt, LogEntry, render_log_date,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::legacy_not_found_response;
use crate::inbound::http::payload::{AddExerciseBody, BodyExtract, LogQueryParams, read_body};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DATE, FROM, TO, parse_description, parse_duration, parse_optional_date, parse_optional_limit,
};

/// Response for `POST /api/users/{_id}/exercises`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    /// Owner identifier.
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Owner name.
    #[schema(example = "ada")]
    pub username: String,
    /// Occurrence date, e.g. `Sun Jan 15 2023`.
    #[schema(example = "Sun Jan 15 2023")]
    pub date: String,
    /// Minutes.
    #[schema(example = 30)]
    pub duration: i32,
    /// Free-text description.
    #[schema(example = "run")]
    pub description: String,
}

impl From<ExerciseReceipt> for ExerciseResponse {
    fn from(receipt: ExerciseReceipt) -> Self {
        let ExerciseReceipt { user, exercise } = receipt;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            date: render_log_date(&exercise.date),
            duration: exercise.duration.get(),
            description: exercise.description,
        }
    }
}

/// One entry of an exercise log.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogEntryResponse {
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: i32,
    #[schema(example = "Sun Jan 15 2023")]
    pub date: String,
}

impl From<LogEntry> for LogEntryResponse {
    fn from(entry: LogEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration.get(),
            date: render_log_date(&entry.date),
        }
    }
}

/// Response for `GET /api/users/{_id}/logs`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseLogResponse {
    /// Owner identifier.
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// Owner name.
    #[schema(example = "ada")]
    pub username: String,
    /// Number of entries in `log`, after the limit.
    pub count: usize,
    /// Matching exercises in insertion order.
    pub log: Vec<LogEntryResponse>,
}

impl From<ExerciseLog> for ExerciseLogResponse {
    fn from(log: ExerciseLog) -> Self {
        let count = log.count();
        let ExerciseLog { user, entries } = log;
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            count,
            log: entries.into_iter().map(LogEntryResponse::from).collect(),
        }
    }
}

/// Body returned with HTTP 200 when the user does not exist.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserNotFoundBody {
    #[schema(example = "User not found")]
    pub error: String,
}

fn rejected(user_id: &str, err: Error) -> Error {
    warn!(%user_id, error = %err, "request rejected");
    err
}

fn build_add_request(user_id: String, body: AddExerciseBody) -> Result<AddExerciseRequest, Error> {
    let AddExerciseBody {
        description,
        duration,
        date,
    } = body;
    Ok(AddExerciseRequest {
        description: parse_description(description),
        duration: parse_duration(duration)?,
        date: parse_optional_date(date, DATE)?,
        user_id,
    })
}

fn build_log_request(user_id: String, params: LogQueryParams) -> Result<ExerciseLogRequest, Error> {
    let LogQueryParams { from, to, limit } = params;
    Ok(ExerciseLogRequest {
        from: parse_optional_date(from, FROM)?,
        to: parse_optional_date(to, TO)?,
        limit: parse_optional_limit(limit)?,
        user_id,
    })
}

/// Record an exercise for a user.
///
/// `duration` is required; `description` defaults to empty text and `date`
/// to now.
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    params(("_id" = String, Path, description = "User identifier")),
    request_body(content = AddExerciseBody, content_type = "application/json"),
    responses(
        (status = 200, description = "Exercise recorded, or the user was not found", body = ExerciseResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/api/users/{_id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: BodyExtract<AddExerciseBody>,
) -> ApiResult<HttpResponse> {
    let user_id = path.into_inner();
    let request = read_body(&req, body)
        .and_then(|body| build_add_request(user_id.clone(), body))
        .map_err(|err| rejected(&user_id, err))?;

    match state.exercises.add_exercise(request).await {
        Ok(receipt) => {
            info!(
                %user_id,
                exercise_id = %receipt.exercise.id,
                duration = receipt.exercise.duration.get(),
                "exercise added"
            );
            Ok(HttpResponse::Ok().json(ExerciseResponse::from(receipt)))
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            info!(%user_id, "exercise for unknown user");
            Ok(legacy_not_found_response(&err))
        }
        Err(err) => Err(err),
    }
}

/// Fetch a user's exercise log.
///
/// `from` and `to` are inclusive date bounds; `limit` caps the entries and
/// therefore `count`.
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    params(("_id" = String, Path, description = "User identifier"), LogQueryParams),
    responses(
        (status = 200, description = "Exercise log, or the user was not found", body = ExerciseLogResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "getExerciseLog"
)]
#[get("/api/users/{_id}/logs")]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQueryParams>,
) -> ApiResult<HttpResponse> {
    let user_id = path.into_inner();
    let request =
        build_log_request(user_id.clone(), query.into_inner()).map_err(|err| rejected(&user_id, err))?;

    match state.exercise_log.exercise_log(request).await {
        Ok(log) => {
            info!(%user_id, count = log.count(), "exercise log fetched");
            Ok(HttpResponse::Ok().json(ExerciseLogResponse::from(log)))
        }
        Err(err) if err.code() == ErrorCode::NotFound => {
            info!(%user_id, "log for unknown user");
            Ok(legacy_not_found_response(&err))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
