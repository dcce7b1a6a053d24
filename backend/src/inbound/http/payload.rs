//! Request body and query shapes shared by the handlers.
//!
//! Browsers submit the bundled form as `application/x-www-form-urlencoded`
//! while API clients send JSON, so bodies are extracted with
//! [`actix_web::Either`] and numeric fields accept numbers or strings.

use std::fmt;

use actix_web::http::header::CONTENT_LENGTH;
use actix_web::{Either, HttpMessage, HttpRequest, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::Error;

use super::validation::{invalid_query_error, malformed_body_error};

/// Body accepted as JSON or as a urlencoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Extraction outcome handed to handlers, which resolve it with `read_body`.
pub type BodyExtract<T> = Result<JsonOrForm<T>, actix_web::Error>;

/// Unwrap whichever representation the client sent.
fn into_inner<T>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

fn is_parsed_media_type(content_type: &str) -> bool {
    content_type.eq_ignore_ascii_case("application/json")
        || content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded")
        || content_type.to_ascii_lowercase().ends_with("+json")
}

/// Whether the request claims to carry a JSON or form body.
fn declares_body(req: &HttpRequest) -> bool {
    let empty = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|len| len.trim() == "0");
    !empty && is_parsed_media_type(req.content_type())
}

/// Resolve an extracted body.
///
/// A missing body, or one in a media type the API does not parse, reads as
/// an empty body so field validation decides the response. A declared JSON
/// or form body that fails to parse is an `invalid_request`.
pub(crate) fn read_body<T: Default>(req: &HttpRequest, body: BodyExtract<T>) -> Result<T, Error> {
    match body {
        Ok(body) => Ok(into_inner(body)),
        Err(err) if declares_body(req) => Err(malformed_body_error(&err.to_string())),
        Err(_) => Ok(T::default()),
    }
}

/// Query extractor settings rendering parse failures as the JSON error
/// envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::payload::query_config;
///
/// let app = App::new().app_data(query_config());
/// ```
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        actix_web::Error::from(invalid_query_error(req.query_string(), &err.to_string()))
    })
}

/// Numeric input that may arrive as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumericField {
    /// A JSON integer.
    Integer(i64),
    /// A JSON number with a fractional part or exponent.
    Decimal(f64),
    /// A string, as sent by forms and query strings.
    Text(String),
}

impl NumericField {
    /// Whole-number value, if the input denotes one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            // Exact whole numbers within the f64 integer range only.
            Self::Decimal(value)
                if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 =>
            {
                Some(*value as i64)
            }
            Self::Decimal(_) => None,
            Self::Text(raw) => raw.trim().parse().ok(),
        }
    }

    /// Whether the field is an empty string.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(raw) if raw.trim().is_empty())
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Text(raw) => f.write_str(raw),
        }
    }
}

/// Body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserBody {
    /// Name to register; required.
    #[serde(default)]
    #[schema(example = "ada")]
    pub username: Option<String>,
}

/// Body for `POST /api/users/{_id}/exercises`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddExerciseBody {
    /// Free-text description; empty when omitted.
    #[serde(default)]
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Minutes as a positive whole number; required.
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 30)]
    pub duration: Option<NumericField>,
    /// Occurrence date; defaults to now.
    #[serde(default)]
    #[schema(example = "2023-01-15")]
    pub date: Option<String>,
}

/// Query string for `GET /api/users/{_id}/logs`.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryParams {
    /// Inclusive lower date bound.
    #[serde(default)]
    pub from: Option<String>,
    /// Inclusive upper date bound.
    #[serde(default)]
    pub to: Option<String>,
    /// Maximum entries to return.
    #[serde(default)]
    #[param(value_type = Option<u32>)]
    pub limit: Option<NumericField>,
}
