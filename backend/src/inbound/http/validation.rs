//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper turns a raw field into a domain value or an
//! `invalid_request` error whose details name the field, the offending value
//! and a machine-readable code.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::{DurationMinutes, Error, LogLimit, parse_calendar_date};

use super::payload::NumericField;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidInteger,
    InvalidDate,
    MalformedBody,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const DURATION: FieldName = FieldName::new("duration");
pub(crate) const DATE: FieldName = FieldName::new("date");
pub(crate) const FROM: FieldName = FieldName::new("from");
pub(crate) const TO: FieldName = FieldName::new("to");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");
const BODY: FieldName = FieldName::new("body");
const QUERY: FieldName = FieldName::new("query");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a positive whole number"))
        .with_value(ErrorCode::InvalidInteger, value)
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a recognisable date"))
        .with_value(ErrorCode::InvalidDate, value)
}

/// The request body was declared as JSON or a form but could not be read.
pub(crate) fn malformed_body_error(reason: &str) -> Error {
    ValidationError::new(BODY.as_str(), format!("request body could not be parsed: {reason}"))
        .with_code(ErrorCode::MalformedBody)
}

/// The query string did not match the expected parameters.
pub(crate) fn invalid_query_error(query: &str, reason: &str) -> Error {
    ValidationError::new(QUERY.as_str(), format!("query string could not be parsed: {reason}"))
        .with_value(ErrorCode::InvalidQuery, query)
}

/// Treat blank strings the way form submissions mean them: as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn parse_integer(value: NumericField, field: FieldName) -> Result<i64, Error> {
    value
        .as_integer()
        .ok_or_else(|| invalid_integer_error(field, &value.to_string()))
}

/// Description as submitted; an omitted one is stored empty.
pub(crate) fn parse_description(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Require a positive whole number of minutes.
pub(crate) fn parse_duration(value: Option<NumericField>) -> Result<DurationMinutes, Error> {
    let value = value
        .filter(|field| !field.is_blank())
        .ok_or_else(|| missing_field_error(DURATION))?;
    let minutes = parse_integer(value.clone(), DURATION)?;
    DurationMinutes::new(minutes).map_err(|_| invalid_integer_error(DURATION, &value.to_string()))
}

/// Optional positive entry cap; blank means "no limit".
pub(crate) fn parse_optional_limit(value: Option<NumericField>) -> Result<Option<LogLimit>, Error> {
    let Some(value) = value.filter(|field| !field.is_blank()) else {
        return Ok(None);
    };
    let limit = parse_integer(value.clone(), LIMIT)?;
    LogLimit::new(limit)
        .map(Some)
        .map_err(|_| invalid_integer_error(LIMIT, &value.to_string()))
}

/// Optional calendar date; blank means absent.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<DateTime<Utc>>, Error> {
    non_blank(value)
        .map(|raw| parse_calendar_date(&raw).map_err(|err| invalid_date_error(field, err.input())))
        .transpose()
}
