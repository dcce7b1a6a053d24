//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed entities used by the HTTP and persistence
//! adapters, plus the service that implements the driving ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — failure payload returned to adapters.
//! - User, UserId, Username — registered users.
//! - Exercise, NewExercise, LogEntry, ExerciseLog — exercise records and logs.
//! - ExerciseLogFilter, LogLimit — log query parameters.
//! - ExerciseTrackerService — implementation of the driving ports.

pub mod calendar_date;
pub mod error;
pub mod exercise;
pub mod log_filter;
pub mod ports;
pub mod trace_id;
pub mod tracker_service;
pub mod user;

pub use self::calendar_date::{DateParseError, parse_calendar_date};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{
    DurationMinutes, Exercise, ExerciseId, ExerciseLog, ExerciseReceipt, ExerciseValidationError,
    LOG_DATE_FORMAT, LogEntry, NewExercise, render_log_date,
};
pub use self::log_filter::{ExerciseLogFilter, LogLimit, LogLimitValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::tracker_service::ExerciseTrackerService;
pub use self::user::{User, UserId, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_request("nope"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
