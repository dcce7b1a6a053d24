//! Driving port for reading exercise logs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Error, ExerciseLog, LogLimit};

/// Validated input for [`ExerciseLogQuery::exercise_log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    /// Raw identifier from the request path.
    pub user_id: String,
    /// Inclusive lower bound.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound.
    pub to: Option<DateTime<Utc>>,
    /// Entry cap.
    pub limit: Option<LogLimit>,
}

/// Domain use-case port for fetching a user's exercise log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Resolve the user and return their filtered log.
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when the user does not
    /// exist.
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error>;
}
