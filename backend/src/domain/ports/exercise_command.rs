//! Driving port for recording exercises.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{DurationMinutes, Error, ExerciseReceipt};

/// Validated input for [`ExerciseCommand::add_exercise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseRequest {
    /// Raw identifier from the request path.
    pub user_id: String,
    /// Free-text description.
    pub description: String,
    /// Duration in minutes.
    pub duration: DurationMinutes,
    /// Occurrence date; `None` means "now".
    pub date: Option<DateTime<Utc>>,
}

/// Domain use-case port for adding exercises to a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Resolve the user and persist the exercise.
    ///
    /// Returns [`crate::domain::ErrorCode::NotFound`] when the user does not
    /// exist.
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<ExerciseReceipt, Error>;
}
