//! Query parameters for exercise log retrieval.

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};

use super::{Exercise, UserId};

/// Validation errors for [`LogLimit`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogLimitValidationError {
    /// The limit was zero, negative or out of range.
    #[error("limit must be a positive whole number")]
    NotPositive,
}

/// Maximum number of log entries to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimit(NonZeroU32);

impl LogLimit {
    /// Validate a requested limit.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::LogLimit;
    ///
    /// assert_eq!(LogLimit::new(5).map(LogLimit::get), Ok(5));
    /// assert!(LogLimit::new(0).is_err());
    /// assert!(LogLimit::new(-1).is_err());
    /// ```
    pub fn new(limit: i64) -> Result<Self, LogLimitValidationError> {
        u32::try_from(limit)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(LogLimitValidationError::NotPositive)
    }

    /// Limit as a plain integer.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Limit as a `usize` for slicing in-process collections.
    pub fn as_usize(self) -> usize {
        usize::try_from(self.get()).unwrap_or(usize::MAX)
    }
}

/// Filter applied when reading a user's exercises.
///
/// Bounds are inclusive; absent bounds are omitted rather than defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogFilter {
    user_id: UserId,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    limit: Option<LogLimit>,
}

impl ExerciseLogFilter {
    /// Filter matching every exercise owned by `user_id`.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }

    /// Keep exercises on or after `from`.
    #[must_use]
    pub fn with_from(mut self, from: Option<DateTime<Utc>>) -> Self {
        self.from = from;
        self
    }

    /// Keep exercises on or before `to`.
    #[must_use]
    pub fn with_to(mut self, to: Option<DateTime<Utc>>) -> Self {
        self.to = to;
        self
    }

    /// Cap the number of returned entries.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<LogLimit>) -> Self {
        self.limit = limit;
        self
    }

    /// Owner whose exercises are read.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Inclusive lower bound.
    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    /// Inclusive upper bound.
    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    /// Entry cap.
    pub fn limit(&self) -> Option<LogLimit> {
        self.limit
    }

    /// Whether `exercise` satisfies the owner and date bounds.
    ///
    /// The limit is applied by the caller after matching.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && self.from.is_none_or(|from| exercise.date >= from)
            && self.to.is_none_or(|to| exercise.date <= to)
    }
}
