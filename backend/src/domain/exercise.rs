//! Exercise entries and the log projections built from them.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{User, UserId};

/// Format used whenever an exercise date is shown to clients, e.g.
/// `Sun Jan 15 2023`.
pub const LOG_DATE_FORMAT: &str = "%a %b %d %Y";

/// Render an occurrence date in [`LOG_DATE_FORMAT`] (UTC calendar day).
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use exercise_tracker::domain::render_log_date;
///
/// let date = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
/// assert_eq!(render_log_date(&date), "Sun Jan 15 2023");
/// ```
pub fn render_log_date(date: &DateTime<Utc>) -> String {
    date.format(LOG_DATE_FORMAT).to_string()
}

/// Validation errors raised by exercise value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    /// Duration was zero, negative or out of range.
    #[error("duration must be a positive whole number of minutes")]
    InvalidDuration,
}

/// Store-assigned exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Wrap an identifier produced by a store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Exercise duration in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationMinutes(i32);

impl DurationMinutes {
    /// Validate a duration.
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::DurationMinutes;
    ///
    /// assert_eq!(DurationMinutes::new(30).map(|d| d.get()), Ok(30));
    /// assert!(DurationMinutes::new(0).is_err());
    /// ```
    pub fn new(minutes: i64) -> Result<Self, ExerciseValidationError> {
        i32::try_from(minutes)
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or(ExerciseValidationError::InvalidDuration)
    }

    /// Number of minutes.
    pub fn get(self) -> i32 {
        self.0
    }
}

/// Exercise data supplied by a client, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    /// Owner resolved by the caller.
    pub user_id: UserId,
    /// Free-text description.
    pub description: String,
    /// Duration in minutes.
    pub duration: DurationMinutes,
    /// When the exercise happened.
    pub date: DateTime<Utc>,
}

/// Persisted exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// Store-assigned identifier.
    pub id: ExerciseId,
    /// Owning user.
    pub user_id: UserId,
    /// Free-text description.
    pub description: String,
    /// Duration in minutes.
    pub duration: DurationMinutes,
    /// When the exercise happened.
    pub date: DateTime<Utc>,
}

impl Exercise {
    /// Attach a store-assigned identifier to a new exercise.
    pub fn from_new(id: ExerciseId, exercise: NewExercise) -> Self {
        let NewExercise {
            user_id,
            description,
            duration,
            date,
        } = exercise;
        Self {
            id,
            user_id,
            description,
            duration,
            date,
        }
    }

    /// Project onto the fields shown in a log.
    pub fn to_log_entry(&self) -> LogEntry {
        LogEntry {
            description: self.description.clone(),
            duration: self.duration,
            date: self.date,
        }
    }
}

/// One exercise reduced to description, duration and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Free-text description.
    pub description: String,
    /// Duration in minutes.
    pub duration: DurationMinutes,
    /// When the exercise happened.
    pub date: DateTime<Utc>,
}

/// Result of adding an exercise: the owner plus the stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseReceipt {
    /// Owner of the exercise.
    pub user: User,
    /// Stored exercise.
    pub exercise: Exercise,
}

/// A user's exercise log after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    /// Owner of the log.
    pub user: User,
    /// Entries in store order.
    pub entries: Vec<LogEntry>,
}

impl ExerciseLog {
    /// Number of entries returned, after any limit was applied.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
