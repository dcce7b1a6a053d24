//! Port abstraction for exercise persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Exercise, ExerciseLogFilter, LogEntry, NewExercise};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection => "exercise repository connection failed",
        /// The store rejected the record.
        Constraint => "exercise record rejected",
        /// Query or mutation failed during execution.
        Query => "exercise repository query failed",
    }
}

/// Driven port over the exercises collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert one exercise; the store assigns the identifier.
    async fn insert(&self, exercise: &NewExercise) -> Result<Exercise, ExercisePersistenceError>;

    /// Exercises matching `filter`, projected to log entries.
    ///
    /// Entries come back in insertion order and are capped at the filter's
    /// limit when one is set.
    async fn find_log_entries(
        &self,
        filter: &ExerciseLogFilter,
    ) -> Result<Vec<LogEntry>, ExercisePersistenceError>;
}
