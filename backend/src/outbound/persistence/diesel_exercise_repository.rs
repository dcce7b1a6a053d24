//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! Log reads build a boxed query so the optional date bounds and limit are
//! only applied when supplied.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{
    DurationMinutes, Exercise, ExerciseId, ExerciseLogFilter, LogEntry, NewExercise, UserId,
};

use super::diesel_basic_error_mapping::{
    ErrorConstructors, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{ExerciseRow, LogEntryRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

const CTORS: ErrorConstructors<ExercisePersistenceError> = ErrorConstructors {
    connection: |message| ExercisePersistenceError::Connection { message },
    constraint: |message| ExercisePersistenceError::Constraint { message },
    query: |message| ExercisePersistenceError::Query { message },
};

/// Diesel-backed implementation of the `ExerciseRepository` port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExercisePersistenceError {
    map_basic_pool_error(error, &CTORS)
}

fn map_diesel_error(error: diesel::result::Error) -> ExercisePersistenceError {
    map_basic_diesel_error(error, &CTORS)
}

fn stored_duration(minutes: i32) -> Result<DurationMinutes, ExercisePersistenceError> {
    DurationMinutes::new(i64::from(minutes))
        .map_err(|err| ExercisePersistenceError::query(format!("stored exercise is invalid: {err}")))
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExercisePersistenceError> {
    Ok(Exercise {
        id: ExerciseId::from_uuid(row.id),
        user_id: UserId::from_uuid(row.user_id),
        description: row.description,
        duration: stored_duration(row.duration_minutes)?,
        date: row.performed_at,
    })
}

fn row_to_log_entry(row: LogEntryRow) -> Result<LogEntry, ExercisePersistenceError> {
    Ok(LogEntry {
        description: row.description,
        duration: stored_duration(row.duration_minutes)?,
        date: row.performed_at,
    })
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, exercise: &NewExercise) -> Result<Exercise, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewExerciseRow {
            id: Uuid::new_v4(),
            user_id: *exercise.user_id.as_uuid(),
            description: exercise.description.as_str(),
            duration_minutes: exercise.duration.get(),
            performed_at: exercise.date,
        };

        let row: ExerciseRow = diesel::insert_into(exercises::table)
            .values(&new_row)
            .returning(ExerciseRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_exercise(row)
    }

    async fn find_log_entries(
        &self,
        filter: &ExerciseLogFilter,
    ) -> Result<Vec<LogEntry>, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = exercises::table
            .filter(exercises::user_id.eq(*filter.user_id().as_uuid()))
            .select(LogEntryRow::as_select())
            .order(exercises::seq.asc())
            .into_boxed();

        if let Some(from) = filter.from() {
            query = query.filter(exercises::performed_at.ge(from));
        }
        if let Some(to) = filter.to() {
            query = query.filter(exercises::performed_at.le(to));
        }
        if let Some(limit) = filter.limit() {
            query = query.limit(i64::from(limit.get()));
        }

        let rows: Vec<LogEntryRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_log_entry).collect()
    }
}
