//! Exercise tracker domain service.
//!
//! Implements the user and exercise driving ports on top of the two driven
//! repositories. User identifiers arrive as raw path strings; anything that
//! does not resolve to a stored user is reported as
//! [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound) with the
//! message [`USER_NOT_FOUND`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    AddExerciseRequest, ExerciseCommand, ExerciseLogQuery, ExerciseLogRequest,
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
    UsersCommand, UsersQuery,
};
use crate::domain::{
    Error, ExerciseLog, ExerciseLogFilter, ExerciseReceipt, NewExercise, User, UserId, Username,
};

/// Message carried by every unknown-user error.
pub const USER_NOT_FOUND: &str = "User not found";

/// Service implementing [`UsersCommand`], [`UsersQuery`],
/// [`ExerciseCommand`] and [`ExerciseLogQuery`].
#[derive(Clone)]
pub struct ExerciseTrackerService<U, E> {
    users: Arc<U>,
    exercises: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseTrackerService<U, E> {
    /// Create a service over the given repositories.
    ///
    /// `clock` supplies the occurrence date for exercises submitted without
    /// one.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use exercise_tracker::domain::ExerciseTrackerService;
    /// # use exercise_tracker::outbound::memory::InMemoryStore;
    /// # use mockable::DefaultClock;
    /// let store = Arc::new(InMemoryStore::default());
    /// let service = ExerciseTrackerService::new(store.clone(), store, Arc::new(DefaultClock));
    /// # let _ = service;
    /// ```
    pub fn new(users: Arc<U>, exercises: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Constraint { message } => {
            Error::internal(format!("user record rejected: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_exercise_error(error: ExercisePersistenceError) -> Error {
    match error {
        ExercisePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("exercise repository unavailable: {message}"))
        }
        ExercisePersistenceError::Constraint { message } => {
            Error::internal(format!("exercise record rejected: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
    }
}

impl<U, E> ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn resolve_user(&self, raw_id: &str) -> Result<User, Error> {
        // Malformed identifiers cannot match any stored user.
        let Ok(user_id) = UserId::new(raw_id) else {
            return Err(Error::not_found(USER_NOT_FOUND));
        };
        self.users
            .find_by_id(&user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[async_trait]
impl<U, E> UsersCommand for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn create_user(&self, username: Option<String>) -> Result<User, Error> {
        let username = Username::new(username.unwrap_or_default())
            .map_err(|err| Error::internal(format!("user record rejected: {err}")))?;
        let user = self.users.insert(&username).await.map_err(map_user_error)?;
        debug!(user_id = %user.id(), "user stored");
        Ok(user)
    }
}

#[async_trait]
impl<U, E> UsersQuery for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_error)
    }
}

#[async_trait]
impl<U, E> ExerciseCommand for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<ExerciseReceipt, Error> {
        let user = self.resolve_user(&request.user_id).await?;
        let new_exercise = NewExercise {
            user_id: *user.id(),
            description: request.description,
            duration: request.duration,
            date: request.date.unwrap_or_else(|| self.clock.utc()),
        };
        let exercise = self
            .exercises
            .insert(&new_exercise)
            .await
            .map_err(map_exercise_error)?;
        debug!(user_id = %user.id(), exercise_id = %exercise.id, "exercise stored");
        Ok(ExerciseReceipt { user, exercise })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseTrackerService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let user = self.resolve_user(&request.user_id).await?;
        let filter = ExerciseLogFilter::for_user(*user.id())
            .with_from(request.from)
            .with_to(request.to)
            .with_limit(request.limit);
        let entries = self
            .exercises
            .find_log_entries(&filter)
            .await
            .map_err(map_exercise_error)?;
        debug!(user_id = %user.id(), count = entries.len(), "exercise log read");
        Ok(ExerciseLog { user, entries })
    }
}

#[cfg(test)]
#[path = "tracker_service_tests.rs"]
mod tests;
