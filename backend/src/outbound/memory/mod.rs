//! In-process store implementing both repository ports.
//!
//! Used when no database URL is configured and by handler tests. Users and
//! exercises live in insertion-ordered vectors behind `RwLock`s; filtering and
//! limits match the PostgreSQL adapter.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    ExercisePersistenceError, ExerciseRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Exercise, ExerciseId, ExerciseLogFilter, LogEntry, NewExercise, User, UserId, Username,
};

/// Volatile store for users and exercises.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::Username;
/// use exercise_tracker::domain::ports::UserRepository;
/// use exercise_tracker::outbound::memory::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::default();
/// let username = Username::new("ada").expect("valid username");
/// let user = store.insert(&username).await.expect("insert user");
/// assert_eq!(store.list().await.expect("list users"), vec![user]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    exercises: RwLock<Vec<Exercise>>,
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "in-memory store lock poisoned".to_owned()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, username: &Username) -> Result<User, UserPersistenceError> {
        let user = User::new(UserId::from_uuid(Uuid::new_v4()), username.clone());
        self.users
            .write()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?
            .push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.users
            .read()
            .map(|users| users.clone())
            .map_err(|err| UserPersistenceError::query(poisoned(err)))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self
            .users
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn insert(&self, exercise: &NewExercise) -> Result<Exercise, ExercisePersistenceError> {
        let stored = Exercise::from_new(ExerciseId::from_uuid(Uuid::new_v4()), exercise.clone());
        self.exercises
            .write()
            .map_err(|err| ExercisePersistenceError::query(poisoned(err)))?
            .push(stored.clone());
        Ok(stored)
    }

    async fn find_log_entries(
        &self,
        filter: &ExerciseLogFilter,
    ) -> Result<Vec<LogEntry>, ExercisePersistenceError> {
        let exercises = self
            .exercises
            .read()
            .map_err(|err| ExercisePersistenceError::query(poisoned(err)))?;
        let take = filter.limit().map_or(usize::MAX, |limit| limit.as_usize());
        Ok(exercises
            .iter()
            .filter(|exercise| filter.matches(exercise))
            .take(take)
            .map(Exercise::to_log_entry)
            .collect())
    }
}
