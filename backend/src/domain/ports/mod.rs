//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `ExerciseRepository`) describe the store
//! the domain needs; driving ports (`UsersCommand`, `UsersQuery`,
//! `ExerciseCommand`, `ExerciseLogQuery`) are the use-cases inbound adapters
//! call.

mod macros;
pub(crate) use macros::define_port_error;

mod exercise_command;
mod exercise_log_query;
mod exercise_repository;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use exercise_command::MockExerciseCommand;
pub use exercise_command::{AddExerciseRequest, ExerciseCommand};
#[cfg(test)]
pub use exercise_log_query::MockExerciseLogQuery;
pub use exercise_log_query::{ExerciseLogQuery, ExerciseLogRequest};
#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
pub use exercise_repository::{ExercisePersistenceError, ExerciseRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
