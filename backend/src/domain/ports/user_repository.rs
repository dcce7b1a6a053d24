//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection => "user repository connection failed",
        /// The store rejected the record, e.g. a required field was missing.
        Constraint => "user record rejected",
        /// Query or mutation failed during execution.
        Query => "user repository query failed",
    }
}

/// Driven port over the users collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert one user; the store assigns the identifier.
    async fn insert(&self, username: &Username) -> Result<User, UserPersistenceError>;

    /// Every user projected to identifier and username, in store order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}
