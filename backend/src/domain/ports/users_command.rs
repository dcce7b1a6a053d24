//! Driving port for registering users.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under `username`.
    ///
    /// A missing or empty name is a rejected write and surfaces as an
    /// internal error, matching how the store reports its required field.
    async fn create_user(&self, username: Option<String>) -> Result<User, Error>;
}
