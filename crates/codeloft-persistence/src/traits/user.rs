//! User persistence trait
//!
//! Defines the interface for user account storage operations.

use async_trait::async_trait;

use crate::model::{NewUser, User, UserPatch};

/// User persistence operations
#[async_trait]
pub trait UserPersistence: Send + Sync {
    /// Find a user by id
    async fn user_find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;

    /// Create a user, assigning a fresh id and stamping both timestamps
    async fn user_create(&self, user: NewUser) -> anyhow::Result<User>;

    /// Merge the patch over an existing user, refreshing `updated_at`
    ///
    /// Returns `Ok(None)` when no user with this id exists.
    async fn user_update(&self, id: &str, patch: UserPatch) -> anyhow::Result<Option<User>>;

    /// Delete a user; returns whether a record was actually removed
    async fn user_delete(&self, id: &str) -> anyhow::Result<bool>;
}
