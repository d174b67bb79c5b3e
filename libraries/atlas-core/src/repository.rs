//! Repository trait for user persistence

use crate::error::Result;
use crate::types::{DeleteResult, UpdateResult, User, UserFields, UserId};
use async_trait::async_trait;

/// Persistence collection for user records
///
/// Implementations own identifier assignment, timestamps and revision
/// markers. Concurrency control, if any, is the implementation's concern.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get all users in insertion order
    async fn list(&self) -> Result<Vec<User>>;

    /// Get a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Create a user holding exactly the supplied fields
    async fn create(&self, fields: UserFields) -> Result<User>;

    /// Overwrite the supplied fields of an existing user
    async fn update(&self, id: &UserId, fields: UserFields) -> Result<UpdateResult>;

    /// Physically remove a user
    async fn delete(&self, id: &UserId) -> Result<DeleteResult>;
}
