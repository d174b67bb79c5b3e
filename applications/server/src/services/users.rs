/// User resource service - CRUD over the persistence collection
use crate::error::{Result, ServerError};
use atlas_core::types::{DeleteResult, UpdateResult, User, UserFields, UserId};
use atlas_core::UserRepository;
use std::sync::Arc;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// All users in store order
    pub async fn list(&self) -> Result<Vec<User>> {
        Ok(self.repository.list().await?)
    }

    /// Fetch one user.
    ///
    /// Unknown ids, malformed ids and store failures all collapse into
    /// `UserNotFound`.
    pub async fn fetch_one(&self, id: &str) -> Result<User> {
        let user_id: UserId = id.parse().map_err(|_| ServerError::UserNotFound)?;

        match self.repository.find_by_id(&user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(ServerError::UserNotFound),
            Err(e) => {
                tracing::debug!(user_id = %user_id, error = %e, "User lookup failed");
                Err(ServerError::UserNotFound)
            }
        }
    }

    /// Create a user holding exactly the supplied fields
    pub async fn add(&self, fields: UserFields) -> Result<User> {
        let user = self.repository.create(fields).await?;
        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    /// Partially update a user. A malformed id matches nothing.
    pub async fn update(&self, id: &str, fields: UserFields) -> Result<UpdateResult> {
        let Ok(user_id) = id.parse::<UserId>() else {
            return Ok(UpdateResult::unmatched());
        };

        Ok(self.repository.update(&user_id, fields).await?)
    }

    /// Delete a user. Anything other than exactly one removal is `DeleteFailed`.
    pub async fn delete(&self, id: &str) -> Result<DeleteResult> {
        let user_id: UserId = id.parse().map_err(|_| ServerError::DeleteFailed)?;

        match self.repository.delete(&user_id).await {
            Ok(result) if result.n > 0 => {
                tracing::info!(user_id = %user_id, "Deleted user");
                Ok(result)
            }
            Ok(_) => Err(ServerError::DeleteFailed),
            Err(e) => {
                tracing::debug!(user_id = %user_id, error = %e, "User delete failed");
                Err(ServerError::DeleteFailed)
            }
        }
    }
}
