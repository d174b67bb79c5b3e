/// `SQLite` repository implementation
use crate::users;
use atlas_core::types::{DeleteResult, UpdateResult, User, UserFields, UserId};
use atlas_core::UserRepository;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// User repository backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a repository over an already-migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> atlas_core::Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn find_by_id(&self, id: &UserId) -> atlas_core::Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    async fn create(&self, fields: UserFields) -> atlas_core::Result<User> {
        Ok(users::create(&self.pool, fields).await?)
    }

    async fn update(&self, id: &UserId, fields: UserFields) -> atlas_core::Result<UpdateResult> {
        Ok(users::update(&self.pool, id, &fields).await?)
    }

    async fn delete(&self, id: &UserId) -> atlas_core::Result<DeleteResult> {
        Ok(users::delete(&self.pool, id).await?)
    }
}
