/// In-process repository implementation
use atlas_core::types::{DeleteResult, UpdateResult, User, UserFields, UserId};
use atlas_core::UserRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// User repository held entirely in memory
///
/// Records live in a `Vec` so listing preserves insertion order. Nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// True when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn list(&self) -> atlas_core::Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> atlas_core::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn create(&self, fields: UserFields) -> atlas_core::Result<User> {
        let user = User::new_record(fields);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &UserId, fields: UserFields) -> atlas_core::Result<UpdateResult> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == *id) {
            Some(user) => {
                user.apply_update(&fields);
                Ok(UpdateResult::modified())
            }
            None => Ok(UpdateResult::unmatched()),
        }
    }

    async fn delete(&self, id: &UserId) -> atlas_core::Result<DeleteResult> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != *id);
        Ok(DeleteResult::deleted((before - users.len()) as u64))
    }
}
