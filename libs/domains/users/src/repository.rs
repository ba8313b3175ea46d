use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Persistence operations for users, keyed by id.
///
/// Implementations report infrastructure failures as [`UserError::Database`]
/// or [`UserError::Storage`]. They never return [`UserError::NotFound`];
/// absence is expressed through `Option`/`bool`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when `user.id` is `None` (assigning a fresh id), otherwise
    /// overwrite the stored row with that id.
    async fn save(&self, user: User) -> UserResult<User>;

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Every user, ascending by id.
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn exists_by_id(&self, id: i64) -> UserResult<bool>;

    /// Remove the user if present. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<i64, User>,
}

/// In-memory [`UserRepository`] for development and tests.
///
/// Ids start at 1 and are never reused, mirroring a database sequence.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        match user.id {
            None => {
                store.last_id += 1;
                let id = store.last_id;
                user.id = Some(id);
                store.users.insert(id, user.clone());
                tracing::info!(user_id = id, "Created user");
            }
            Some(id) => {
                let slot = store
                    .users
                    .get_mut(&id)
                    .ok_or_else(|| UserError::Storage(format!("no stored user with id {id} to update")))?;
                *slot = user.clone();
                tracing::info!(user_id = id, "Updated user");
            }
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        Ok(self.store.read().await.users.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        Ok(self.store.read().await.users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        if self.store.write().await.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}
