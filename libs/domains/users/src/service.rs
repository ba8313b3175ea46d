use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::mapper::{to_dto, to_entity};
use crate::models::UserDto;
use crate::repository::UserRepository;

/// Use cases for the users API, on top of any [`UserRepository`].
///
/// Every operation takes and returns [`UserDto`]; ids supplied by callers in
/// a payload are never trusted.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store a new user. Any `id` in the payload is discarded.
    pub async fn create_user(&self, dto: UserDto) -> UserResult<UserDto> {
        let mut user = to_entity(dto);
        user.id = None;

        let saved = self.repository.save(user).await?;
        Ok(to_dto(saved))
    }

    pub async fn get_user_by_id(&self, id: i64) -> UserResult<UserDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(to_dto)
            .ok_or(UserError::NotFound(id))
    }

    pub async fn get_all_users(&self) -> UserResult<Vec<UserDto>> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(to_dto).collect())
    }

    /// Replace every field of user `id` with the payload.
    ///
    /// Omitted optional fields are cleared. The payload `id` is ignored in
    /// favour of the path id.
    pub async fn update_user(&self, id: i64, dto: UserDto) -> UserResult<UserDto> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(UserError::NotFound(id));
        }

        let mut user = to_entity(dto);
        user.id = Some(id);

        let saved = self.repository.save(user).await?;
        Ok(to_dto(saved))
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(UserError::NotFound(id));
        }
        self.repository.delete_by_id(id).await
    }
}
