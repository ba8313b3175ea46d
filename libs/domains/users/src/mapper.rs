//! Lossless conversion between [`User`] and [`UserDto`].
//!
//! Both directions copy every field, `id` included. Callers that must not
//! trust an incoming id (create) clear it themselves.

use crate::models::{User, UserDto};

pub fn to_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        date_of_birth: user.date_of_birth,
    }
}

pub fn to_entity(dto: UserDto) -> User {
    User {
        id: dto.id,
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
        date_of_birth: dto.date_of_birth,
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        to_dto(user)
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        to_entity(dto)
    }
}
