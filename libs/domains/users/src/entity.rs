use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::User;

/// Sea-ORM entity for the `users` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            date_of_birth: model.date_of_birth,
        }
    }
}

/// Unsaved users leave `id` unset so the sequence assigns it.
impl From<User> for ActiveModel {
    fn from(user: User) -> Self {
        ActiveModel {
            id: user.id.map_or(NotSet, Set),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            date_of_birth: Set(user.date_of_birth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_user_leaves_id_unset() {
        let active: ActiveModel = User {
            first_name: "Emma".into(),
            ..Default::default()
        }
        .into();
        assert!(active.id.is_not_set());
        assert_eq!(active.first_name, Set("Emma".to_string()));
    }

    #[test]
    fn saved_user_sets_id() {
        let active: ActiveModel = User {
            id: Some(9),
            ..Default::default()
        }
        .into();
        assert_eq!(active.id, Set(9));
    }
}
