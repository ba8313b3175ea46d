use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user as the storage layer sees it.
///
/// `id` is `None` until the first save assigns one; it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
}

/// Wire and service-facing representation of a [`User`].
///
/// Serialized with camelCase keys; `dateOfBirth` is `YYYY-MM-DD`.
/// `email` is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Ignored on create and update
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Emma")]
    pub first_name: String,
    #[schema(example = "Watson")]
    pub last_name: String,
    #[schema(example = "emma.watson@example.com")]
    pub email: String,
    #[schema(example = "1990-04-15")]
    pub date_of_birth: Option<NaiveDate>,
}

impl UserDto {
    /// An unsaved user with the given fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let dto = UserDto {
            id: Some(3),
            ..UserDto::new(
                "Emma",
                "Watson",
                "emma.watson@example.com",
                NaiveDate::from_ymd_opt(1990, 4, 15),
            )
        };

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "id": 3,
                "firstName": "Emma",
                "lastName": "Watson",
                "email": "emma.watson@example.com",
                "dateOfBirth": "1990-04-15"
            })
        );
    }

    #[test]
    fn absent_id_and_date_serialize_as_null() {
        let value = serde_json::to_value(UserDto::new("A", "B", "a@b.c", None)).unwrap();
        assert!(value["id"].is_null());
        assert!(value["dateOfBirth"].is_null());
    }

    #[test]
    fn optional_fields_may_be_omitted_on_input() {
        let dto: UserDto = serde_json::from_value(json!({
            "firstName": "Emma",
            "lastName": "Watson",
            "email": "emma.watson@example.com"
        }))
        .unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.date_of_birth, None);
    }

    #[test]
    fn required_fields_are_required() {
        let result: Result<UserDto, _> = serde_json::from_value(json!({
            "firstName": "Emma",
            "lastName": "Watson"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_iso_dates() {
        let result: Result<UserDto, _> = serde_json::from_value(json!({
            "firstName": "Emma",
            "lastName": "Watson",
            "email": "e@example.com",
            "dateOfBirth": "15/04/1990"
        }));
        assert!(result.is_err());
    }
}
