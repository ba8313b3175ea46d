//! Integration tests for `PgUserRepository`
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The migration matches the entity
//! - Ids come from the sequence
//! - Dates survive the round trip
//!
//! Run with `cargo test -p domain_users -- --ignored` when Docker is available.

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn user(builder: &TestDataBuilder, tag: &str) -> User {
    User {
        id: None,
        first_name: builder.first_name(),
        last_name: builder.last_name(),
        email: builder.email(tag),
        date_of_birth: Some(builder.date_of_birth()),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let created = repo.save(user(&builder, "main")).await.unwrap();
    let id = assert_assigned_id(created.id, "created user");

    let found = assert_some(repo.find_by_id(id).await.unwrap(), "user should exist");
    assert_eq!(found, created);
    assert_eq!(found.date_of_birth, Some(builder.date_of_birth()));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_with_id_updates_row() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_row");

    let mut created = repo.save(user(&builder, "main")).await.unwrap();
    created.last_name = "Granger".to_string();
    created.date_of_birth = None;

    let updated = repo.save(created.clone()).await.unwrap();
    assert_eq!(updated, created);
    assert_eq!(repo.find_all().await.unwrap(), vec![created]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_all_exists_and_delete() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all");

    let first = repo.save(user(&builder, "a")).await.unwrap();
    let second = repo.save(user(&builder, "b")).await.unwrap();

    let ids: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let first_id = first.id.unwrap();
    assert!(repo.exists_by_id(first_id).await.unwrap());
    repo.delete_by_id(first_id).await.unwrap();
    assert!(!repo.exists_by_id(first_id).await.unwrap());
    assert_eq!(repo.find_by_id(first_id).await.unwrap(), None);

    // Deleting again is a no-op
    repo.delete_by_id(first_id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_over_postgres() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));

    let created = service
        .create_user(UserDto::new("Emma", "Watson", "emma.watson@example.com", None))
        .await
        .unwrap();
    let id = assert_assigned_id(created.id, "created user");

    assert!(matches!(
        service.get_user_by_id(id + 1000).await,
        Err(UserError::NotFound(_))
    ));
    service.delete_user(id).await.unwrap();
}
