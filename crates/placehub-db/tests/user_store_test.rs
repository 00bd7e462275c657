//! Integration tests for PgUserStore.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use placehub_core::PlacehubError;
use placehub_db::{NewUser, PgUserStore, UserStore};

fn test_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: Some("argon2-hash".to_string()),
        role_id: 4,
    }
}

#[tokio::test]
async fn test_create_and_find_by_id() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());

    let created = users
        .create(&test_user("Ada", "ada@example.com"))
        .await
        .expect("Failed to create user");
    assert_eq!(created.name, "Ada");
    assert_eq!(created.email, "ada@example.com");
    assert_eq!(created.role_id, 4);
    assert!(created.is_active);

    let found = users
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found.email, "ada@example.com");
}

#[tokio::test]
async fn test_find_by_email() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());

    users
        .create(&test_user("Grace", "grace@example.com"))
        .await
        .expect("Failed to create user");

    let found = users
        .find_by_email("grace@example.com")
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(found.name, "Grace");

    let missing = users
        .find_by_email("nobody@example.com")
        .await
        .expect("Query failed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());

    users
        .create(&test_user("Original", "taken@example.com"))
        .await
        .expect("Failed to create user");

    let err = users
        .create(&test_user("Impostor", "taken@example.com"))
        .await
        .expect_err("Duplicate email should fail");
    assert!(matches!(err, PlacehubError::Conflict(_)));
    assert_eq!(err.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_malformed_email_is_rejected_by_schema() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());

    let err = users
        .create(&test_user("Typo", "not-an-email"))
        .await
        .expect_err("Malformed email should fail");
    assert_eq!(err.error_code(), "DATABASE_ERROR");
}

#[tokio::test]
async fn test_list_all() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());

    assert!(users.list_all().await.expect("Query failed").is_empty());

    for i in 1..=3 {
        users
            .create(&test_user(
                &format!("User{}", i),
                &format!("user{}@example.com", i),
            ))
            .await
            .expect("Failed to create user");
    }

    let all = users.list_all().await.expect("Query failed");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "User1");
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());

    let created = users
        .create(&test_user("Deleted", "deleted@example.com"))
        .await
        .expect("Failed to create user");

    assert!(users.delete(created.id).await.expect("Delete failed"));
    assert!(!users.delete(created.id).await.expect("Delete failed"));
    assert!(users
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .is_none());
}
