//! Integration tests for the RBAC stores: roles, permissions, and grants.
//!
//! These tests run against a real PostgreSQL database using testcontainers.
//! Requires Docker to be available on the system. Migrations seed five
//! roles and a default permission set, which these tests rely on.

mod common;

use common::TestDatabase;
use placehub_core::PlacehubError;
use placehub_db::{
    NewPermission, NewRole, NewUser, PermissionStore, PgPermissionStore, PgRolePermissionStore,
    PgRoleStore, PgUserStore, RolePermissionStore, RoleStore, UserStore,
};

fn test_role(name: &str) -> NewRole {
    NewRole {
        name: name.to_string(),
        description: Some("Created by a test".to_string()),
        is_active: true,
    }
}

#[tokio::test]
async fn test_seeded_roles_present() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());

    let all = roles.list_all().await.expect("Query failed");
    assert_eq!(all.len(), 5);
    assert_eq!(all[0].name, "Super Admin");
    assert_eq!(all[3].name, "User");
    assert!(all.iter().all(|r| r.is_active));
}

#[tokio::test]
async fn test_create_update_and_search_role() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());

    let created = roles
        .create(&test_role("Placement Officer"))
        .await
        .expect("Failed to create role");

    let mut changed = test_role("Placement Officer");
    changed.is_active = false;
    let updated = roles
        .update(created.id, &changed)
        .await
        .expect("Update failed")
        .expect("Role not found");
    assert!(!updated.is_active);

    // ILIKE matches regardless of case
    let hits = roles
        .search_by_name("placement")
        .await
        .expect("Search failed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Placement Officer");

    let admins = roles.search_by_name("admin").await.expect("Search failed");
    assert_eq!(admins.len(), 2); // Super Admin + Admin
}

#[tokio::test]
async fn test_delete_unused_role() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());

    let created = roles
        .create(&test_role("Ephemeral"))
        .await
        .expect("Failed to create role");

    assert!(roles.delete(created.id).await.expect("Delete failed"));
    assert!(roles
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
async fn test_delete_missing_role_returns_false() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());

    assert!(!roles.delete(99_999).await.expect("Delete failed"));
}

#[tokio::test]
async fn test_delete_role_with_users_is_blocked() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());
    let users = PgUserStore::new(db.database());

    let role = roles
        .create(&test_role("Occupied"))
        .await
        .expect("Failed to create role");
    users
        .create(&NewUser {
            name: "Holder".to_string(),
            email: "holder@example.com".to_string(),
            password: None,
            role_id: role.id,
        })
        .await
        .expect("Failed to create user");

    let err = roles
        .delete(role.id)
        .await
        .expect_err("Delete should be blocked");
    assert!(matches!(err, PlacehubError::Conflict(_)));
    assert_eq!(
        err.to_string(),
        "Conflict: Cannot delete role. 1 users are assigned to this role."
    );

    // Nothing was deleted
    assert!(roles
        .find_by_id(role.id)
        .await
        .expect("Query failed")
        .is_some());
}

#[tokio::test]
async fn test_seeded_permissions_present() {
    let db = TestDatabase::new().await;
    let permissions = PgPermissionStore::new(db.database());

    let all = permissions.list_all().await.expect("Query failed");
    assert_eq!(all.len(), 25);
    assert!(all.iter().any(|p| p.name == "user.read"));
    assert!(all.iter().any(|p| p.name == "job.create"));
}

#[tokio::test]
async fn test_permission_crud() {
    let db = TestDatabase::new().await;
    let permissions = PgPermissionStore::new(db.database());

    let created = permissions
        .create(&NewPermission {
            name: "reports.export".to_string(),
            description: Some("Export reports".to_string()),
        })
        .await
        .expect("Failed to create permission");

    let updated = permissions
        .update(
            created.id,
            &NewPermission {
                name: "reports.export".to_string(),
                description: Some("Export reports as CSV".to_string()),
            },
        )
        .await
        .expect("Update failed")
        .expect("Permission not found");
    assert_eq!(updated.description.as_deref(), Some("Export reports as CSV"));

    assert!(permissions.delete(created.id).await.expect("Delete failed"));
    assert!(permissions
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
async fn test_permission_search_is_case_sensitive() {
    let db = TestDatabase::new().await;
    let permissions = PgPermissionStore::new(db.database());

    let hits = permissions
        .search_by_name("user.")
        .await
        .expect("Search failed");
    assert_eq!(hits.len(), 4);

    // LIKE, not ILIKE; seeded names are lowercase
    let upper = permissions
        .search_by_name("USER")
        .await
        .expect("Search failed");
    assert!(upper.is_empty());
}

#[tokio::test]
async fn test_assign_is_idempotent() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());
    let permissions = PgPermissionStore::new(db.database());
    let grants = PgRolePermissionStore::new(db.database());

    let role = roles
        .create(&test_role("Granted"))
        .await
        .expect("Failed to create role");
    let permission = permissions
        .create(&NewPermission {
            name: "reports.schedule".to_string(),
            description: None,
        })
        .await
        .expect("Failed to create permission");

    grants
        .assign(role.id, permission.id)
        .await
        .expect("Assign failed");
    grants
        .assign(role.id, permission.id)
        .await
        .expect("Second assign failed");

    let held = grants
        .permissions_for_role(role.id)
        .await
        .expect("Query failed");
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].name, "reports.schedule");
}

#[tokio::test]
async fn test_remove_grant() {
    let db = TestDatabase::new().await;
    let roles = PgRoleStore::new(db.database());
    let permissions = PgPermissionStore::new(db.database());
    let grants = PgRolePermissionStore::new(db.database());

    let role = roles
        .create(&test_role("Revocable"))
        .await
        .expect("Failed to create role");
    let permission = permissions
        .create(&NewPermission {
            name: "reports.purge".to_string(),
            description: None,
        })
        .await
        .expect("Failed to create permission");

    grants
        .assign(role.id, permission.id)
        .await
        .expect("Assign failed");
    assert!(grants
        .remove(role.id, permission.id)
        .await
        .expect("Remove failed"));
    assert!(!grants
        .remove(role.id, permission.id)
        .await
        .expect("Remove failed"));
    assert!(grants
        .permissions_for_role(role.id)
        .await
        .expect("Query failed")
        .is_empty());
}

#[tokio::test]
async fn test_list_detailed_is_ordered() {
    let db = TestDatabase::new().await;
    let grants = PgRolePermissionStore::new(db.database());

    let all = grants.list_detailed().await.expect("Query failed");
    // 25 Super Admin grants + 3 User grants from the seed
    assert_eq!(all.len(), 28);
    assert_eq!(all[0].role_name, "Super Admin");
    assert_eq!(all[0].permission_name, "company.create");
    assert_eq!(all[27].role_name, "User");
    assert_eq!(all[27].permission_name, "user.read");
}

#[tokio::test]
async fn test_roles_for_permission() {
    let db = TestDatabase::new().await;
    let permissions = PgPermissionStore::new(db.database());
    let grants = PgRolePermissionStore::new(db.database());

    let user_read = permissions
        .search_by_name("user.read")
        .await
        .expect("Search failed");
    assert_eq!(user_read.len(), 1);

    let holders = grants
        .roles_for_permission(user_read[0].id)
        .await
        .expect("Query failed");
    let names: Vec<&str> = holders.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Super Admin", "User"]);
}

#[tokio::test]
async fn test_role_has_permission() {
    let db = TestDatabase::new().await;
    let grants = PgRolePermissionStore::new(db.database());

    assert!(grants.role_has_permission(4, "user.read").await);
    assert!(!grants.role_has_permission(4, "user.delete").await);
    assert!(!grants.role_has_permission(99_999, "user.read").await);
}

#[tokio::test]
async fn test_user_has_permission() {
    let db = TestDatabase::new().await;
    let users = PgUserStore::new(db.database());
    let grants = PgRolePermissionStore::new(db.database());

    let user = users
        .create(&NewUser {
            name: "Reader".to_string(),
            email: "reader@example.com".to_string(),
            password: None,
            role_id: 4,
        })
        .await
        .expect("Failed to create user");

    assert!(grants.user_has_permission(user.id, "user.read").await);
    assert!(!grants.user_has_permission(user.id, "job.create").await);
    assert!(!grants.user_has_permission(99_999, "user.read").await);
}
