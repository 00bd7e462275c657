//! Role-permission grant administration.
//!
//! Also hosts the permission check the REST guard runs on every
//! protected route.

use crate::dto::{GrantResponse, PermissionResponse, RolePermissionRequest, RoleResponse};
use async_trait::async_trait;
use placehub_core::{Interface, PermissionId, PlacehubError, PlacehubResult, RoleId, ValidateExt};
use placehub_db::RolePermissionStore;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Role-permission grant use cases.
#[async_trait]
pub trait RolePermissionService: Interface + Send + Sync {
    /// Grants a permission to a role.
    async fn assign(&self, request: RolePermissionRequest) -> PlacehubResult<()>;

    /// Revokes a permission from a role.
    async fn remove(&self, request: RolePermissionRequest) -> PlacehubResult<()>;

    /// Lists every grant with role and permission names resolved.
    async fn list_grants(&self) -> PlacehubResult<Vec<GrantResponse>>;

    /// Lists the permissions granted to a role.
    async fn permissions_for_role(&self, role_id: RoleId)
        -> PlacehubResult<Vec<PermissionResponse>>;

    /// Lists the roles holding a permission.
    async fn roles_for_permission(
        &self,
        permission_id: PermissionId,
    ) -> PlacehubResult<Vec<RoleResponse>>;

    /// True when the role holds the named permission. Never errors; a
    /// failed lookup denies access.
    async fn role_has_permission(&self, role_id: RoleId, permission_name: &str) -> bool;
}

/// Role-permission service implementation.
#[derive(Component)]
#[shaku(interface = RolePermissionService)]
pub struct RolePermissionServiceImpl {
    #[shaku(inject)]
    grants: Arc<dyn RolePermissionStore>,
}

impl RolePermissionServiceImpl {
    /// Creates a new role-permission service.
    pub fn new(grants: Arc<dyn RolePermissionStore>) -> Self {
        Self { grants }
    }
}

#[async_trait]
impl RolePermissionService for RolePermissionServiceImpl {
    async fn assign(&self, request: RolePermissionRequest) -> PlacehubResult<()> {
        debug!(
            "Granting permission {} to role {}",
            request.permission_id, request.role_id
        );
        request.validate_request()?;

        self.grants
            .assign(request.role_id, request.permission_id)
            .await?;
        info!(
            "Permission {} granted to role {}",
            request.permission_id, request.role_id
        );

        Ok(())
    }

    async fn remove(&self, request: RolePermissionRequest) -> PlacehubResult<()> {
        debug!(
            "Revoking permission {} from role {}",
            request.permission_id, request.role_id
        );
        request.validate_request()?;

        let removed = self
            .grants
            .remove(request.role_id, request.permission_id)
            .await?;
        if !removed {
            return Err(PlacehubError::not_found(
                "RolePermission",
                format!("{}:{}", request.role_id, request.permission_id),
            ));
        }
        info!(
            "Permission {} revoked from role {}",
            request.permission_id, request.role_id
        );

        Ok(())
    }

    async fn list_grants(&self) -> PlacehubResult<Vec<GrantResponse>> {
        let grants = self.grants.list_detailed().await?;

        Ok(grants.into_iter().map(GrantResponse::from).collect())
    }

    async fn permissions_for_role(
        &self,
        role_id: RoleId,
    ) -> PlacehubResult<Vec<PermissionResponse>> {
        let permissions = self.grants.permissions_for_role(role_id).await?;

        Ok(permissions
            .into_iter()
            .map(PermissionResponse::from)
            .collect())
    }

    async fn roles_for_permission(
        &self,
        permission_id: PermissionId,
    ) -> PlacehubResult<Vec<RoleResponse>> {
        let roles = self.grants.roles_for_permission(permission_id).await?;

        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }

    async fn role_has_permission(&self, role_id: RoleId, permission_name: &str) -> bool {
        self.grants
            .role_has_permission(role_id, permission_name)
            .await
    }
}

impl std::fmt::Debug for RolePermissionServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RolePermissionServiceImpl")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use placehub_core::{Permission, Role, RolePermissionGrant, UserId};
    use std::sync::Mutex;

    struct MockRolePermissionStore {
        grants: Mutex<Vec<(RoleId, PermissionId)>>,
        names: Vec<(PermissionId, &'static str)>,
    }

    impl MockRolePermissionStore {
        fn new() -> Self {
            Self {
                grants: Mutex::new(Vec::new()),
                names: vec![(1, "user.read"), (2, "role.create"), (3, "permission.assign")],
            }
        }

        fn with_grant(role_id: RoleId, permission_id: PermissionId) -> Self {
            let store = Self::new();
            store.grants.lock().unwrap().push((role_id, permission_id));
            store
        }

        fn permission_name(&self, id: PermissionId) -> &'static str {
            self.names
                .iter()
                .find(|(pid, _)| *pid == id)
                .map_or("unknown", |(_, name)| name)
        }
    }

    #[async_trait]
    impl RolePermissionStore for MockRolePermissionStore {
        async fn assign(&self, role_id: RoleId, permission_id: PermissionId) -> PlacehubResult<()> {
            let mut grants = self.grants.lock().unwrap();
            if !grants.contains(&(role_id, permission_id)) {
                grants.push((role_id, permission_id));
            }
            Ok(())
        }

        async fn remove(
            &self,
            role_id: RoleId,
            permission_id: PermissionId,
        ) -> PlacehubResult<bool> {
            let mut grants = self.grants.lock().unwrap();
            let before = grants.len();
            grants.retain(|grant| *grant != (role_id, permission_id));
            Ok(grants.len() < before)
        }

        async fn list_detailed(&self) -> PlacehubResult<Vec<RolePermissionGrant>> {
            Ok(self
                .grants
                .lock()
                .unwrap()
                .iter()
                .map(|(role_id, permission_id)| RolePermissionGrant {
                    role_id: *role_id,
                    role_name: "Admin".to_string(),
                    permission_id: *permission_id,
                    permission_name: self.permission_name(*permission_id).to_string(),
                    permission_description: None,
                    created_at: Utc::now(),
                })
                .collect())
        }

        async fn permissions_for_role(&self, role_id: RoleId) -> PlacehubResult<Vec<Permission>> {
            let now = Utc::now();
            Ok(self
                .grants
                .lock()
                .unwrap()
                .iter()
                .filter(|(rid, _)| *rid == role_id)
                .map(|(_, pid)| Permission {
                    id: *pid,
                    name: self.permission_name(*pid).to_string(),
                    description: None,
                    created_at: now,
                    updated_at: now,
                })
                .collect())
        }

        async fn roles_for_permission(
            &self,
            permission_id: PermissionId,
        ) -> PlacehubResult<Vec<Role>> {
            let now = Utc::now();
            Ok(self
                .grants
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, pid)| *pid == permission_id)
                .map(|(rid, _)| Role {
                    id: *rid,
                    name: "Admin".to_string(),
                    description: None,
                    is_active: true,
                    created_at: now,
                    updated_at: now,
                })
                .collect())
        }

        async fn role_has_permission(&self, role_id: RoleId, permission_name: &str) -> bool {
            self.grants
                .lock()
                .unwrap()
                .iter()
                .any(|(rid, pid)| *rid == role_id && self.permission_name(*pid) == permission_name)
        }

        async fn user_has_permission(&self, _user_id: UserId, _permission_name: &str) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_assign_and_check() {
        let service = RolePermissionServiceImpl::new(Arc::new(MockRolePermissionStore::new()));

        service
            .assign(RolePermissionRequest {
                role_id: 2,
                permission_id: 1,
            })
            .await
            .unwrap();

        assert!(service.role_has_permission(2, "user.read").await);
        assert!(!service.role_has_permission(2, "role.create").await);
    }

    #[tokio::test]
    async fn test_assign_duplicate_is_a_no_op() {
        let store = MockRolePermissionStore::with_grant(2, 1);
        let service = RolePermissionServiceImpl::new(Arc::new(store));

        service
            .assign(RolePermissionRequest {
                role_id: 2,
                permission_id: 1,
            })
            .await
            .unwrap();

        assert_eq!(service.list_grants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_grant_returns_not_found() {
        let service = RolePermissionServiceImpl::new(Arc::new(MockRolePermissionStore::new()));

        let result = service
            .remove(RolePermissionRequest {
                role_id: 2,
                permission_id: 1,
            })
            .await;

        match result.unwrap_err() {
            PlacehubError::NotFound { .. } => {}
            other => panic!("Expected not found error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_grants_resolves_names() {
        let store = MockRolePermissionStore::with_grant(2, 3);
        let service = RolePermissionServiceImpl::new(Arc::new(store));

        let grants = service.list_grants().await.unwrap();

        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].permission_name, "permission.assign");
    }
}
