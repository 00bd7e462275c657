//! Permission administration service.

use crate::dto::{CreatePermissionRequest, PermissionResponse, UpdatePermissionRequest};
use async_trait::async_trait;
use placehub_core::{Interface, PermissionId, PlacehubError, PlacehubResult, ValidateExt};
use placehub_db::{NewPermission, PermissionStore};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Permission administration use cases.
#[async_trait]
pub trait PermissionService: Interface + Send + Sync {
    /// Creates a permission.
    async fn create_permission(
        &self,
        request: CreatePermissionRequest,
    ) -> PlacehubResult<PermissionResponse>;

    /// Lists every permission.
    async fn list_permissions(&self) -> PlacehubResult<Vec<PermissionResponse>>;

    /// Fetches a single permission.
    async fn get_permission(&self, id: PermissionId) -> PlacehubResult<PermissionResponse>;

    /// Replaces a permission.
    async fn update_permission(
        &self,
        id: PermissionId,
        request: UpdatePermissionRequest,
    ) -> PlacehubResult<PermissionResponse>;

    /// Deletes a permission.
    async fn delete_permission(&self, id: PermissionId) -> PlacehubResult<()>;

    /// Substring search by name.
    async fn search_permissions(&self, name: &str) -> PlacehubResult<Vec<PermissionResponse>>;
}

/// Permission service implementation.
#[derive(Component)]
#[shaku(interface = PermissionService)]
pub struct PermissionServiceImpl {
    #[shaku(inject)]
    permissions: Arc<dyn PermissionStore>,
}

impl PermissionServiceImpl {
    /// Creates a new permission service.
    pub fn new(permissions: Arc<dyn PermissionStore>) -> Self {
        Self { permissions }
    }
}

#[async_trait]
impl PermissionService for PermissionServiceImpl {
    async fn create_permission(
        &self,
        request: CreatePermissionRequest,
    ) -> PlacehubResult<PermissionResponse> {
        debug!("Creating permission: {}", request.name);
        request.validate_request()?;

        let data = NewPermission {
            name: request.name,
            description: request.description,
        };
        let permission = self.permissions.create(&data).await?;
        info!("Permission created: {}", permission.id);

        Ok(PermissionResponse::from(permission))
    }

    async fn list_permissions(&self) -> PlacehubResult<Vec<PermissionResponse>> {
        let permissions = self.permissions.list_all().await?;

        Ok(permissions
            .into_iter()
            .map(PermissionResponse::from)
            .collect())
    }

    async fn get_permission(&self, id: PermissionId) -> PlacehubResult<PermissionResponse> {
        let permission = self
            .permissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Permission", id))?;

        Ok(PermissionResponse::from(permission))
    }

    async fn update_permission(
        &self,
        id: PermissionId,
        request: UpdatePermissionRequest,
    ) -> PlacehubResult<PermissionResponse> {
        debug!("Updating permission: {}", id);
        request.validate_request()?;

        let data = NewPermission {
            name: request.name,
            description: request.description,
        };
        let permission = self
            .permissions
            .update(id, &data)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Permission", id))?;
        info!("Permission updated: {}", permission.id);

        Ok(PermissionResponse::from(permission))
    }

    async fn delete_permission(&self, id: PermissionId) -> PlacehubResult<()> {
        debug!("Deleting permission: {}", id);

        let deleted = self.permissions.delete(id).await?;
        if !deleted {
            return Err(PlacehubError::not_found("Permission", id));
        }
        info!("Permission deleted: {}", id);

        Ok(())
    }

    async fn search_permissions(&self, name: &str) -> PlacehubResult<Vec<PermissionResponse>> {
        let permissions = self.permissions.search_by_name(name).await?;

        Ok(permissions
            .into_iter()
            .map(PermissionResponse::from)
            .collect())
    }
}

impl std::fmt::Debug for PermissionServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionServiceImpl").finish_non_exhaustive()
    }
}
