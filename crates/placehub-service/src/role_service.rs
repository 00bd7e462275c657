//! Role administration service.

use crate::dto::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
use async_trait::async_trait;
use placehub_core::{Interface, PlacehubError, PlacehubResult, RoleId, ValidateExt};
use placehub_db::{NewRole, RoleStore};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Role administration use cases.
#[async_trait]
pub trait RoleService: Interface + Send + Sync {
    /// Creates a role.
    async fn create_role(&self, request: CreateRoleRequest) -> PlacehubResult<RoleResponse>;

    /// Lists every role.
    async fn list_roles(&self) -> PlacehubResult<Vec<RoleResponse>>;

    /// Fetches a single role.
    async fn get_role(&self, id: RoleId) -> PlacehubResult<RoleResponse>;

    /// Replaces a role.
    async fn update_role(&self, id: RoleId, request: UpdateRoleRequest)
        -> PlacehubResult<RoleResponse>;

    /// Deletes a role. Fails with a conflict while the role is still
    /// assigned to users or permissions.
    async fn delete_role(&self, id: RoleId) -> PlacehubResult<()>;

    /// Case-insensitive search by name.
    async fn search_roles(&self, name: &str) -> PlacehubResult<Vec<RoleResponse>>;
}

/// Role service implementation.
#[derive(Component)]
#[shaku(interface = RoleService)]
pub struct RoleServiceImpl {
    #[shaku(inject)]
    roles: Arc<dyn RoleStore>,
}

impl RoleServiceImpl {
    /// Creates a new role service.
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }
}

#[async_trait]
impl RoleService for RoleServiceImpl {
    async fn create_role(&self, request: CreateRoleRequest) -> PlacehubResult<RoleResponse> {
        debug!("Creating role: {}", request.name);
        request.validate_request()?;

        let data = NewRole {
            name: request.name,
            description: request.description,
            is_active: request.is_active,
        };
        let role = self.roles.create(&data).await?;
        info!("Role created: {}", role.id);

        Ok(RoleResponse::from(role))
    }

    async fn list_roles(&self) -> PlacehubResult<Vec<RoleResponse>> {
        let roles = self.roles.list_all().await?;

        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }

    async fn get_role(&self, id: RoleId) -> PlacehubResult<RoleResponse> {
        let role = self
            .roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Role", id))?;

        Ok(RoleResponse::from(role))
    }

    async fn update_role(
        &self,
        id: RoleId,
        request: UpdateRoleRequest,
    ) -> PlacehubResult<RoleResponse> {
        debug!("Updating role: {}", id);
        request.validate_request()?;

        let data = NewRole {
            name: request.name,
            description: request.description,
            is_active: request.is_active,
        };
        let role = self
            .roles
            .update(id, &data)
            .await?
            .ok_or_else(|| PlacehubError::not_found("Role", id))?;
        info!("Role updated: {}", role.id);

        Ok(RoleResponse::from(role))
    }

    async fn delete_role(&self, id: RoleId) -> PlacehubResult<()> {
        debug!("Deleting role: {}", id);

        let deleted = self.roles.delete(id).await?;
        if !deleted {
            return Err(PlacehubError::not_found("Role", id));
        }
        info!("Role deleted: {}", id);

        Ok(())
    }

    async fn search_roles(&self, name: &str) -> PlacehubResult<Vec<RoleResponse>> {
        let roles = self.roles.search_by_name(name).await?;

        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }
}

impl std::fmt::Debug for RoleServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleServiceImpl").finish_non_exhaustive()
    }
}
