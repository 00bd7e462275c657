//! User administration service.

use crate::dto::UserResponse;
use async_trait::async_trait;
use placehub_core::{Interface, PlacehubError, PlacehubResult, UserId};
use placehub_db::UserStore;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User administration use cases. Registration lives on
/// [`crate::AuthService`]; this service covers the admin surface.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists every user.
    async fn list_users(&self) -> PlacehubResult<Vec<UserResponse>>;

    /// Looks a user up by email.
    async fn get_user_by_email(&self, email: &str) -> PlacehubResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> PlacehubResult<()>;
}

/// User service implementation.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    users: Arc<dyn UserStore>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> PlacehubResult<Vec<UserResponse>> {
        let users = self.users.list_all().await?;
        debug!("Listed {} users", users.len());

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn get_user_by_email(&self, email: &str) -> PlacehubResult<UserResponse> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| PlacehubError::not_found("User", email))?;

        Ok(UserResponse::from(user))
    }

    async fn delete_user(&self, id: UserId) -> PlacehubResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.users.delete(id).await?;
        if !deleted {
            return Err(PlacehubError::not_found("User", id));
        }
        info!("User deleted: {}", id);

        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
