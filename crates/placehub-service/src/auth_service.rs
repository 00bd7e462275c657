//! Authentication service backed by database sessions.
//!
//! Login verifies the password hash, mints an opaque session identifier,
//! and persists the session row; the REST layer carries the identifier
//! in a cookie. Session resolution happens on every authenticated
//! request.

use crate::dto::{CurrentUser, LoginOutcome, LoginRequest, MessageResponse, RegisterRequest, UserResponse};
use async_trait::async_trait;
use chrono::Utc;
use placehub_core::{Interface, PlacehubError, PlacehubResult, UserId, ValidateExt};
use placehub_db::{NewUser, SessionStore, UserStore};
use placehub_security::{generate_session_id, PasswordHasherInterface};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication and session use cases.
#[async_trait]
pub trait AuthService: Interface + Send + Sync {
    /// Registers a new user with a hashed password.
    async fn register(&self, request: RegisterRequest) -> PlacehubResult<UserResponse>;

    /// Verifies credentials and opens a session.
    async fn login(&self, request: LoginRequest) -> PlacehubResult<LoginOutcome>;

    /// Closes the session behind the given identifier.
    async fn logout(&self, sid: &str) -> PlacehubResult<MessageResponse>;

    /// Resolves a session identifier into the authenticated caller.
    async fn resolve_session(&self, sid: &str) -> PlacehubResult<CurrentUser>;

    /// Returns the profile of the authenticated caller.
    async fn current_user(&self, user_id: UserId) -> PlacehubResult<UserResponse>;
}

/// Authentication service implementation.
#[derive(Component)]
#[shaku(interface = AuthService)]
pub struct AuthServiceImpl {
    #[shaku(inject)]
    users: Arc<dyn UserStore>,

    #[shaku(inject)]
    sessions: Arc<dyn SessionStore>,

    #[shaku(inject)]
    password_hasher: Arc<dyn PasswordHasherInterface>,

    session_ttl_secs: u64,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
        session_ttl_secs: u64,
    ) -> Self {
        Self {
            users,
            sessions,
            password_hasher,
            session_ttl_secs,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: RegisterRequest) -> PlacehubResult<UserResponse> {
        debug!("Registering user: {}", request.email);
        request.validate_request()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(PlacehubError::conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let password_hash = self.password_hasher.hash(&request.password)?;

        let data = NewUser {
            name: request.name,
            email: request.email,
            password: Some(password_hash),
            role_id: request.role_id,
        };
        let user = self.users.create(&data).await?;
        info!("User registered: {}", user.id);

        Ok(UserResponse::from(user))
    }

    async fn login(&self, request: LoginRequest) -> PlacehubResult<LoginOutcome> {
        debug!("Login attempt for: {}", request.email);
        request.validate_request()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: no user for {}", request.email);
                PlacehubError::InvalidCredentials
            })?;

        // Accounts created through an external identity provider have no
        // local password.
        let Some(hash) = user.password.as_deref() else {
            warn!("Login failed: user {} has no local password", user.id);
            return Err(PlacehubError::InvalidCredentials);
        };

        if !self.password_hasher.verify(&request.password, hash)? {
            warn!("Login failed: invalid password for user {}", user.id);
            return Err(PlacehubError::InvalidCredentials);
        }

        let sid = generate_session_id();
        let expires_at = Utc::now() + chrono::Duration::seconds(self.session_ttl_secs as i64);
        let session = self.sessions.create(&sid, user.id, expires_at).await?;
        info!("User logged in: {}", user.id);

        Ok(LoginOutcome {
            session,
            user: UserResponse::from(user),
        })
    }

    async fn logout(&self, sid: &str) -> PlacehubResult<MessageResponse> {
        let deleted = self.sessions.delete(sid).await?;
        if deleted {
            info!("Session closed");
        } else {
            debug!("Logout for unknown session");
        }

        Ok(MessageResponse::new("Logged out successfully"))
    }

    async fn resolve_session(&self, sid: &str) -> PlacehubResult<CurrentUser> {
        let session = self
            .sessions
            .find(sid)
            .await?
            .ok_or(PlacehubError::SessionExpired)?;

        if session.is_expired_at(Utc::now()) {
            debug!("Session for user {} has expired", session.user_id);
            let _ = self.sessions.delete(sid).await;
            return Err(PlacehubError::SessionExpired);
        }

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or(PlacehubError::SessionExpired)?;

        Ok(CurrentUser {
            user_id: user.id,
            role_id: user.role_id,
        })
    }

    async fn current_user(&self, user_id: UserId) -> PlacehubResult<UserResponse> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| PlacehubError::not_found("User", user_id))?;

        Ok(UserResponse::from(user))
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}
