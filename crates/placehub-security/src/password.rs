//! Password hashing using Argon2.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use placehub_core::{Interface, PlacehubError, PlacehubResult};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Interface for password hashing operations.
pub trait PasswordHasherInterface: Interface + Send + Sync {
    /// Hashes a password with a fresh random salt.
    fn hash(&self, password: &str) -> PlacehubResult<String>;

    /// Verifies a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> PlacehubResult<bool>;
}

/// Password hasher using Argon2id.
#[derive(Component, Clone)]
#[shaku(interface = PasswordHasherInterface)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            argon2: Arc::new(Argon2::default()),
        }
    }

    /// Creates a hasher with a custom Argon2 memory cost in MiB.
    ///
    /// Falls back to the default parameters when the cost is out of
    /// range.
    #[must_use]
    pub fn with_cost(memory_cost_mib: u32) -> Self {
        let params = Params::new(
            memory_cost_mib.saturating_mul(1024),
            Params::DEFAULT_T_COST,
            Params::DEFAULT_P_COST,
            None,
        )
        .unwrap_or_default();

        Self {
            argon2: Arc::new(Argon2::new(Algorithm::Argon2id, Version::V0x13, params)),
        }
    }

    /// Returns the internal Argon2 instance for component wiring.
    #[must_use]
    pub fn argon2_arc(&self) -> Arc<Argon2<'static>> {
        self.argon2.clone()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherInterface for PasswordHasher {
    fn hash(&self, password: &str) -> PlacehubResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PlacehubError::internal(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed");
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> PlacehubResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| PlacehubError::internal(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(PlacehubError::internal(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("Password123").expect("Failed to hash password");
        assert!(!hash.is_empty());
        assert_ne!(hash, "Password123");
        assert!(hasher.verify("Password123", &hash).expect("Verification failed"));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hasher = PasswordHasher::new();

        let hash = hasher.hash("Password123").expect("Failed to hash password");
        assert!(!hasher.verify("WrongPassword", &hash).expect("Verification failed"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("Password123").expect("Failed to hash password");
        let second = hasher.hash("Password123").expect("Failed to hash password");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let hasher = PasswordHasher::new();

        assert!(hasher.verify("Password123", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_with_cost_round_trip() {
        let hasher = PasswordHasher::with_cost(8);

        let hash = hasher.hash("Password123").expect("Failed to hash password");
        assert!(hasher.verify("Password123", &hash).expect("Verification failed"));
    }
}
