//! Server-side login session.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A login session stored in the database and referenced by the session
/// cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier carried by the cookie.
    pub sid: String,

    /// Account this session belongs to.
    pub user_id: UserId,

    /// When the session was created.
    pub created_at: DateTime<Utc>,

    /// When the session stops being honored.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// True when the session is past its expiry at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let session = Session {
            sid: "abc".to_string(),
            user_id: 1,
            created_at: now - Duration::hours(1),
            expires_at: now + Duration::hours(1),
        };
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + Duration::hours(2)));
    }
}
