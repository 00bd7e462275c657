//! Notice entity with expiry handling.
//!
//! A notice's `expires_at` is stored exactly as the client supplied it, so
//! reading it back yields one of four dispositions rather than a clean
//! timestamp. [`NoticeExpiry`] makes that explicit.

use super::{NoticeId, UserId};
use crate::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Informational announcement.
    Info,
    /// Something readers should pay attention to.
    Warning,
    /// Urgent, action may be required.
    Alert,
    /// Anything else.
    #[default]
    General,
}

impl NoticeKind {
    /// Parses a kind from its lowercase database representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "alert" => Some(Self::Alert),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Alert => write!(f, "alert"),
            Self::General => write!(f, "general"),
        }
    }
}

/// Disposition of a notice's raw expiry text at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeExpiry {
    /// No expiry was supplied; the notice never expires.
    None,
    /// The expiry text does not parse as an RFC 3339 timestamp.
    Unparseable,
    /// The expiry is in the past.
    Expired,
    /// The expiry is in the future, with this many whole seconds left.
    ExpiresIn(i64),
}

/// A notice in the wire format served to clients and written to the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Unique identifier.
    pub id: NoticeId,

    /// User who posted the notice.
    pub author: UserId,

    /// Notice body.
    pub content: String,

    /// Category of the notice.
    #[serde(rename = "type")]
    pub kind: NoticeKind,

    /// Whether the notice is visible without authentication.
    pub is_public: bool,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Raw expiry text as supplied by the client, if any.
    pub expires_at: Option<String>,
}

impl Notice {
    /// Classifies this notice's expiry text at `now`.
    #[must_use]
    pub fn expiry_at(&self, now: DateTime<Utc>) -> NoticeExpiry {
        let Some(raw) = self.expires_at.as_deref() else {
            return NoticeExpiry::None;
        };
        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => {
                let remaining = (parsed.with_timezone(&Utc) - now).num_seconds();
                if remaining <= 0 {
                    NoticeExpiry::Expired
                } else {
                    NoticeExpiry::ExpiresIn(remaining)
                }
            }
            Err(_) => NoticeExpiry::Unparseable,
        }
    }

    /// True when the expiry text parses and lies in the past.
    ///
    /// Notices with absent or unparseable expiry are not considered
    /// expired; they were cached without a time-to-live and stay visible.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expiry_at(now), NoticeExpiry::Expired)
    }
}

impl Entity<NoticeId> for Notice {
    fn id(&self) -> &NoticeId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn notice(expires_at: Option<String>) -> Notice {
        Notice {
            id: 9,
            author: 1,
            content: "Campus drive on Friday".to_string(),
            kind: NoticeKind::Info,
            is_public: true,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_expiry_absent() {
        let n = notice(None);
        assert_eq!(n.expiry_at(Utc::now()), NoticeExpiry::None);
        assert!(!n.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_expiry_unparseable() {
        let n = notice(Some("next friday".to_string()));
        assert_eq!(n.expiry_at(Utc::now()), NoticeExpiry::Unparseable);
        assert!(!n.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_expiry_in_past() {
        let now = Utc::now();
        let n = notice(Some((now - Duration::seconds(10)).to_rfc3339()));
        assert_eq!(n.expiry_at(now), NoticeExpiry::Expired);
        assert!(n.is_expired_at(now));
    }

    #[test]
    fn test_expiry_in_future() {
        let now = Utc::now();
        let n = notice(Some((now + Duration::seconds(3600)).to_rfc3339()));
        match n.expiry_at(now) {
            NoticeExpiry::ExpiresIn(secs) => assert!((3599..=3600).contains(&secs)),
            other => panic!("expected ExpiresIn, got {other:?}"),
        }
    }

    #[test]
    fn test_expiry_exactly_now_is_expired() {
        let now = Utc::now();
        let n = notice(Some(now.to_rfc3339()));
        assert_eq!(n.expiry_at(now), NoticeExpiry::Expired);
    }

    #[test]
    fn test_kind_parse_round_trip() {
        for kind in [
            NoticeKind::Info,
            NoticeKind::Warning,
            NoticeKind::Alert,
            NoticeKind::General,
        ] {
            assert_eq!(NoticeKind::parse(&kind.to_string()), Some(kind));
        }
        assert_eq!(NoticeKind::parse("urgent"), None);
    }

    #[test]
    fn test_notice_serializes_type_field() {
        let n = notice(None);
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains("\"type\":\"info\""));
        assert!(json.contains("\"isPublic\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"expiresAt\""));
    }
}
