//! Session identifier generation.

use uuid::Uuid;

/// Mints a new opaque session identifier.
///
/// Two v4 UUIDs are concatenated so the identifier carries 256 bits of
/// randomness, making exhaustive guessing infeasible.
#[must_use]
pub fn generate_session_id() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_length_and_charset() {
        let sid = generate_session_id();
        assert_eq!(sid.len(), 64);
        assert!(sid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
    }
}
