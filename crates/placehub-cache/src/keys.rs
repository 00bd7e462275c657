//! Cache key construction.
//!
//! Every cached entity gets its key from here so the write and read
//! paths cannot drift apart.
//!
//! Job keys carry no prefix. A `job_*` scan therefore never finds them,
//! and job reads fall through to the database; notices are the
//! cache-served collection. The layout is kept as deployed.

use placehub_core::domain::{CompanyId, JobId, NoticeId};

/// Scan pattern for prefixed job keys.
pub const JOB_SCAN_PATTERN: &str = "job_*";

/// Scan pattern matching every cached notice.
pub const NOTICE_SCAN_PATTERN: &str = "notice_*";

/// Key for a cached job listing.
#[must_use]
pub fn job_key(job_id: JobId, company_id: CompanyId) -> String {
    format!("{}_{}", job_id, company_id)
}

/// Key for a cached notice.
#[must_use]
pub fn notice_key(id: NoticeId) -> String {
    format!("notice_{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_key() {
        assert_eq!(job_key(5, 2), "5_2");
        assert_eq!(job_key(42, 7), "42_7");
    }

    #[test]
    fn test_notice_key() {
        assert_eq!(notice_key(3), "notice_3");
        assert!(notice_key(3).starts_with("notice_"));
    }

    #[test]
    fn test_job_keys_do_not_carry_the_scan_prefix() {
        assert!(!job_key(5, 2).starts_with("job_"));
    }
}
