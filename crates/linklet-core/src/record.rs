use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored short link record, the sole persisted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The short code this record is keyed by. Immutable once assigned.
    pub code: ShortCode,
    /// The original URL the code redirects to. Immutable after creation.
    pub target_url: String,
    /// When the record was created. Set server-side at insert.
    pub created_at: Timestamp,
    /// Number of successful redirect lookups. Monotonically non-decreasing.
    pub click_count: u64,
    /// When the record was last resolved. `None` until the first access.
    pub last_accessed_at: Option<Timestamp>,
}

impl LinkRecord {
    /// Creates a fresh record with zero clicks, stamped now.
    pub fn new(code: ShortCode, target_url: impl Into<String>) -> Self {
        Self {
            code,
            target_url: target_url.into(),
            created_at: Timestamp::now(),
            click_count: 0,
            last_accessed_at: None,
        }
    }
}
