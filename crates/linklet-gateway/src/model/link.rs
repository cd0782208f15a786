use jiff::Timestamp;
use linklet_core::LinkRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
}

/// Body of a successful `POST /shorten`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_code: String,
    pub url: String,
}

impl From<LinkRecord> for CreateLinkResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            short_code: record.code.as_str().to_owned(),
            url: record.target_url,
        }
    }
}

/// Body of a successful `GET /{code}/stats`.
///
/// Timestamps serialize as ISO 8601 UTC strings; `last_accessed` is
/// `null` until the first access.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatsResponse {
    pub url: String,
    pub short_code: String,
    pub clicks: u64,
    pub created_at: Timestamp,
    pub last_accessed: Option<Timestamp>,
}

impl From<LinkRecord> for LinkStatsResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            url: record.target_url,
            short_code: record.code.as_str().to_owned(),
            clicks: record.click_count,
            created_at: record.created_at,
            last_accessed: record.last_accessed_at,
        }
    }
}
