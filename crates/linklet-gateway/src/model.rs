mod link;

pub use link::{CreateLinkRequest, CreateLinkResponse, LinkStatsResponse};

use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
