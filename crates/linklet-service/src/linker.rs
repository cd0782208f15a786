use crate::error::Result;
use async_trait::async_trait;
use linklet_core::{LinkRecord, ShortCode};

/// The link service contract consumed by the HTTP layer.
#[async_trait]
pub trait Linker: Send + Sync + 'static {
    /// Validates and shortens a URL, returning the freshly created record.
    async fn create(&self, target_url: &str) -> Result<LinkRecord>;

    /// Resolves a short code for redirect, recording the access.
    /// Returns the post-increment record.
    async fn resolve(&self, code: &ShortCode) -> Result<LinkRecord>;

    /// Returns the record for a short code without mutating it.
    async fn stats(&self, code: &ShortCode) -> Result<LinkRecord>;

    /// Removes a short code. Returns `true` if a record existed.
    async fn delete(&self, code: &ShortCode) -> Result<bool>;
}
