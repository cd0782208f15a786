use crate::error::StoreError;
use crate::record::LinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Durable key-value mapping from short code to link record.
///
/// Implementations must make `create_if_absent`, `increment_click`, and
/// `delete` linearizable per code: two concurrent creates of the same
/// code admit exactly one winner, and an increment racing a delete
/// resolves to one of the two orderings, never a partial record.
/// Operations on different codes never contend.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Inserts a new record only if `code` is not already taken.
    /// Returns the created record, or `None` if the code exists.
    ///
    /// This is the single synchronization point that makes code
    /// generation race-free: callers loop "generate candidate, attempt
    /// insert" rather than checking existence separately.
    async fn create_if_absent(
        &self,
        code: &ShortCode,
        target_url: &str,
    ) -> Result<Option<LinkRecord>>;

    /// Retrieves the record for a code. `None` if absent or deleted.
    async fn get(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Atomically increments the click count and stamps the access time,
    /// returning the post-increment record. `None` if the code is absent;
    /// a record deleted before the increment is never resurrected.
    async fn increment_click(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Removes the record for a code. Returns `true` if a record existed.
    /// Idempotent: deleting an absent code is `Ok(false)`, not an error.
    async fn delete(&self, code: &ShortCode) -> Result<bool>;
}
