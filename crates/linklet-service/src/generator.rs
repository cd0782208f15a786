pub mod random;

use linklet_core::ShortCode;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is enforced by the store's atomic create-if-absent, not by
/// the generator: two in-flight creates may be handed the same candidate,
/// and exactly one of them will win the insert.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Produces a fresh candidate short code.
    fn generate(&self) -> ShortCode;
}
