//! Link store implementations.

pub mod memory;

pub use memory::InMemoryLinkStore;
