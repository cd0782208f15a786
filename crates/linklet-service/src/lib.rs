//! Link service implementation.
//!
//! This crate provides the short code generator and the service that
//! orchestrates it with a [`linklet_core::LinkStore`] to implement the
//! create/resolve/stats/delete use cases.

pub mod error;
pub mod generator;
pub mod linker;
pub mod service;

pub use error::ServiceError;
pub use generator::random::RandomGenerator;
pub use generator::CodeGenerator;
pub use linker::Linker;
pub use service::LinkService;
