//! Core types and traits for the linklet short-link service.
//!
//! This crate provides the shared vocabulary used by the storage,
//! service, and gateway crates.

pub mod error;
pub mod record;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, StoreError};
pub use record::LinkRecord;
pub use shortcode::ShortCode;
pub use store::LinkStore;
