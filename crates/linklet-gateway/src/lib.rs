//! HTTP endpoint layer for the linklet short-link service.
//!
//! Translates requests to link service calls and encodes results on the
//! wire. No business logic lives here beyond request decoding, status
//! mapping, and response encoding.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
