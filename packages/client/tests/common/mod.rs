//! Shared fixtures for integration tests
//!
//! The builder package pulls `server.rs` and `spy.rs` in by path, so both
//! stay free of client-only helpers.

#![allow(dead_code)]

pub mod server;
pub mod tls;

mod spy;

pub use spy::{SpyTransport, respond};
