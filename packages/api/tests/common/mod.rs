//! Shared fixtures for builder integration tests

#![allow(dead_code)]

#[path = "../../../client/tests/common/server.rs"]
pub mod server;

#[path = "../../../client/tests/common/spy.rs"]
mod spy;

use std::sync::Arc;

use chainreq::HttpClient;

pub use spy::{SpyTransport, respond};

/// Client routed through a new spy
pub fn spy_client(spy: SpyTransport) -> (Arc<SpyTransport>, HttpClient) {
    let spy = Arc::new(spy);
    let client = HttpClient::with_transport(spy.clone());
    (spy, client)
}
