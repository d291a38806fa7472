//! HTTP client handle
//!
//! An [`HttpClient`] pairs a [`Transport`](crate::transport::Transport) with
//! a cookie jar, client-wide [`HttpConfig`](crate::config::HttpConfig) and
//! request statistics. Clones share all of them.

pub mod configuration;
pub mod core;
pub mod stats;

pub use self::core::{ExecuteOptions, HttpClient};

pub use configuration::HttpClientBuilder;
pub use stats::{ClientStats, ClientStatsSnapshot};
