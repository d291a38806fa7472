//! Client statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Counters shared by every clone of one client
#[derive(Debug)]
pub struct ClientStats {
    /// Round trips attempted, redirect hops included
    pub requests_total: AtomicU64,
    /// Round trips that produced a response of any status
    pub responses_received: AtomicU64,
    /// Round trips that failed in the transport
    pub requests_failed: AtomicU64,
    pub redirects_followed: AtomicU64,
    /// Response body bytes read
    pub bytes_received: AtomicU64,
    pub created_at: Instant,
}

impl Default for ClientStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            responses_received: AtomicU64::new(0),
            requests_failed: AtomicU64::new(0),
            redirects_followed: AtomicU64::new(0),
            bytes_received: AtomicU64::new(0),
            created_at: Instant::now(),
        }
    }

    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_response(&self, body_len: usize) {
        self.responses_received.fetch_add(1, Ordering::Relaxed);
        self.bytes_received
            .fetch_add(u64::try_from(body_len).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirect(&self) {
        self.redirects_followed.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters
    #[must_use]
    pub fn snapshot(&self) -> ClientStatsSnapshot {
        ClientStatsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            responses_received: self.responses_received.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            redirects_followed: self.redirects_followed.load(Ordering::Relaxed),
            bytes_received: self.bytes_received.load(Ordering::Relaxed),
            uptime: self.created_at.elapsed(),
        }
    }
}

/// Snapshot of client statistics at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientStatsSnapshot {
    pub requests_total: u64,
    pub responses_received: u64,
    pub requests_failed: u64,
    pub redirects_followed: u64,
    pub bytes_received: u64,
    pub uptime: Duration,
}
