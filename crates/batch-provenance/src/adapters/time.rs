//! # Clock Adapters
//!
//! `SystemTimeSource` for hosts, `FixedTimeSource` for deterministic tests.

use crate::ports::outbound::TimeSource;
use chrono::{SecondsFormat, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// System clock. Timestamps are UTC RFC 3339 with seconds precision and a
/// `Z` suffix, matching the format of already-stored documents.
#[derive(Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_rfc3339(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn now_nanos(&self) -> u128 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    }
}

/// Fixed clock for tests: a constant timestamp plus a counter-backed
/// nanosecond reading, so identifier suffixes stay unique and assertions
/// stay deterministic.
pub struct FixedTimeSource {
    timestamp: String,
    ticks: AtomicU64,
}

impl FixedTimeSource {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ticks: AtomicU64::new(0),
        }
    }
}

impl TimeSource for FixedTimeSource {
    fn now_rfc3339(&self) -> String {
        self.timestamp.clone()
    }

    fn now_nanos(&self) -> u128 {
        self.ticks.fetch_add(1, Ordering::Relaxed) as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_formats_rfc3339_utc() {
        let now = SystemTimeSource.now_rfc3339();
        assert!(now.ends_with('Z'), "expected UTC Z suffix, got {now}");
        assert_eq!(now.len(), "2026-03-01T06:00:00Z".len());
    }

    #[test]
    fn fixed_clock_ticks_monotonically() {
        let clock = FixedTimeSource::new("2026-03-01T06:00:00Z");
        assert_eq!(clock.now_rfc3339(), "2026-03-01T06:00:00Z");
        let a = clock.now_nanos();
        let b = clock.now_nanos();
        assert!(b > a);
    }
}
