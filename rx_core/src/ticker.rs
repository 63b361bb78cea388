// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A monotonic nanosecond clock, abstracted behind the [`Ticker`] trait so tests can
//! advance time by hand instead of sleeping for real. See [`ManualTicker`] for the test
//! variant and [`SystemTicker`] for the production one.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use std::time::Instant;

/// A monotonic nanosecond time source.
///
/// `read()` must be strictly non-decreasing across calls from any thread. Everything in
/// this crate that needs "now" - the scheduler's delayed-task queue, the token-bucket
/// rate limiter, the cache's expiration and refresh checks - reads time through this
/// trait rather than calling [`Instant::now`] directly, so it can be driven
/// deterministically under [`ManualTicker`] in tests.
pub trait Ticker: Send + Sync + std::fmt::Debug {
    /// Nanoseconds since an arbitrary, ticker-specific epoch.
    fn read(&self) -> i64;
}

/// Production [`Ticker`] backed by the OS monotonic clock ([`Instant`]).
#[derive(Debug, Clone)]
pub struct SystemTicker {
    start: Instant,
}

impl SystemTicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// A shared instance, convenient for call sites that don't want to thread a ticker
    /// through their whole call stack.
    #[must_use]
    pub fn shared() -> Arc<dyn Ticker> {
        Arc::new(Self::new())
    }
}

impl Default for SystemTicker {
    fn default() -> Self { Self::new() }
}

impl Ticker for SystemTicker {
    fn read(&self) -> i64 {
        self.start.elapsed().as_nanos() as i64
    }
}

/// Test [`Ticker`] that never advances on its own. Call [`ManualTicker::advance`] to move
/// time forward explicitly - this is what makes cache-expiration and rate-limiter tests
/// deterministic (§8 "Concrete end-to-end scenarios" in the design docs all key off this).
#[derive(Debug, Clone)]
pub struct ManualTicker {
    nanos: Arc<AtomicI64>,
}

impl ManualTicker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nanos: Arc::new(AtomicI64::new(0)),
        }
    }

    #[must_use]
    pub fn new_shared() -> Arc<Self> { Arc::new(Self::new()) }

    /// Moves the clock forward by `nanos` (must be non-negative; panics otherwise, since
    /// a ticker may never go backwards).
    pub fn advance(&self, nanos: i64) {
        assert!(nanos >= 0, "ManualTicker can only advance forward");
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }

    pub fn advance_duration(&self, duration: std::time::Duration) {
        self.advance(i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX));
    }
}

impl Default for ManualTicker {
    fn default() -> Self { Self::new() }
}

impl Ticker for ManualTicker {
    fn read(&self) -> i64 { self.nanos.load(Ordering::SeqCst) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_ticker_is_non_decreasing() {
        let ticker = SystemTicker::new();
        let a = ticker.read();
        let b = ticker.read();
        assert!(b >= a);
    }

    #[test]
    fn manual_ticker_starts_at_zero() {
        let ticker = ManualTicker::new();
        assert_eq!(ticker.read(), 0);
    }

    #[test]
    fn manual_ticker_never_auto_advances() {
        let ticker = ManualTicker::new();
        assert_eq!(ticker.read(), 0);
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(ticker.read(), 0);
    }

    #[test]
    fn manual_ticker_advances_explicitly() {
        let ticker = ManualTicker::new();
        ticker.advance(1_000);
        assert_eq!(ticker.read(), 1_000);
        ticker.advance(500);
        assert_eq!(ticker.read(), 1_500);
    }

    #[test]
    #[should_panic(expected = "can only advance forward")]
    fn manual_ticker_rejects_negative_advance() {
        let ticker = ManualTicker::new();
        ticker.advance(-1);
    }

    #[test]
    fn manual_ticker_advance_duration() {
        let ticker = ManualTicker::new();
        ticker.advance_duration(std::time::Duration::from_secs(1));
        assert_eq!(ticker.read(), 1_000_000_000);
    }
}
