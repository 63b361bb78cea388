// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rate limiting behind one uniform interface (§4.8): token bucket (the default,
//! lock-free), fixed window, sliding window, and an always-succeeds unlimited variant.
//!
//! Unlike every other suspension point in this crate, [`RateLimiter::acquire`] blocks
//! the calling OS thread via [`std::thread::sleep`] - it is a synchronous API, not a
//! reactive one (§5 "Suspension points"). Callers who want a non-blocking check should
//! use [`RateLimiter::try_acquire`] instead.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

use crate::atomic_cell::AtomicCell;
use crate::ticker::Ticker;

/// Errors a [`RateLimiter`] can report synchronously at construction.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum RateLimiterError {
    #[error("permits_per_second must be positive, got {value}")]
    #[diagnostic(code(r3bl_rx_core::rate_limiter::non_positive_rate))]
    NonPositiveRate { value: f64 },

    #[error("burst_size must be positive, got {value}")]
    #[diagnostic(code(r3bl_rx_core::rate_limiter::non_positive_burst))]
    NonPositiveBurst { value: u64 },

    #[error("max_operations must be positive, got {value}")]
    #[diagnostic(code(r3bl_rx_core::rate_limiter::non_positive_window_limit))]
    NonPositiveWindowLimit { value: u64 },

    #[error("window duration must be positive")]
    #[diagnostic(code(r3bl_rx_core::rate_limiter::non_positive_window))]
    NonPositiveWindow,

    #[error("requested permits must be positive, got {value}")]
    #[diagnostic(code(r3bl_rx_core::rate_limiter::non_positive_request))]
    NonPositiveRequest { value: u64 },
}

/// The uniform surface every rate limiter variant implements (§4.8).
///
/// `acquire*` block the calling thread for as long as they report waiting;
/// `try_acquire*` never block, returning `false` immediately if the request can't be
/// satisfied right now.
pub trait RateLimiter: Send + Sync {
    /// Blocks until one permit is available, then returns how many milliseconds the
    /// caller waited.
    fn acquire(&self) -> u64 { self.acquire_n(1) }

    /// Blocks until `n` permits are available, then returns how many milliseconds the
    /// caller waited.
    fn acquire_n(&self, n: u64) -> u64;

    /// Non-blocking: succeeds only if a permit is available right now.
    fn try_acquire(&self) -> bool { self.try_acquire_n(1) }

    /// Non-blocking: succeeds only if `n` permits are available right now.
    fn try_acquire_n(&self, n: u64) -> bool;

    /// Runs `body` after acquiring one permit (blocking).
    fn with_limit<B>(&self, body: impl FnOnce() -> B) -> B {
        self.acquire();
        body()
    }

    /// Runs `body` after acquiring `n` permits (blocking).
    fn with_limit_n<B>(&self, n: u64, body: impl FnOnce() -> B) -> B {
        self.acquire_n(n);
        body()
    }

    /// A best-effort snapshot of how many permits could be acquired immediately.
    fn available_permits(&self) -> u64;

    /// A best-effort estimate of how long `acquire()` would currently block, in ms.
    fn estimated_wait_ms(&self) -> u64;

    /// The configured steady-state rate, or [`f64::INFINITY`] for the unlimited
    /// variant.
    fn rate_per_second(&self) -> f64;
}

#[derive(Debug, Clone, Copy)]
struct TokenBucketState {
    stored_permits: f64,
    next_free_ticket_nanos: i64,
}

/// §4.8.1: the default limiter. Lock-free - its whole state is one CAS-updated record,
/// `(stored_permits, next_free_ticket_nanos)`, following the same packed-immutable-state
/// discipline as [`crate::latch::Latch`] and [`crate::atomic_cell::AtomicCell`] (§5
/// "Shared-resource policy").
pub struct TokenBucketRateLimiter {
    permits_per_second: f64,
    interval_nanos: f64,
    burst_size: u64,
    ticker: Arc<dyn Ticker>,
    state: AtomicCell<TokenBucketState>,
}

impl TokenBucketRateLimiter {
    pub fn new(permits_per_second: f64, burst_size: u64, ticker: Arc<dyn Ticker>) -> Result<Self, RateLimiterError> {
        if !(permits_per_second > 0.0) {
            return Err(RateLimiterError::NonPositiveRate { value: permits_per_second });
        }
        if burst_size == 0 {
            return Err(RateLimiterError::NonPositiveBurst { value: burst_size });
        }
        let now = ticker.read();
        Ok(Self {
            permits_per_second,
            interval_nanos: 1e9 / permits_per_second,
            burst_size,
            ticker,
            state: AtomicCell::new(TokenBucketState {
                stored_permits: burst_size as f64,
                next_free_ticket_nanos: now,
            }),
        })
    }

    /// Reserves `n` permits, applying any refill owed since the last reservation, and
    /// returns the wait (in nanoseconds) the caller must observe before those permits
    /// are usable. Implements §4.8.1 steps 1-5; step 6 (the actual sleep) is the
    /// caller's job.
    fn reserve(&self, n: u64) -> Result<i64, RateLimiterError> {
        if n == 0 {
            return Err(RateLimiterError::NonPositiveRequest { value: n });
        }
        let n = n as f64;
        let burst = self.burst_size as f64;
        let interval = self.interval_nanos;
        let wait_nanos = self.state.modify(|current| {
            let now = self.ticker.read();
            let stored = if now > current.next_free_ticket_nanos {
                let refilled = (now - current.next_free_ticket_nanos) as f64 / interval;
                (current.stored_permits + refilled).min(burst)
            } else {
                current.stored_permits
            };
            let used_from_storage = stored.min(n);
            let fresh = n - used_from_storage;
            let new_next_free = (current.next_free_ticket_nanos.max(now) as f64 + fresh * interval) as i64;
            let wait = (current.next_free_ticket_nanos - now).max(0);
            (
                TokenBucketState {
                    stored_permits: stored - used_from_storage,
                    next_free_ticket_nanos: new_next_free,
                },
                wait,
            )
        });
        Ok(wait_nanos)
    }
}

impl RateLimiter for TokenBucketRateLimiter {
    fn acquire_n(&self, n: u64) -> u64 {
        let wait_nanos = self.reserve(n).unwrap_or(0);
        let wait_ms = (wait_nanos as f64 / 1e6).ceil().max(0.0) as u64;
        if wait_ms > 0 {
            std::thread::sleep(Duration::from_millis(wait_ms));
        }
        wait_ms
    }

    fn try_acquire_n(&self, n: u64) -> bool {
        if n == 0 {
            return false;
        }
        let n = n as f64;
        let burst = self.burst_size as f64;
        let interval = self.interval_nanos;
        // Single CAS that refills, checks, and (if sufficient) deducts all at once - a
        // separate peek-then-reserve would let a concurrent caller consume the permits
        // this one observed as available between the two steps.
        self.state.modify(|current| {
            let now = self.ticker.read();
            let stored = if now > current.next_free_ticket_nanos {
                let refilled = (now - current.next_free_ticket_nanos) as f64 / interval;
                (current.stored_permits + refilled).min(burst)
            } else {
                current.stored_permits
            };
            if stored < n {
                (
                    TokenBucketState {
                        stored_permits: stored,
                        next_free_ticket_nanos: current.next_free_ticket_nanos.max(now),
                    },
                    false,
                )
            } else {
                (
                    TokenBucketState {
                        stored_permits: stored - n,
                        next_free_ticket_nanos: current.next_free_ticket_nanos.max(now),
                    },
                    true,
                )
            }
        })
    }

    fn available_permits(&self) -> u64 {
        let now = self.ticker.read();
        let burst = self.burst_size as f64;
        let interval = self.interval_nanos;
        let state = self.state.get();
        let stored = if now > state.next_free_ticket_nanos {
            let refilled = (now - state.next_free_ticket_nanos) as f64 / interval;
            (state.stored_permits + refilled).min(burst)
        } else {
            state.stored_permits
        };
        stored.floor().max(0.0) as u64
    }

    fn estimated_wait_ms(&self) -> u64 {
        let now = self.ticker.read();
        let state = self.state.get();
        ((state.next_free_ticket_nanos - now).max(0) as f64 / 1e6).ceil().max(0.0) as u64
    }

    fn rate_per_second(&self) -> f64 { self.permits_per_second }
}

struct FixedWindowState {
    window_start_nanos: i64,
    count: u64,
}

/// §4.8.2: a coarse-grained limiter - one re-entrant lock per instance, reset every
/// `window`.
pub struct FixedWindowRateLimiter {
    max_operations: u64,
    window_nanos: i64,
    ticker: Arc<dyn Ticker>,
    state: Mutex<FixedWindowState>,
}

impl FixedWindowRateLimiter {
    pub fn new(max_operations: u64, window: Duration, ticker: Arc<dyn Ticker>) -> Result<Self, RateLimiterError> {
        if max_operations == 0 {
            return Err(RateLimiterError::NonPositiveWindowLimit { value: max_operations });
        }
        if window.is_zero() {
            return Err(RateLimiterError::NonPositiveWindow);
        }
        let now = ticker.read();
        Ok(Self {
            max_operations,
            window_nanos: i64::try_from(window.as_nanos()).unwrap_or(i64::MAX),
            ticker,
            state: Mutex::new(FixedWindowState {
                window_start_nanos: now,
                count: 0,
            }),
        })
    }

    fn roll_window(state: &mut FixedWindowState, now: i64, window_nanos: i64) {
        if now - state.window_start_nanos >= window_nanos {
            state.window_start_nanos = now;
            state.count = 0;
        }
    }
}

impl RateLimiter for FixedWindowRateLimiter {
    fn acquire_n(&self, n: u64) -> u64 {
        let mut waited_ms_total = 0u64;
        loop {
            let now = self.ticker.read();
            let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            Self::roll_window(&mut state, now, self.window_nanos);
            if state.count + n <= self.max_operations {
                state.count += n;
                return waited_ms_total;
            }
            let wait_nanos = (state.window_start_nanos + self.window_nanos - now).max(0);
            drop(state);
            let wait_ms = (wait_nanos as f64 / 1e6).ceil().max(1.0) as u64;
            std::thread::sleep(Duration::from_millis(wait_ms));
            waited_ms_total += wait_ms;
        }
    }

    fn try_acquire_n(&self, n: u64) -> bool {
        let now = self.ticker.read();
        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Self::roll_window(&mut state, now, self.window_nanos);
        if state.count + n <= self.max_operations {
            state.count += n;
            true
        } else {
            false
        }
    }

    fn available_permits(&self) -> u64 {
        let now = self.ticker.read();
        let mut state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Self::roll_window(&mut state, now, self.window_nanos);
        self.max_operations.saturating_sub(state.count)
    }

    fn estimated_wait_ms(&self) -> u64 {
        if self.available_permits() > 0 {
            return 0;
        }
        let now = self.ticker.read();
        let state = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        ((state.window_start_nanos + self.window_nanos - now).max(0) as f64 / 1e6).ceil().max(0.0) as u64
    }

    fn rate_per_second(&self) -> f64 { self.max_operations as f64 / (self.window_nanos as f64 / 1e9) }
}

/// §4.8.3: keeps a deque of timestamps of recent successful acquisitions, trimming
/// anything older than `now - window` on every access.
pub struct SlidingWindowRateLimiter {
    max_operations: u64,
    window_nanos: i64,
    ticker: Arc<dyn Ticker>,
    timestamps: Mutex<VecDeque<i64>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(max_operations: u64, window: Duration, ticker: Arc<dyn Ticker>) -> Result<Self, RateLimiterError> {
        if max_operations == 0 {
            return Err(RateLimiterError::NonPositiveWindowLimit { value: max_operations });
        }
        if window.is_zero() {
            return Err(RateLimiterError::NonPositiveWindow);
        }
        Ok(Self {
            max_operations,
            window_nanos: i64::try_from(window.as_nanos()).unwrap_or(i64::MAX),
            ticker,
            timestamps: Mutex::new(VecDeque::new()),
        })
    }

    fn trim(timestamps: &mut VecDeque<i64>, now: i64, window_nanos: i64) {
        while let Some(&front) = timestamps.front() {
            if now - front >= window_nanos {
                timestamps.pop_front();
            } else {
                break;
            }
        }
    }
}

impl RateLimiter for SlidingWindowRateLimiter {
    fn acquire_n(&self, n: u64) -> u64 {
        let mut waited_ms_total = 0u64;
        loop {
            let now = self.ticker.read();
            let mut timestamps = self.timestamps.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            Self::trim(&mut timestamps, now, self.window_nanos);
            if timestamps.len() as u64 + n <= self.max_operations {
                for _ in 0..n {
                    timestamps.push_back(now);
                }
                return waited_ms_total;
            }
            let oldest = *timestamps.front().expect("len > 0 since max_operations > 0 and we're over capacity");
            drop(timestamps);
            let wait_nanos = (oldest + self.window_nanos - now).max(0);
            let wait_ms = (wait_nanos as f64 / 1e6).ceil().max(1.0) as u64;
            std::thread::sleep(Duration::from_millis(wait_ms));
            waited_ms_total += wait_ms;
        }
    }

    fn try_acquire_n(&self, n: u64) -> bool {
        let now = self.ticker.read();
        let mut timestamps = self.timestamps.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Self::trim(&mut timestamps, now, self.window_nanos);
        if timestamps.len() as u64 + n <= self.max_operations {
            for _ in 0..n {
                timestamps.push_back(now);
            }
            true
        } else {
            false
        }
    }

    fn available_permits(&self) -> u64 {
        let now = self.ticker.read();
        let mut timestamps = self.timestamps.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Self::trim(&mut timestamps, now, self.window_nanos);
        self.max_operations.saturating_sub(timestamps.len() as u64)
    }

    fn estimated_wait_ms(&self) -> u64 {
        let now = self.ticker.read();
        let mut timestamps = self.timestamps.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Self::trim(&mut timestamps, now, self.window_nanos);
        if (timestamps.len() as u64) < self.max_operations {
            return 0;
        }
        let oldest = *timestamps.front().expect("at capacity implies non-empty");
        ((oldest + self.window_nanos - now).max(0) as f64 / 1e6).ceil().max(0.0) as u64
    }

    fn rate_per_second(&self) -> f64 { self.max_operations as f64 / (self.window_nanos as f64 / 1e9) }
}

/// §4.8.3: always succeeds, with zero wait and infinite rate.
#[derive(Debug, Default)]
pub struct UnlimitedRateLimiter;

impl RateLimiter for UnlimitedRateLimiter {
    fn acquire_n(&self, _n: u64) -> u64 { 0 }
    fn try_acquire_n(&self, _n: u64) -> bool { true }
    fn available_permits(&self) -> u64 { u64::MAX }
    fn estimated_wait_ms(&self) -> u64 { 0 }
    fn rate_per_second(&self) -> f64 { f64::INFINITY }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::ManualTicker;

    #[test]
    fn token_bucket_allows_burst_then_blocks() {
        let ticker = ManualTicker::new_shared();
        let limiter = TokenBucketRateLimiter::new(10.0, 5, ticker.clone() as Arc<dyn Ticker>).unwrap();
        for _ in 0..5 {
            assert!(limiter.try_acquire());
        }
        assert!(!limiter.try_acquire());
        assert_eq!(limiter.available_permits(), 0);
        ticker.advance(100_000_000);
        assert!(limiter.try_acquire());
    }

    #[test]
    fn token_bucket_refill_matches_elapsed_times_rate() {
        let ticker = ManualTicker::new_shared();
        let limiter = TokenBucketRateLimiter::new(10.0, 5, ticker.clone() as Arc<dyn Ticker>).unwrap();
        for _ in 0..5 {
            assert!(limiter.try_acquire());
        }
        ticker.advance(500_000_000);
        assert_eq!(limiter.available_permits(), 5);
    }

    #[test]
    fn token_bucket_rejects_non_positive_rate() {
        let ticker = ManualTicker::new_shared();
        assert!(TokenBucketRateLimiter::new(0.0, 5, ticker as Arc<dyn Ticker>).is_err());
    }

    #[test]
    fn fixed_window_resets_after_window_elapses() {
        let ticker = ManualTicker::new_shared();
        let limiter = FixedWindowRateLimiter::new(2, Duration::from_secs(1), ticker.clone() as Arc<dyn Ticker>).unwrap();
        assert!(limiter.try_acquire());
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        ticker.advance(1_000_000_000);
        assert!(limiter.try_acquire());
    }

    #[test]
    fn sliding_window_evicts_old_timestamps() {
        let ticker = ManualTicker::new_shared();
        let limiter = SlidingWindowRateLimiter::new(2, Duration::from_secs(1), ticker.clone() as Arc<dyn Ticker>).unwrap();
        assert!(limiter.try_acquire());
        ticker.advance(600_000_000);
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        ticker.advance(500_000_000);
        assert!(limiter.try_acquire());
    }

    #[test]
    fn unlimited_always_succeeds() {
        let limiter = UnlimitedRateLimiter;
        assert!(limiter.try_acquire_n(1_000_000));
        assert_eq!(limiter.rate_per_second(), f64::INFINITY);
    }

    #[test]
    fn with_limit_runs_body_after_acquiring() {
        let limiter = UnlimitedRateLimiter;
        let result = limiter.with_limit(|| 42);
        assert_eq!(result, 42);
    }
}
