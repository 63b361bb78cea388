// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_rx_core`
//!
//! The reactive concurrency runtime that backs `r3bl_tui` and its sibling crates: a
//! family of small, independently testable primitives for safe concurrent coordination,
//! plus two systems built on top of them that the rest of the workspace consumes
//! directly - a rate limiter and an LRU cache.
//!
//! Dependency order (leaves first), matching the component budget in the design docs:
//!
//! 1. [`ticker`] - a monotonic clock, abstracted so tests can move time by hand.
//! 2. [`scheduler`] - task execution: immediate, delayed, and periodic.
//! 3. [`atomic_cell`] - a lock-free CAS cell wrapping one value.
//! 4. [`latch`] - a completable-once result, observable by many waiters.
//! 5. [`semaphore`] - a cooperative, strictly-FIFO permit pool.
//! 6. [`bounded_queue`] - a capacity-bounded FIFO with cooperative offer/take.
//! 7. [`stream`] - the reactive stream core: operators, fibers, resource brackets.
//! 8. [`rate_limiter`] - token bucket, fixed window, sliding window.
//! 9. [`cache`] - a thread-safe LRU cache with expiration, refresh, and stats.
//!
//! Streams run on top of the scheduler; the scheduler and cache refresh executor both
//! read time through a [`ticker::Ticker`] so tests can simulate delays without real
//! sleeps. Nothing here blocks an OS thread on a cooperative suspension point - the one
//! deliberate exception is [`rate_limiter::RateLimiter::acquire`], which is a
//! synchronous, blocking API by design (see the module docs for why).

pub mod atomic_cell;
pub mod bounded_queue;
pub mod cache;
pub mod latch;
pub mod rate_limiter;
pub mod scheduler;
pub mod semaphore;
pub mod stream;
pub mod ticker;

pub use atomic_cell::AtomicCell;
pub use bounded_queue::BoundedQueue;
pub use latch::Latch;
pub use rate_limiter::{RateLimiter, RateLimiterError};
pub use scheduler::{CancelToken, Scheduler};
pub use semaphore::Semaphore;
pub use stream::{Fiber, Observer, Resource, RxError, RxEvent, RxResult, Stream};
pub use ticker::{ManualTicker, SystemTicker, Ticker};
