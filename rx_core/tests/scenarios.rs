// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cross-component scenario tests: each one wires together two or more `r3bl_rx_core`
//! primitives the way a real caller would, rather than exercising a single module in
//! isolation (that's what each module's own `#[cfg(test)]` suite is for).

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use r3bl_rx_core::cache::{CacheBuilder, RemovalCause};
use r3bl_rx_core::rate_limiter::{RateLimiter, TokenBucketRateLimiter};
use r3bl_rx_core::scheduler::{Scheduler, SchedulerKind};
use r3bl_rx_core::stream::{par_zip, run_to_vec, single};
use r3bl_rx_core::ticker::ManualTicker;
use r3bl_rx_core::{BoundedQueue, Latch, Semaphore};

/// A cache backed by a loader evicts its least-recently-touched entry once it grows past
/// its configured size, and the evicted entry's removal notification carries
/// `RemovalCause::Size`, not `Explicit`.
#[tokio::test]
async fn cache_eviction_notifies_with_size_cause() {
    let ticker = ManualTicker::new_shared();
    let evicted = Arc::new(std::sync::Mutex::new(Vec::new()));
    let evicted_clone = evicted.clone();

    let cache = CacheBuilder::<String, i32>::new()
        .with_maximum_size(2)
        .with_ticker(ticker)
        .with_removal_listener(move |notification| {
            evicted_clone.lock().unwrap().push((notification.key, notification.cause));
        })
        .build()
        .expect("size-only cache builds");

    cache.put("a".to_string(), 1);
    cache.put("b".to_string(), 2);
    // Touch "a" so "b" becomes the least-recently-used entry.
    assert_eq!(cache.get(&"a".to_string()), Some(1));
    cache.put("c".to_string(), 3);

    let seen = evicted.lock().unwrap().clone();
    assert_eq!(seen, vec![("b".to_string(), RemovalCause::Size)]);
    assert_eq!(cache.estimated_size(), 2);
}

/// A cache entry that has outlived its expire-after-write duration is treated as a miss
/// on the next `get`, even though nothing ever called `invalidate`.
#[tokio::test]
async fn cache_expires_entries_after_write_duration() {
    let ticker = ManualTicker::new_shared();
    let cache = CacheBuilder::<String, i32>::new()
        .with_maximum_size(10)
        .with_expiration_after_write(Duration::from_secs(60))
        .with_ticker(ticker.clone())
        .build()
        .expect("expiring cache builds");

    cache.put("k".to_string(), 42);
    assert_eq!(cache.get(&"k".to_string()), Some(42));

    ticker.advance_duration(Duration::from_secs(61));

    assert_eq!(cache.get(&"k".to_string()), None);
    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
}

/// A token-bucket limiter initialized with a full burst lets that many calls through
/// without blocking, then reports zero permits until the ticker advances enough to
/// refill at least one.
#[tokio::test]
async fn token_bucket_burst_then_refill_unblocks_waiter() {
    let ticker = ManualTicker::new_shared();
    let limiter = TokenBucketRateLimiter::new(10.0, 3, ticker.clone())
        .expect("positive rate and burst construct a limiter");

    assert!(limiter.try_acquire());
    assert!(limiter.try_acquire());
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire(), "burst is exhausted after three takes");

    // At 10 permits/sec, 150ms refills 1.5 permits - enough for exactly one more.
    ticker.advance_duration(Duration::from_millis(150));
    assert!(limiter.try_acquire());
    assert!(!limiter.try_acquire());
}

/// A semaphore-bounded worker pool never lets more than its permit count run at once,
/// even when every task is submitted up front.
#[tokio::test]
async fn semaphore_bounds_concurrent_workers() {
    let semaphore = Arc::new(Semaphore::new(2));
    let in_flight = Arc::new(AtomicU32::new(0));
    let max_observed = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for _ in 0..6 {
        let semaphore = semaphore.clone();
        let in_flight = in_flight.clone();
        let max_observed = max_observed.clone();
        handles.push(tokio::spawn(async move {
            semaphore
                .with_permit(|| async {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    max_observed.fetch_max(now, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                })
                .await
        }));
    }

    for handle in handles {
        handle.await.expect("worker task does not panic").expect("permit acquired");
    }

    assert!(max_observed.load(Ordering::SeqCst) <= 2);
    assert_eq!(semaphore.available(), 2);
}

/// A `Latch` completed once is observed identically by every waiter that called `get`
/// before completion, including ones that were still suspended.
#[tokio::test]
async fn latch_broadcasts_single_completion_to_all_waiters() {
    let latch: Arc<Latch<i32, String>> = Arc::new(Latch::new());

    let mut waiters = Vec::new();
    for _ in 0..4 {
        let latch = latch.clone();
        waiters.push(tokio::spawn(async move { latch.get().await }));
    }

    // Give the waiters a chance to register before completing.
    tokio::task::yield_now().await;
    assert!(latch.complete(7));
    assert!(!latch.complete(99), "a second completion must be rejected");

    for waiter in waiters {
        assert_eq!(waiter.await.expect("waiter task does not panic"), Ok(7));
    }
}

/// A bounded queue composed with a scheduler-driven producer and consumer never
/// exceeds its capacity, and the consumer observes every item the producer pushed, in
/// order.
#[tokio::test]
async fn bounded_queue_pipes_values_between_producer_and_consumer() {
    let queue = Arc::new(BoundedQueue::<i32>::new(2));
    let producer_queue = queue.clone();

    let producer = tokio::spawn(async move {
        for value in 0..5 {
            producer_queue.offer(value).await;
        }
    });

    let mut received = Vec::new();
    while received.len() < 5 {
        received.push(queue.take().await);
    }
    producer.await.expect("producer task does not panic");

    assert_eq!(received, vec![0, 1, 2, 3, 4]);
}

/// `par_zip` joins two single-valued sources into one tuple, the way a fan-in join of
/// two independent concurrent lookups would (it's built on `par_sequence`, §4.7.3's
/// bounded-parallelism collector over one result per participant - not an element-wise
/// zip of two multi-item streams, which `r3bl_rx_core` doesn't expose an operator for).
#[tokio::test]
async fn par_zip_joins_two_single_valued_sources() {
    let scheduler = Scheduler::new(SchedulerKind::Default, Arc::new(r3bl_rx_core::ticker::SystemTicker::new()));
    let name = single("alpha");
    let score = single(10);

    let zipped = par_zip(name, score);
    let outcome = run_to_vec(zipped, scheduler).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.values, vec![("alpha", 10)]);
}
