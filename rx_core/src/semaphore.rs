// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A cooperative counting semaphore with strict FIFO waiters. See [`Semaphore`] for
//! details.
//!
//! Unlike [`crate::rate_limiter::RateLimiter::acquire`], which sleeps the calling
//! thread by design, `Semaphore::acquire*` never blocks an OS thread - a request that
//! can't be satisfied immediately registers a waiter and cooperatively suspends the
//! calling task instead.

use std::collections::VecDeque;
use std::sync::Mutex;

use thiserror::Error;
use tokio::sync::oneshot;

/// Errors a [`Semaphore`] can report synchronously at the call site.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum SemaphoreError {
    #[error("semaphore permit count must be positive, got {requested}")]
    #[diagnostic(code(r3bl_rx_core::semaphore::non_positive_permits))]
    NonPositivePermits { requested: i64 },
}

struct Waiter {
    id: u64,
    requested: i64,
    notify: oneshot::Sender<()>,
}

struct State {
    available: i64,
    waiters: VecDeque<Waiter>,
    next_waiter_id: u64,
}

/// A cooperative permit pool. `available` tracks how many permits are free;
/// `acquire_n(n)` succeeds immediately if `available >= n`, otherwise the caller
/// cooperatively suspends until enough permits are released.
///
/// Waiters are served in strict FIFO order: if the head of the queue needs more
/// permits than are currently available, later waiters that *would* fit are still made
/// to wait behind it. This is deliberate - it prevents a steady stream of small
/// requests from starving a single large one.
pub struct Semaphore {
    state: Mutex<State>,
}

impl Semaphore {
    /// # Panics
    /// Panics if `permits` is negative. Use [`try_new`][Self::try_new] to handle that
    /// as a recoverable error instead.
    #[must_use]
    pub fn new(permits: i64) -> Self {
        Self::try_new(permits).expect("Semaphore::new requires non-negative permits")
    }

    pub fn try_new(permits: i64) -> Result<Self, SemaphoreError> {
        if permits < 0 {
            return Err(SemaphoreError::NonPositivePermits { requested: permits });
        }
        Ok(Self {
            state: Mutex::new(State {
                available: permits,
                waiters: VecDeque::new(),
                next_waiter_id: 0,
            }),
        })
    }

    pub async fn acquire(&self) -> Result<(), SemaphoreError> { self.acquire_n(1).await }

    pub async fn acquire_n(&self, n: i64) -> Result<(), SemaphoreError> {
        if n <= 0 {
            return Err(SemaphoreError::NonPositivePermits { requested: n });
        }
        let pending = {
            let mut guard = self.lock();
            if guard.available >= n && guard.waiters.is_empty() {
                guard.available -= n;
                None
            } else {
                let (tx, rx) = oneshot::channel();
                let id = guard.next_waiter_id;
                guard.next_waiter_id += 1;
                guard.waiters.push_back(Waiter {
                    id,
                    requested: n,
                    notify: tx,
                });
                Some((id, rx))
            }
        };
        if let Some((id, rx)) = pending {
            // If this future is dropped before `rx` resolves (the caller's task was
            // cancelled while still queued), `cleanup` removes the dangling waiter so a
            // strict-FIFO release never blocks on a receiver nobody will ever poll
            // again. If `rx` resolves first, `notified` is set and `cleanup` becomes a
            // no-op - the permits already belong to us and it's our job to release them
            // now, same as the immediate-acquire path.
            let mut cleanup = WaiterCleanup {
                semaphore: self,
                id,
                notified: false,
            };
            rx.await.expect("semaphore waiter dropped without being released");
            cleanup.notified = true;
        }
        Ok(())
    }

    #[must_use]
    pub fn try_acquire(&self) -> bool { self.try_acquire_n(1) }

    /// Non-blocking; succeeds only if `n` permits are free *and* no older waiter is
    /// already queued (otherwise this would jump the FIFO line).
    #[must_use]
    pub fn try_acquire_n(&self, n: i64) -> bool {
        if n <= 0 {
            return false;
        }
        let mut guard = self.lock();
        if guard.waiters.is_empty() && guard.available >= n {
            guard.available -= n;
            true
        } else {
            false
        }
    }

    pub fn release(&self) { self.release_n(1); }

    pub fn release_n(&self, n: i64) {
        assert!(n >= 0, "cannot release a negative number of permits");
        let mut guard = self.lock();
        guard.available += n;
        while let Some(front) = guard.waiters.front() {
            if front.requested > guard.available {
                // Strict FIFO, no skip-over: even if a later waiter would fit, the head
                // keeps the line.
                break;
            }
            let waiter = guard.waiters.pop_front().expect("front just matched Some");
            if waiter.notify.send(()).is_err() {
                // The receiver is gone: its `acquire_n` future was dropped while still
                // queued (the caller's task was cancelled). `WaiterCleanup::drop` races
                // this same lock to remove such waiters, so this should be rare, but if
                // we win the race first, don't hand these permits to a dead waiter -
                // leave `available` untouched and see whether the next waiter in line
                // fits instead.
                continue;
            }
            guard.available -= waiter.requested;
        }
    }

    #[must_use]
    pub fn available(&self) -> i64 { self.lock().available }

    #[must_use]
    pub fn waiting(&self) -> usize { self.lock().waiters.len() }

    /// Scoped acquisition: awaits `body`, releasing the single permit on every exit path
    /// (success, error, or the future being dropped partway through via
    /// [`SemaphoreGuard`]'s `Drop`).
    pub async fn with_permit<F, Fut, T>(&self, body: F) -> Result<T, SemaphoreError>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = T>,
    {
        self.with_permit_n(1, body).await
    }

    pub async fn with_permit_n<F, Fut, T>(&self, n: i64, body: F) -> Result<T, SemaphoreError>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = T>,
    {
        self.acquire_n(n).await?;
        let _guard = SemaphoreGuard {
            semaphore: self,
            n,
        };
        Ok(body().await)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.unwrap_or_else_poisoned()
    }

    fn remove_waiter(&self, id: u64) {
        let mut guard = self.lock();
        if let Some(pos) = guard.waiters.iter().position(|w| w.id == id) {
            guard.waiters.remove(pos);
        }
    }
}

/// Cleans up a registered-but-not-yet-granted waiter if the future awaiting it is
/// dropped before the permits are actually ours (task cancellation). Without this, a
/// waiter cancelled mid-queue would either block the strict-FIFO line forever (nobody
/// left to notify) or, if `release_n` reaches it first, have its permits subtracted from
/// `available` with no `SemaphoreGuard` ever created to give them back - a permanent
/// leak either way.
struct WaiterCleanup<'a> {
    semaphore: &'a Semaphore,
    id: u64,
    notified: bool,
}

impl Drop for WaiterCleanup<'_> {
    fn drop(&mut self) {
        if self.notified {
            // Already woken: the permits are ours now, it's our caller's job to
            // release them (e.g. via `SemaphoreGuard`), not this cleanup's.
            return;
        }
        self.semaphore.remove_waiter(self.id);
    }
}

trait MutexExt<'a, T> {
    fn unwrap_or_else_poisoned(&'a self) -> std::sync::MutexGuard<'a, T>;
}

impl<'a, T> MutexExt<'a, T> for Mutex<T> {
    fn unwrap_or_else_poisoned(&'a self) -> std::sync::MutexGuard<'a, T> {
        self.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// RAII guard returned internally by [`Semaphore::with_permit_n`] - releases `n` permits
/// back to the semaphore when dropped, regardless of how `body` exited.
struct SemaphoreGuard<'a> {
    semaphore: &'a Semaphore,
    n: i64,
}

impl Drop for SemaphoreGuard<'_> {
    fn drop(&mut self) { self.semaphore.release_n(self.n); }
}

impl std::fmt::Debug for Semaphore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.lock();
        f.debug_struct("Semaphore")
            .field("available", &guard.available)
            .field("waiting", &guard.waiters.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn try_acquire_respects_available_permits() {
        let sem = Semaphore::new(1);
        assert!(sem.try_acquire());
        assert!(!sem.try_acquire());
        sem.release();
        assert!(sem.try_acquire());
    }

    #[tokio::test]
    async fn conservation_holds_across_acquire_release() {
        let sem = Semaphore::new(5);
        sem.acquire_n(3).await.unwrap();
        assert_eq!(sem.available(), 2);
        sem.release_n(3);
        assert_eq!(sem.available(), 5);
    }

    #[tokio::test]
    async fn acquire_suspends_until_release() {
        let sem = Arc::new(Semaphore::new(0));
        let waiter_sem = Arc::clone(&sem);
        let handle = tokio::spawn(async move {
            waiter_sem.acquire().await.unwrap();
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!handle.is_finished());
        sem.release();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn fifo_fairness_no_skip_over_larger_head() {
        let sem = Arc::new(Semaphore::new(0));
        let order = Arc::new(Mutex::new(Vec::new()));

        let sem_a = Arc::clone(&sem);
        let order_a = Arc::clone(&order);
        let a = tokio::spawn(async move {
            sem_a.acquire_n(2).await.unwrap();
            order_a.lock().unwrap().push("a");
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        let sem_b = Arc::clone(&sem);
        let order_b = Arc::clone(&order);
        let b = tokio::spawn(async move {
            sem_b.acquire_n(1).await.unwrap();
            order_b.lock().unwrap().push("b");
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Only 1 permit available: "b" could satisfy its request, but "a" is queued
        // first and needs 2, so neither should have completed yet.
        sem.release_n(1);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(order.lock().unwrap().is_empty());

        // Now 2 are available: "a" (head) is satisfied first, then "b".
        sem.release_n(1);
        a.await.unwrap();
        b.await.unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn bounded_concurrency_with_permit() {
        let sem = Arc::new(Semaphore::new(2));
        let concurrent = Arc::new(AtomicUsize::new(0));
        let max_concurrent = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let sem = Arc::clone(&sem);
            let concurrent = Arc::clone(&concurrent);
            let max_concurrent = Arc::clone(&max_concurrent);
            handles.push(tokio::spawn(async move {
                sem.with_permit(|| async {
                    let now = concurrent.fetch_add(1, Ordering::SeqCst) + 1;
                    max_concurrent.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    concurrent.fetch_sub(1, Ordering::SeqCst);
                })
                .await
                .unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(max_concurrent.load(Ordering::SeqCst), 2);
        assert_eq!(sem.available(), 2);
    }

    #[tokio::test]
    async fn invalid_permit_counts_are_rejected() {
        assert!(Semaphore::try_new(-1).is_err());
        let sem = Semaphore::new(1);
        assert!(sem.acquire_n(0).await.is_err());
        assert!(!sem.try_acquire_n(-1));
    }

    /// A waiter cancelled while still queued must not leak its permits: the queue slot
    /// it held is cleaned up, and a subsequent release is fully available to later
    /// acquirers instead of being silently short by the cancelled request's share.
    #[tokio::test]
    async fn cancelling_a_queued_waiter_does_not_leak_permits() {
        let sem = Arc::new(Semaphore::new(0));

        let cancelled = {
            let sem = sem.clone();
            tokio::spawn(async move { sem.acquire_n(3).await })
        };
        // Give the queued acquire a chance to register as a waiter before cancelling it.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(sem.waiting(), 1);
        cancelled.abort();
        let _ = cancelled.await;
        // Give `WaiterCleanup::drop` a chance to run on the aborted task.
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(sem.waiting(), 0);

        sem.release_n(3);
        assert_eq!(sem.available(), 3);

        // All 3 permits are fully usable by a fresh acquirer - none were lost to the
        // cancelled waiter.
        assert!(sem.try_acquire_n(3));
    }

    /// Even if `release_n` wins the race against `WaiterCleanup::drop` and pops a
    /// cancelled waiter itself (its `oneshot::Sender` now points at a dropped
    /// receiver), it must not subtract that waiter's permits from `available`.
    #[tokio::test]
    async fn release_skips_a_dead_waiter_without_losing_its_permits() {
        let sem = Arc::new(Semaphore::new(0));

        let cancelled = {
            let sem = sem.clone();
            tokio::spawn(async move { sem.acquire_n(2).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(sem.waiting(), 1);

        // Drop the receiver side without giving `WaiterCleanup::drop` a chance to run
        // first, by aborting and immediately releasing.
        cancelled.abort();
        sem.release_n(2);

        assert_eq!(sem.available(), 2);
        assert!(sem.try_acquire_n(2));
    }
}
