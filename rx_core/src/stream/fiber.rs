// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Fiber`]: a running stream subscription you can `poll`, `cancel`, or `join` (§4.7.4).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::latch::Latch;
use crate::scheduler::Scheduler;

use super::event::{Observer, RxError, RxEvent, RxResult};
use super::produce::Stream;

/// The outcome of a finished [`Fiber`]: the stream's last emitted value before it
/// completed, or the error it failed with.
type FiberOutcome<A> = Result<Option<A>, Arc<RxError>>;

struct FiberObserver<A> {
    last: Option<A>,
    slot: Arc<Mutex<Option<FiberOutcome<A>>>>,
    latch: Arc<Latch<FiberOutcome<A>, Arc<RxError>>>,
    cancelled: Arc<AtomicBool>,
}

impl<A: Clone + Send> Observer<A> for FiberObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        if self.cancelled.load(Ordering::SeqCst) {
            return RxResult::Stop;
        }
        match event {
            RxEvent::OnNext(value) => {
                self.last = Some(value);
                RxResult::Continue
            }
            RxEvent::OnError(error) => {
                *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Err(Arc::clone(&error)));
                let _ = self.latch.complete_error(error);
                RxResult::Stop
            }
            RxEvent::OnCompletion => {
                let outcome = Ok(self.last.take());
                *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(outcome.clone());
                let _ = self.latch.complete(outcome);
                RxResult::Stop
            }
        }
    }
}

/// A stream subscription already running in the background, identified by §4.7.4.
///
/// Join semantics mirror [`crate::latch::Latch::get`]: awaiting a [`Fiber`] more than
/// once, or from more than one task, is fine - every waiter gets the same outcome once
/// it's decided. [`poll`][Self::poll] gives a synchronous, non-blocking snapshot; it
/// goes through its own `slot` rather than [`Latch::try_get`] because the latch's success
/// type here is the whole [`FiberOutcome`] (so a join error is observable from `poll`
/// too, which a bare `try_get` - success-only by design - can't give us).
pub struct Fiber<A> {
    slot: Arc<Mutex<Option<FiberOutcome<A>>>>,
    latch: Arc<Latch<FiberOutcome<A>, Arc<RxError>>>,
    cancelled: Arc<AtomicBool>,
}

impl<A: Clone + Send + 'static> Fiber<A> {
    /// Subscribes `stream` in the background and returns a handle to observe it.
    pub fn start(stream: Stream<A>, scheduler: Arc<Scheduler>) -> Self {
        let slot = Arc::new(Mutex::new(None));
        let latch = Arc::new(Latch::new());
        let cancelled = Arc::new(AtomicBool::new(false));

        let observer = FiberObserver {
            last: None,
            slot: Arc::clone(&slot),
            latch: Arc::clone(&latch),
            cancelled: Arc::clone(&cancelled),
        };
        let run_future = stream.run(Arc::clone(&scheduler), Box::new(observer));
        tokio::spawn(run_future);

        Self { slot, latch, cancelled }
    }

    /// Awaits this fiber's outcome: `Ok(Some(value))` if the stream emitted at least one
    /// value before completing, `Ok(None)` if it completed empty, `Err` if it failed.
    ///
    /// Per §4.7.4, a cancelled fiber joins with [`RxError::Cancelled`].
    pub async fn join(&self) -> FiberOutcome<A> {
        match self.latch.get().await {
            Ok(outcome) => outcome,
            Err(error) => Err(error),
        }
    }

    /// A non-blocking snapshot of this fiber's state: `None` while still running.
    #[must_use]
    pub fn poll(&self) -> Option<FiberOutcome<A>> {
        self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }

    /// Requests cancellation. The running subscription observes this on its very next
    /// event and stops; [`join`][Self::join] then resolves with [`RxError::Cancelled`].
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        let error = Arc::new(RxError::Cancelled);
        *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Err(Arc::clone(&error)));
        let _ = self.latch.complete_error(error);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { self.cancelled.load(Ordering::SeqCst) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::sources::{empty, exception, sequence, single};

    fn scheduler() -> Arc<Scheduler> { Scheduler::default_pool() }

    #[tokio::test]
    async fn join_returns_last_value_before_completion() {
        let fiber = sequence(vec![1, 2, 3]).into_fiber(scheduler());
        assert_eq!(fiber.join().await.unwrap(), Some(3));
    }

    #[tokio::test]
    async fn join_on_empty_stream_is_none() {
        let fiber: Fiber<i32> = empty().into_fiber(scheduler());
        assert_eq!(fiber.join().await.unwrap(), None);
    }

    #[tokio::test]
    async fn join_surfaces_stream_error() {
        let fiber = exception::<i32>(RxError::message("boom")).into_fiber(scheduler());
        assert!(fiber.join().await.is_err());
    }

    #[tokio::test]
    async fn cancel_before_completion_joins_with_cancelled_error() {
        let fiber = single(42).into_fiber(scheduler());
        fiber.cancel();
        let outcome = fiber.join().await;
        assert!(matches!(outcome, Err(ref e) if matches!(**e, RxError::Cancelled)));
    }

    #[tokio::test]
    async fn poll_is_none_while_running_and_some_after_join() {
        let fiber = single(1).into_fiber(scheduler());
        let _ = fiber.join().await;
        assert!(fiber.poll().is_some());
    }

    #[tokio::test]
    async fn double_join_returns_same_outcome() {
        let fiber = single(9).into_fiber(scheduler());
        let first = fiber.join().await.unwrap();
        let second = fiber.join().await.unwrap();
        assert_eq!(first, second);
    }
}
