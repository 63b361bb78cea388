// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Small test/diagnostic helpers for driving a [`Stream`] to completion without hand
//! writing an [`Observer`] at every call site.

use std::sync::{Arc, Mutex};

use crate::scheduler::Scheduler;

use super::event::{Observer, RxError, RxEvent, RxResult, observer_fn};
use super::produce::Stream;

/// The terminal outcome of [`run_to_vec`]: every value observed, and how the stream
/// ended.
#[derive(Debug, Clone)]
pub struct RunOutcome<A> {
    pub values: Vec<A>,
    pub error: Option<Arc<RxError>>,
}

impl<A> RunOutcome<A> {
    #[must_use]
    pub fn is_success(&self) -> bool { self.error.is_none() }
}

/// Subscribes `stream` with unbounded demand and collects every `OnNext` value along
/// with the terminal error, if any. Mainly useful in tests and REPL-style diagnostics -
/// production observers almost always want to react to events as they arrive rather
/// than buffer them all in memory.
pub async fn run_to_vec<A: Send + 'static>(stream: Stream<A>, scheduler: Arc<Scheduler>) -> RunOutcome<A> {
    let values = Arc::new(Mutex::new(Vec::new()));
    let error = Arc::new(Mutex::new(None));
    let values2 = Arc::clone(&values);
    let error2 = Arc::clone(&error);

    stream
        .run(
            scheduler,
            Box::new(observer_fn(move |event| match event {
                RxEvent::OnNext(value) => {
                    values2.lock().unwrap_or_else(std::sync::PoisonError::into_inner).push(value);
                    RxResult::Continue
                }
                RxEvent::OnError(e) => {
                    *error2.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(e);
                    RxResult::Stop
                }
                RxEvent::OnCompletion => RxResult::Stop,
            })),
        )
        .await;

    RunOutcome {
        values: Arc::try_unwrap(values)
            .map(|m| m.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner))
            .unwrap_or_default(),
        error: error.lock().unwrap_or_else(std::sync::PoisonError::into_inner).take(),
    }
}

/// An [`Observer`] that records every event it sees, in order, as a formatted string -
/// handy in tests that want to assert on event *ordering*, not just final values.
pub struct RecordingObserver<A> {
    log: Arc<Mutex<Vec<String>>>,
    _marker: std::marker::PhantomData<A>,
}

impl<A> RecordingObserver<A> {
    #[must_use]
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                log: Arc::clone(&log),
                _marker: std::marker::PhantomData,
            },
            log,
        )
    }
}

impl<A> Default for RecordingObserver<A> {
    fn default() -> Self { Self::new().0 }
}

impl<A: std::fmt::Debug + Send> Observer<A> for RecordingObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        self.log
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(format!("{event:?}"));
        RxResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::sources::{exception, sequence};

    fn scheduler() -> Arc<Scheduler> { Scheduler::default_pool() }

    #[tokio::test]
    async fn run_to_vec_collects_values_on_success() {
        let outcome = run_to_vec(sequence(vec![1, 2, 3]), scheduler()).await;
        assert!(outcome.is_success());
        assert_eq!(outcome.values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn run_to_vec_surfaces_error() {
        let outcome = run_to_vec(exception::<i32>(RxError::message("boom")), scheduler()).await;
        assert!(!outcome.is_success());
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn recording_observer_captures_event_order() {
        let (observer, log) = RecordingObserver::new();
        sequence(vec![1, 2]).run(scheduler(), Box::new(observer)).await;
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 3);
        assert!(log[2].contains("OnCompletion"));
    }
}
