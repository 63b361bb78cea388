// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stream builders: `single`, `empty`, `sequence`, `from_future`, `variable`,
//! `exception` (§4.7.2).

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::scheduler::Scheduler;

use super::event::{DynObserver, Observer, RxError, RxEvent};
use super::produce::{BoxFuture, Produce, Stream};

struct SingleProducer<A>(Mutex<Option<A>>);

impl<A: Send + 'static> Produce<A> for SingleProducer<A> {
    fn subscribe(self: Arc<Self>, _scheduler: Arc<Scheduler>, mut observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let value = self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner).take();
            if let Some(value) = value {
                let _ = observer.on_event(RxEvent::OnNext(value));
            }
            let _ = observer.on_event(RxEvent::OnCompletion);
        })
    }
}

/// A stream that emits exactly one value, then completes.
pub fn single<A: Send + 'static>(value: A) -> Stream<A> {
    Stream::from_producer(SingleProducer(Mutex::new(Some(value))))
}

struct EmptyProducer;

impl<A: Send + 'static> Produce<A> for EmptyProducer {
    fn subscribe(self: Arc<Self>, _scheduler: Arc<Scheduler>, mut observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let _ = observer.on_event(RxEvent::OnCompletion);
        })
    }
}

/// A stream that completes immediately without emitting anything.
pub fn empty<A: Send + 'static>() -> Stream<A> { Stream::from_producer(EmptyProducer) }

struct ExceptionProducer(RxError);

impl<A: Send + 'static> Produce<A> for ExceptionProducer {
    fn subscribe(self: Arc<Self>, _scheduler: Arc<Scheduler>, mut observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        let error = Arc::new(self.0.clone());
        Box::pin(async move {
            let _ = observer.on_event(RxEvent::OnError(error));
        })
    }
}

/// A stream that fails immediately with `error`, emitting nothing.
pub fn exception<A: Send + 'static>(error: RxError) -> Stream<A> { Stream::from_producer(ExceptionProducer(error)) }

struct SequenceProducer<A>(Mutex<Option<Vec<A>>>);

impl<A: Send + 'static> Produce<A> for SequenceProducer<A> {
    fn subscribe(self: Arc<Self>, _scheduler: Arc<Scheduler>, mut observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let items = self
                .0
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .take()
                .unwrap_or_default();
            for item in items {
                if observer.on_event(RxEvent::OnNext(item)).is_stop() {
                    return;
                }
            }
            let _ = observer.on_event(RxEvent::OnCompletion);
        })
    }
}

/// A stream that emits every item of `items` in order, then completes.
pub fn sequence<A: Send + 'static>(items: impl IntoIterator<Item = A>) -> Stream<A> {
    Stream::from_producer(SequenceProducer(Mutex::new(Some(items.into_iter().collect()))))
}

struct FromFutureProducer<A> {
    factory: Arc<dyn Fn() -> BoxFuture<'static, Result<A, RxError>> + Send + Sync>,
}

impl<A: Send + 'static> Produce<A> for FromFutureProducer<A> {
    fn subscribe(self: Arc<Self>, _scheduler: Arc<Scheduler>, mut observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            match (self.factory)().await {
                Ok(value) => {
                    let _ = observer.on_event(RxEvent::OnNext(value));
                    let _ = observer.on_event(RxEvent::OnCompletion);
                }
                Err(error) => {
                    let _ = observer.on_event(RxEvent::OnError(Arc::new(error)));
                }
            }
        })
    }
}

/// A stream backed by an async factory, re-invoked on every subscription (so the
/// `Stream` itself stays "pure to describe, re-runnable" per §3's data model).
pub fn from_future<A, F, Fut>(factory: F) -> Stream<A>
where
    A: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<A, RxError>> + Send + 'static,
{
    Stream::from_producer(FromFutureProducer {
        factory: Arc::new(move || Box::pin(factory())),
    })
}

enum VariableSlot<A> {
    Idle,
    Active(mpsc::UnboundedSender<RxEvent<A>>),
}

struct VariableProducer<A> {
    slot: Mutex<VariableSlot<A>>,
}

impl<A: Send + 'static> Produce<A> for VariableProducer<A> {
    fn subscribe(self: Arc<Self>, _scheduler: Arc<Scheduler>, mut observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let (tx, mut rx) = mpsc::unbounded_channel();
            *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = VariableSlot::Active(tx);
            while let Some(event) = rx.recv().await {
                let terminal = matches!(event, RxEvent::OnCompletion | RxEvent::OnError(_));
                let result = observer.on_event(event);
                if terminal || result.is_stop() {
                    break;
                }
            }
            *self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = VariableSlot::Idle;
        })
    }
}

/// A push source: an external handle ([`Variable::push`]/[`complete`][Variable::complete]
/// /[`fail`][Variable::fail]) paired with a [`Stream`] that observers can subscribe to.
///
/// Only one subscription is "live" at a time - this models a hot, single-consumer push
/// channel rather than a multicast subject, which keeps the implementation a plain MPSC
/// channel instead of requiring `A: Clone` for fan-out.
pub struct Variable<A> {
    inner: Arc<VariableProducer<A>>,
}

impl<A: Send + 'static> Variable<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(VariableProducer {
                slot: Mutex::new(VariableSlot::Idle),
            }),
        }
    }

    #[must_use]
    pub fn stream(&self) -> Stream<A> {
        Stream {
            inner: Arc::clone(&self.inner) as Arc<dyn Produce<A>>,
        }
    }

    /// Pushes a value downstream. A no-op if nothing is currently subscribed.
    pub fn push(&self, value: A) { self.send(RxEvent::OnNext(value)); }

    pub fn complete(&self) { self.send(RxEvent::OnCompletion); }

    pub fn fail(&self, error: RxError) { self.send(RxEvent::OnError(Arc::new(error))); }

    fn send(&self, event: RxEvent<A>) {
        if let VariableSlot::Active(tx) = &*self.inner.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner) {
            let _ = tx.send(event);
        }
    }
}

impl<A: Send + 'static> Default for Variable<A> {
    fn default() -> Self { Self::new() }
}
