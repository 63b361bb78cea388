// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per-element transformations: `map`, `flat_map`, `filter`, `transform`, `recover`,
//! `buffer`, and the three backpressure strategies (§4.7.2).
//!
//! Every operator here is implemented the same way: wrap the downstream [`Observer`] in
//! an operator-specific observer that intercepts events on the way through, then
//! subscribe the upstream [`Stream`] to that wrapper. None of this needs the upstream
//! producer to understand backpressure - a fast [`super::sources::sequence`] can keep
//! pushing into a slow `on_backpressure_buffer` wrapper, which absorbs the overflow
//! itself and only ever reports `Continue`/`Stop` back upstream.

use std::collections::VecDeque;
use std::sync::Arc;

use super::event::{DynObserver, Observer, RxError, RxEvent, RxResult};
use super::produce::{BoxFuture, Produce, Stream};
use crate::scheduler::Scheduler;

struct ChainProducer<A, B> {
    source: Stream<A>,
    make_observer: Box<dyn Fn(DynObserver<B>) -> DynObserver<A> + Send + Sync>,
}

impl<A: Send + 'static, B: Send + 'static> Produce<B> for ChainProducer<A, B> {
    fn subscribe(self: Arc<Self>, scheduler: Arc<Scheduler>, observer: DynObserver<B>) -> BoxFuture<'static, ()> {
        let upstream_observer = (self.make_observer)(observer);
        self.source.run(scheduler, upstream_observer)
    }
}

fn chain<A: Send + 'static, B: Send + 'static>(
    source: Stream<A>,
    make_observer: impl Fn(DynObserver<B>) -> DynObserver<A> + Send + Sync + 'static,
) -> Stream<B> {
    Stream::from_producer(ChainProducer {
        source,
        make_observer: Box::new(make_observer),
    })
}

struct MapObserver<A, B> {
    f: Arc<dyn Fn(A) -> B + Send + Sync>,
    downstream: DynObserver<B>,
}

impl<A: Send, B: Send> Observer<A> for MapObserver<A, B> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(a) => self.downstream.on_event(RxEvent::OnNext((self.f)(a))),
            RxEvent::OnError(e) => self.downstream.on_event(RxEvent::OnError(e)),
            RxEvent::OnCompletion => self.downstream.on_event(RxEvent::OnCompletion),
        }
    }
}

struct FilterObserver<A> {
    predicate: Arc<dyn Fn(&A) -> bool + Send + Sync>,
    downstream: DynObserver<A>,
}

impl<A: Send> Observer<A> for FilterObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(a) => {
                if (self.predicate)(&a) {
                    self.downstream.on_event(RxEvent::OnNext(a))
                } else {
                    RxResult::Continue
                }
            }
            RxEvent::OnError(e) => self.downstream.on_event(RxEvent::OnError(e)),
            RxEvent::OnCompletion => self.downstream.on_event(RxEvent::OnCompletion),
        }
    }
}

struct TransformObserver<A, B> {
    f: Arc<dyn Fn(Result<A, Arc<RxError>>) -> B + Send + Sync>,
    downstream: DynObserver<B>,
}

impl<A: Send, B: Send> Observer<A> for TransformObserver<A, B> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(a) => self.downstream.on_event(RxEvent::OnNext((self.f)(Ok(a)))),
            RxEvent::OnError(e) => {
                let value = (self.f)(Err(e));
                let result = self.downstream.on_event(RxEvent::OnNext(value));
                if result.is_stop() {
                    return result;
                }
                self.downstream.on_event(RxEvent::OnCompletion)
            }
            RxEvent::OnCompletion => self.downstream.on_event(RxEvent::OnCompletion),
        }
    }
}

struct RecoverObserver<A> {
    f: Arc<dyn Fn(Arc<RxError>) -> A + Send + Sync>,
    downstream: DynObserver<A>,
}

impl<A: Send> Observer<A> for RecoverObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(a) => self.downstream.on_event(RxEvent::OnNext(a)),
            RxEvent::OnError(e) => {
                let value = (self.f)(e);
                let result = self.downstream.on_event(RxEvent::OnNext(value));
                if result.is_stop() {
                    return result;
                }
                self.downstream.on_event(RxEvent::OnCompletion)
            }
            RxEvent::OnCompletion => self.downstream.on_event(RxEvent::OnCompletion),
        }
    }
}

struct ChunkObserver<A> {
    capacity: usize,
    pending: Vec<A>,
    downstream: DynObserver<Vec<A>>,
}

impl<A: Send> Observer<A> for ChunkObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(a) => {
                self.pending.push(a);
                if self.pending.len() >= self.capacity {
                    let chunk = std::mem::replace(&mut self.pending, Vec::with_capacity(self.capacity));
                    self.downstream.on_event(RxEvent::OnNext(chunk))
                } else {
                    RxResult::Continue
                }
            }
            RxEvent::OnError(e) => self.downstream.on_event(RxEvent::OnError(e)),
            RxEvent::OnCompletion => {
                if !self.pending.is_empty() {
                    let chunk = std::mem::take(&mut self.pending);
                    if self.downstream.on_event(RxEvent::OnNext(chunk)).is_stop() {
                        return RxResult::Stop;
                    }
                }
                self.downstream.on_event(RxEvent::OnCompletion)
            }
        }
    }
}

/// §4.7.2 `on_backpressure_buffer`'s overflow policy once the internal buffer is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowStrategy {
    DropOldest,
    DropNewest,
    Error,
}

struct BufferingObserver<A> {
    capacity: usize,
    strategy: OverflowStrategy,
    buffer: VecDeque<A>,
    demand: u64,
    downstream: DynObserver<A>,
}

impl<A: Send> BufferingObserver<A> {
    fn record_demand(&mut self, result: RxResult) { self.demand = result.demand(); }

    fn drain(&mut self) -> RxResult {
        while self.demand > 0 {
            let Some(item) = self.buffer.pop_front() else {
                break;
            };
            let result = self.downstream.on_event(RxEvent::OnNext(item));
            self.record_demand(result);
            if result.is_stop() {
                return RxResult::Stop;
            }
        }
        RxResult::Continue
    }
}

impl<A: Send> Observer<A> for BufferingObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(value) => {
                if self.demand > 0 {
                    let result = self.downstream.on_event(RxEvent::OnNext(value));
                    self.record_demand(result);
                    if result.is_stop() {
                        return RxResult::Stop;
                    }
                    return self.drain();
                }
                if self.buffer.len() < self.capacity {
                    self.buffer.push_back(value);
                    return RxResult::Continue;
                }
                match self.strategy {
                    OverflowStrategy::DropNewest => {}
                    OverflowStrategy::DropOldest => {
                        self.buffer.pop_front();
                        self.buffer.push_back(value);
                    }
                    OverflowStrategy::Error => {
                        let error = Arc::new(RxError::BackpressureOverflow {
                            capacity: self.capacity,
                        });
                        let _ = self.downstream.on_event(RxEvent::OnError(error));
                        return RxResult::Stop;
                    }
                }
                RxResult::Continue
            }
            RxEvent::OnError(e) => self.downstream.on_event(RxEvent::OnError(e)),
            RxEvent::OnCompletion => {
                while let Some(item) = self.buffer.pop_front() {
                    if self.downstream.on_event(RxEvent::OnNext(item)).is_stop() {
                        return RxResult::Stop;
                    }
                }
                self.downstream.on_event(RxEvent::OnCompletion)
            }
        }
    }
}

struct DropObserver<A> {
    on_drop: Option<Arc<dyn Fn(&A) + Send + Sync>>,
    demand: u64,
    downstream: DynObserver<A>,
}

impl<A: Send> Observer<A> for DropObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(value) => {
                if self.demand == 0 {
                    if let Some(on_drop) = &self.on_drop {
                        on_drop(&value);
                    }
                    return RxResult::Continue;
                }
                let result = self.downstream.on_event(RxEvent::OnNext(value));
                self.demand = result.demand();
                result
            }
            RxEvent::OnError(e) => self.downstream.on_event(RxEvent::OnError(e)),
            RxEvent::OnCompletion => self.downstream.on_event(RxEvent::OnCompletion),
        }
    }
}

impl<A: Send + 'static> Stream<A> {
    /// §4.7.2 `map(f)`.
    #[must_use]
    pub fn map<B: Send + 'static>(self, f: impl Fn(A) -> B + Send + Sync + 'static) -> Stream<B> {
        let f = Arc::new(f);
        chain(self, move |downstream| {
            Box::new(MapObserver {
                f: Arc::clone(&f),
                downstream,
            })
        })
    }

    /// §4.7.2 `filter(p)`.
    #[must_use]
    pub fn filter(self, predicate: impl Fn(&A) -> bool + Send + Sync + 'static) -> Stream<A> {
        let predicate = Arc::new(predicate);
        chain(self, move |downstream| {
            Box::new(FilterObserver {
                predicate: Arc::clone(&predicate),
                downstream,
            })
        })
    }

    /// §4.7.2 `transform(f: Try<A> -> B)`: maps every `OnNext` through `f(Ok(a))`, and
    /// an `OnError` through `f(Err(e))` - in both cases the mapped value is forwarded as
    /// an `OnNext`, and an error additionally ends the stream with `OnCompletion`
    /// (the error has been "handled" into a value).
    #[must_use]
    pub fn transform<B: Send + 'static>(
        self,
        f: impl Fn(Result<A, Arc<RxError>>) -> B + Send + Sync + 'static,
    ) -> Stream<B> {
        let f = Arc::new(f);
        chain(self, move |downstream| {
            Box::new(TransformObserver {
                f: Arc::clone(&f),
                downstream,
            })
        })
    }

    /// §4.7.2 `recover`: on `OnError`, emit `f(error)` as a final value and complete
    /// instead of propagating the error.
    #[must_use]
    pub fn recover(self, f: impl Fn(Arc<RxError>) -> A + Send + Sync + 'static) -> Stream<A> {
        let f = Arc::new(f);
        chain(self, move |downstream| {
            Box::new(RecoverObserver {
                f: Arc::clone(&f),
                downstream,
            })
        })
    }

    /// §4.7.2 `buffer(capacity)`: collects `capacity` items into a `Vec` before
    /// emitting downstream (plus one final, possibly-short chunk on completion).
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn buffer(self, capacity: usize) -> Stream<Vec<A>> {
        assert!(capacity > 0, "buffer capacity must be positive");
        chain(self, move |downstream| {
            Box::new(ChunkObserver {
                capacity,
                pending: Vec::with_capacity(capacity),
                downstream,
            })
        })
    }

    /// §4.7.2 `on_backpressure_drop`: when downstream has no demand, silently drop
    /// incoming values (optionally reporting them to `on_drop` first).
    #[must_use]
    pub fn on_backpressure_drop(self, on_drop: Option<Arc<dyn Fn(&A) + Send + Sync>>) -> Stream<A> {
        chain(self, move |downstream| {
            Box::new(DropObserver {
                on_drop: on_drop.clone(),
                demand: u64::MAX,
                downstream,
            })
        })
    }

    /// §4.7.2 `on_backpressure_buffer(capacity, strategy)`.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn on_backpressure_buffer(self, capacity: usize, strategy: OverflowStrategy) -> Stream<A> {
        assert!(capacity > 0, "on_backpressure_buffer capacity must be positive");
        chain(self, move |downstream| {
            Box::new(BufferingObserver {
                capacity,
                strategy,
                buffer: VecDeque::with_capacity(capacity),
                demand: u64::MAX,
                downstream,
            })
        })
    }

    /// §4.7.2 `on_backpressure_latest`: keep only the most recent value once demand
    /// drops to zero.
    #[must_use]
    pub fn on_backpressure_latest(self) -> Stream<A> {
        self.on_backpressure_buffer(1, OverflowStrategy::DropOldest)
    }
}
