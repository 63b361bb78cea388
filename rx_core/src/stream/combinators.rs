// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `flat_map` and the parallel combinators: `race`, `merge`, `par_sequence[_n]`,
//! `par_traverse`, `par_zip`/`par_zip3`, `par_flat_map` (§4.7.2-§4.7.3).
//!
//! Concurrency here is plain `tokio::spawn` over the ambient runtime, not the
//! [`Scheduler`] passed in - the scheduler handle is threaded through so nested
//! subscriptions see the same ticker/parallelism hint, but spawning a stream's future
//! is `tokio::spawn`, matching how [`crate::scheduler::Scheduler::execute`] itself
//! dispatches (it wraps a sync closure; streams are async, so they go straight to the
//! runtime that's already backing every other suspension point in this crate).

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::scheduler::Scheduler;
use crate::semaphore::Semaphore;

use super::event::{DynObserver, Observer, RxError, RxEvent, RxResult};
use super::produce::{BoxFuture, Produce, Stream};

struct SharedObserver<B> {
    downstream: Arc<Mutex<DynObserver<B>>>,
}

impl<B: Send> SharedObserver<B> {
    fn emit(&self, event: RxEvent<B>) -> RxResult {
        self.downstream
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .on_event(event)
    }
}

/// Forwards `OnNext`/`OnError` from one participant of a fan-out into a shared
/// downstream; `OnCompletion` of a single participant is swallowed here - the fan-out
/// owner decides when *all* participants finishing means the downstream completes.
struct ForwardingObserver<B> {
    shared: SharedObserver<B>,
}

impl<B: Send> Observer<B> for ForwardingObserver<B> {
    fn on_event(&mut self, event: RxEvent<B>) -> RxResult {
        match event {
            RxEvent::OnNext(b) => self.shared.emit(RxEvent::OnNext(b)),
            RxEvent::OnError(e) => self.shared.emit(RxEvent::OnError(e)),
            RxEvent::OnCompletion => RxResult::Continue,
        }
    }
}

struct FlatMapOuter<A, B> {
    f: Arc<dyn Fn(A) -> Stream<B> + Send + Sync>,
    scheduler: Arc<Scheduler>,
    shared: SharedObserver<B>,
    outstanding: Arc<AtomicUsize>,
    terminated: Arc<AtomicBool>,
    limiter: Option<Arc<Semaphore>>,
}

impl<A: Send + 'static, B: Send + 'static> Observer<A> for FlatMapOuter<A, B> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        match event {
            RxEvent::OnNext(a) => {
                let inner = (self.f)(a);
                self.outstanding.fetch_add(1, Ordering::SeqCst);
                let shared = SharedObserver {
                    downstream: Arc::clone(&self.shared.downstream),
                };
                let outstanding = Arc::clone(&self.outstanding);
                let terminated = Arc::clone(&self.terminated);
                let scheduler = Arc::clone(&self.scheduler);
                let limiter = self.limiter.clone();
                tokio::spawn(async move {
                    if let Some(limiter) = &limiter {
                        let _ = limiter.acquire().await;
                    }
                    let observer = Box::new(ForwardingObserver { shared: SharedObserver {
                        downstream: Arc::clone(&shared.downstream),
                    }});
                    inner.run(scheduler, observer).await;
                    if let Some(limiter) = &limiter {
                        limiter.release();
                    }
                    if outstanding.fetch_sub(1, Ordering::SeqCst) == 1 && !terminated.swap(true, Ordering::SeqCst) {
                        let _ = shared.emit(RxEvent::OnCompletion);
                    }
                });
                RxResult::Continue
            }
            RxEvent::OnError(e) => {
                if !self.terminated.swap(true, Ordering::SeqCst) {
                    let _ = self.shared.emit(RxEvent::OnError(e));
                }
                RxResult::Stop
            }
            RxEvent::OnCompletion => {
                if self.outstanding.fetch_sub(1, Ordering::SeqCst) == 1 && !self.terminated.swap(true, Ordering::SeqCst) {
                    let _ = self.shared.emit(RxEvent::OnCompletion);
                }
                RxResult::Continue
            }
        }
    }
}

struct FlatMapProducer<A, B> {
    source: Stream<A>,
    f: Arc<dyn Fn(A) -> Stream<B> + Send + Sync>,
    parallelism: Option<usize>,
}

impl<A: Send + 'static, B: Send + 'static> Produce<B> for FlatMapProducer<A, B> {
    fn subscribe(self: Arc<Self>, scheduler: Arc<Scheduler>, observer: DynObserver<B>) -> BoxFuture<'static, ()> {
        let limiter = self.parallelism.map(|n| Arc::new(Semaphore::new(i64::try_from(n).unwrap_or(1))));
        let outer = FlatMapOuter {
            f: Arc::clone(&self.f),
            scheduler: Arc::clone(&scheduler),
            shared: SharedObserver {
                downstream: Arc::new(Mutex::new(observer)),
            },
            outstanding: Arc::new(AtomicUsize::new(1)),
            terminated: Arc::new(AtomicBool::new(false)),
            limiter,
        };
        self.source.run(scheduler, Box::new(outer))
    }
}

impl<A: Send + 'static> Stream<A> {
    /// §4.7.2 `flat_map(f)`: subscribes a fresh inner stream per upstream value,
    /// unbounded concurrency, forwarding every inner emission downstream; completes
    /// once the source and every spawned inner stream have completed.
    #[must_use]
    pub fn flat_map<B: Send + 'static>(self, f: impl Fn(A) -> Stream<B> + Send + Sync + 'static) -> Stream<B> {
        Stream::from_producer(FlatMapProducer {
            source: self,
            f: Arc::new(f),
            parallelism: None,
        })
    }

    /// §4.7.3 `par_flat_map(p)(f)`: like [`flat_map`][Self::flat_map], with inner-stream
    /// concurrency bounded to `p` via a [`Semaphore`].
    #[must_use]
    pub fn par_flat_map<B: Send + 'static>(
        self,
        parallelism: usize,
        f: impl Fn(A) -> Stream<B> + Send + Sync + 'static,
    ) -> Stream<B> {
        Stream::from_producer(FlatMapProducer {
            source: self,
            f: Arc::new(f),
            parallelism: Some(parallelism.max(1)),
        })
    }
}

struct MergeProducer<A> {
    sources: Vec<Stream<A>>,
}

impl<A: Send + 'static> Produce<A> for MergeProducer<A> {
    fn subscribe(self: Arc<Self>, scheduler: Arc<Scheduler>, observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let shared = SharedObserver {
                downstream: Arc::new(Mutex::new(observer)),
            };
            let outstanding = Arc::new(AtomicUsize::new(self.sources.len()));
            let terminated = Arc::new(AtomicBool::new(false));
            if self.sources.is_empty() {
                let _ = shared.emit(RxEvent::OnCompletion);
                return;
            }
            let mut handles = Vec::with_capacity(self.sources.len());
            for source in &self.sources {
                let source = source.clone();
                let scheduler = Arc::clone(&scheduler);
                let downstream = Arc::clone(&shared.downstream);
                let outstanding = Arc::clone(&outstanding);
                let terminated = Arc::clone(&terminated);
                handles.push(tokio::spawn(async move {
                    let observer = Box::new(ForwardingObserver {
                        shared: SharedObserver {
                            downstream: Arc::clone(&downstream),
                        },
                    });
                    source.run(scheduler, observer).await;
                    if outstanding.fetch_sub(1, Ordering::SeqCst) == 1 && !terminated.swap(true, Ordering::SeqCst) {
                        let _ = SharedObserver { downstream }.emit(RxEvent::OnCompletion);
                    }
                }));
            }
            for handle in handles {
                let _ = handle.await;
            }
        })
    }
}

/// §4.7.3 `merge(streams)`: interleaves emissions from every stream; order between
/// streams is unspecified.
#[must_use]
pub fn merge<A: Send + 'static>(sources: Vec<Stream<A>>) -> Stream<A> { Stream::from_producer(MergeProducer { sources }) }

struct RaceProducer<A> {
    sources: Vec<Stream<A>>,
}

impl<A: Send + 'static> Produce<A> for RaceProducer<A> {
    fn subscribe(self: Arc<Self>, scheduler: Arc<Scheduler>, observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let shared = SharedObserver {
                downstream: Arc::new(Mutex::new(observer)),
            };
            if self.sources.is_empty() {
                let _ = shared.emit(RxEvent::OnCompletion);
                return;
            }
            let winner = Arc::new(AtomicBool::new(false));
            let mut handles = Vec::with_capacity(self.sources.len());
            for source in &self.sources {
                let source = source.clone();
                let scheduler = Arc::clone(&scheduler);
                let downstream = Arc::clone(&shared.downstream);
                let winner = Arc::clone(&winner);
                handles.push(tokio::spawn(async move {
                    let observer = Box::new(FirstOnlyObserver {
                        shared: SharedObserver { downstream },
                        winner,
                    });
                    source.run(scheduler, observer).await;
                }));
            }
            for handle in handles {
                let _ = handle.await;
            }
        })
    }
}

struct FirstOnlyObserver<A> {
    shared: SharedObserver<A>,
    winner: Arc<AtomicBool>,
}

impl<A: Send> Observer<A> for FirstOnlyObserver<A> {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult {
        if self.winner.swap(true, Ordering::SeqCst) {
            // Someone else already won the race; this participant is a loser and its
            // remaining emissions are discarded (the real cancellation already happened
            // because downstream returned `Stop` the moment the winner was decided).
            return RxResult::Stop;
        }
        match event {
            RxEvent::OnNext(a) => {
                let result = self.shared.emit(RxEvent::OnNext(a));
                let _ = self.shared.emit(RxEvent::OnCompletion);
                let _ = result;
                RxResult::Stop
            }
            RxEvent::OnError(e) => {
                let _ = self.shared.emit(RxEvent::OnError(e));
                RxResult::Stop
            }
            RxEvent::OnCompletion => {
                let _ = self.shared.emit(RxEvent::OnCompletion);
                RxResult::Stop
            }
        }
    }
}

/// §4.7.3 `race(streams)`: the first stream to produce any event wins; every other
/// participant's subsequent emissions are discarded (cancellation, in the absence of a
/// true preemptive cancel, is "nobody is listening anymore").
#[must_use]
pub fn race<A: Send + 'static>(sources: Vec<Stream<A>>) -> Stream<A> { Stream::from_producer(RaceProducer { sources }) }

struct ParSequenceProducer<A> {
    sources: Vec<Stream<A>>,
    parallelism: Option<usize>,
}

impl<A: Send + 'static> Produce<Vec<A>> for ParSequenceProducer<A> {
    fn subscribe(self: Arc<Self>, scheduler: Arc<Scheduler>, mut observer: DynObserver<Vec<A>>) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let n = self.sources.len();
            if n == 0 {
                let _ = observer.on_event(RxEvent::OnNext(Vec::new()));
                let _ = observer.on_event(RxEvent::OnCompletion);
                return;
            }
            let limiter = self
                .parallelism
                .map(|p| Arc::new(Semaphore::new(i64::try_from(p.max(1)).unwrap_or(1))));
            let slots: Arc<Mutex<Vec<Option<A>>>> = Arc::new(Mutex::new((0..n).map(|_| None).collect()));
            let first_error: Arc<Mutex<Option<Arc<RxError>>>> = Arc::new(Mutex::new(None));
            // §4.7.3: a failing participant cancels the others. There's no preemptive
            // task cancellation here (same caveat as `race`) - this flag is checked at
            // every emission a participant's own observer sees, so a sibling stops
            // consuming further events from its source as soon as it next yields one,
            // rather than running all the way to its own natural completion.
            let cancelled = Arc::new(AtomicBool::new(false));
            let mut handles = Vec::with_capacity(n);
            for (index, source) in self.sources.iter().cloned().enumerate() {
                let scheduler = Arc::clone(&scheduler);
                let slots = Arc::clone(&slots);
                let first_error = Arc::clone(&first_error);
                let limiter = limiter.clone();
                let cancelled = Arc::clone(&cancelled);
                handles.push(tokio::spawn(async move {
                    if let Some(limiter) = &limiter {
                        let _ = limiter.acquire().await;
                    }
                    if cancelled.load(Ordering::SeqCst) {
                        if let Some(limiter) = &limiter {
                            limiter.release();
                        }
                        return;
                    }
                    let result: Arc<Mutex<Option<Result<A, Arc<RxError>>>>> = Arc::new(Mutex::new(None));
                    let result2 = Arc::clone(&result);
                    let cancelled2 = Arc::clone(&cancelled);
                    let observer = Box::new(super::event::observer_fn(move |event| {
                        if cancelled2.load(Ordering::SeqCst) {
                            return RxResult::Stop;
                        }
                        match event {
                            RxEvent::OnNext(v) => {
                                *result2.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Ok(v));
                                RxResult::Continue
                            }
                            RxEvent::OnError(e) => {
                                cancelled2.store(true, Ordering::SeqCst);
                                *result2.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = Some(Err(e));
                                RxResult::Stop
                            }
                            RxEvent::OnCompletion => RxResult::Continue,
                        }
                    }));
                    source.run(scheduler, Box::new(observer)).await;
                    if let Some(limiter) = &limiter {
                        limiter.release();
                    }
                    match result.lock().unwrap_or_else(std::sync::PoisonError::into_inner).take() {
                        Some(Ok(value)) => {
                            slots.lock().unwrap_or_else(std::sync::PoisonError::into_inner)[index] = Some(value);
                        }
                        Some(Err(e)) => {
                            first_error
                                .lock()
                                .unwrap_or_else(std::sync::PoisonError::into_inner)
                                .get_or_insert(e);
                        }
                        None => {
                            first_error
                                .lock()
                                .unwrap_or_else(std::sync::PoisonError::into_inner)
                                .get_or_insert(Arc::new(RxError::message("par_sequence participant produced no value")));
                        }
                    }
                }));
            }
            for handle in handles {
                let _ = handle.await;
            }
            if let Some(error) = first_error.lock().unwrap_or_else(std::sync::PoisonError::into_inner).take() {
                // §9 Open Questions: on failure, the result vector is only valid on full
                // success - we don't attempt to recover the partially-filled slots.
                let _ = observer.on_event(RxEvent::OnError(error));
                return;
            }
            let values: Vec<A> = slots
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .drain(..)
                .map(|slot| slot.expect("checked first_error is None, so every slot was filled"))
                .collect();
            let _ = observer.on_event(RxEvent::OnNext(values));
            let _ = observer.on_event(RxEvent::OnCompletion);
        })
    }
}

/// §4.7.3 `par_sequence(xs)`: run every stream concurrently, collect all results in
/// input order. On the first error, the first error is surfaced and every other
/// participant is cancelled: a participant not yet started skips its source entirely,
/// and one already running stops consuming further events from it at its next emission
/// (cooperative, not preemptive - see the `cancelled` flag below).
#[must_use]
pub fn par_sequence<A: Send + 'static>(sources: Vec<Stream<A>>) -> Stream<Vec<A>> {
    Stream::from_producer(ParSequenceProducer {
        sources,
        parallelism: None,
    })
}

/// §4.7.3 `par_sequence_n(p, xs)`: as [`par_sequence`], with concurrency bounded to `p`.
#[must_use]
pub fn par_sequence_n<A: Send + 'static>(parallelism: usize, sources: Vec<Stream<A>>) -> Stream<Vec<A>> {
    Stream::from_producer(ParSequenceProducer {
        sources,
        parallelism: Some(parallelism.max(1)),
    })
}

/// §4.7.3 `par_traverse(xs)(f)`: map then [`par_sequence`].
#[must_use]
pub fn par_traverse<T, A: Send + 'static>(items: Vec<T>, f: impl Fn(T) -> Stream<A>) -> Stream<Vec<A>> {
    par_sequence(items.into_iter().map(f).collect())
}

/// §4.7.3 `par_zip(a, b)`: run two single-valued streams concurrently, combine as a
/// tuple. Each input stream is expected to emit exactly one value (see
/// [`super::fiber::Fiber`] for how "last value before completion" is defined).
#[must_use]
pub fn par_zip<A: Send + 'static, B: Send + 'static>(a: Stream<A>, b: Stream<B>) -> Stream<(A, B)> {
    let a = a.map(Either2::Left);
    let b = b.map(Either2::Right);
    par_sequence(vec![a, b]).map(|mut results: Vec<Either2<A, B>>| {
        let second = results.pop().expect("par_zip always produces two results");
        let first = results.pop().expect("par_zip always produces two results");
        match (first, second) {
            (Either2::Left(a), Either2::Right(b)) => (a, b),
            _ => unreachable!("par_zip orders its two streams left-then-right"),
        }
    })
}

enum Either2<A, B> {
    Left(A),
    Right(B),
}

enum Either3<A, B, C> {
    A(A),
    B(B),
    C(C),
}

/// §4.7.3 `par_zip3(a, b, c)`.
#[must_use]
pub fn par_zip3<A: Send + 'static, B: Send + 'static, C: Send + 'static>(
    a: Stream<A>,
    b: Stream<B>,
    c: Stream<C>,
) -> Stream<(A, B, C)> {
    let a = a.map(Either3::A);
    let b = b.map(Either3::B);
    let c = c.map(Either3::C);
    par_sequence(vec![a, b, c]).map(|mut results: Vec<Either3<A, B, C>>| {
        let third = results.pop().expect("par_zip3 always produces three results");
        let second = results.pop().expect("par_zip3 always produces three results");
        let first = results.pop().expect("par_zip3 always produces three results");
        match (first, second, third) {
            (Either3::A(a), Either3::B(b), Either3::C(c)) => (a, b, c),
            _ => unreachable!("par_zip3 orders its three streams in call order"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::event::observer_fn;
    use crate::stream::sources::{empty, sequence, single};

    fn scheduler() -> Arc<Scheduler> { Scheduler::default_pool() }

    async fn collect<A: Send + 'static>(stream: Stream<A>) -> Vec<A> {
        let collected = Arc::new(Mutex::new(Vec::new()));
        let collected2 = Arc::clone(&collected);
        stream
            .run(
                scheduler(),
                Box::new(observer_fn(move |event| {
                    if let RxEvent::OnNext(v) = event {
                        collected2.lock().unwrap().push(v);
                    }
                    RxResult::Continue
                })),
            )
            .await;
        Arc::try_unwrap(collected).unwrap().into_inner().unwrap()
    }

    #[tokio::test]
    async fn flat_map_forwards_every_inner_emission() {
        let out = collect(sequence(vec![1, 2]).flat_map(|n| sequence(vec![n, n * 10]))).await;
        let mut sorted = out;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 10, 20]);
    }

    #[tokio::test]
    async fn merge_of_empty_list_completes_immediately() {
        let out: Vec<i32> = collect(merge(vec![])).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn merge_interleaves_all_sources() {
        let out = collect(merge(vec![sequence(vec![1, 2]), sequence(vec![3, 4])])).await;
        let mut sorted = out;
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn race_surfaces_single_winner() {
        let out = collect(race(vec![single(1), empty()])).await;
        assert_eq!(out, vec![1]);
    }

    #[tokio::test]
    async fn par_sequence_preserves_input_order() {
        let out = collect(par_sequence(vec![single(1), single(2), single(3)])).await;
        assert_eq!(out, vec![vec![1, 2, 3]]);
    }

    #[tokio::test]
    async fn par_sequence_surfaces_first_error() {
        let failing = super::super::sources::exception::<i32>(RxError::message("boom"));
        let out = Arc::new(Mutex::new(Vec::new()));
        let out2 = Arc::clone(&out);
        par_sequence(vec![single(1), failing])
            .run(
                scheduler(),
                Box::new(observer_fn(move |event| {
                    out2.lock().unwrap().push(format!("{event:?}"));
                    RxResult::Continue
                })),
            )
            .await;
        assert!(out.lock().unwrap().iter().any(|e| e.contains("OnError")));
    }

    #[tokio::test]
    async fn par_zip_combines_tuple() {
        let out = collect(par_zip(single(1), single("a"))).await;
        assert_eq!(out, vec![(1, "a")]);
    }

    #[tokio::test]
    async fn par_zip3_combines_triple() {
        let out = collect(par_zip3(single(1), single("a"), single(true))).await;
        assert_eq!(out, vec![(1, "a", true)]);
    }

    #[tokio::test]
    async fn par_flat_map_bounds_concurrency() {
        use std::sync::atomic::AtomicUsize;
        let concurrent = Arc::new(AtomicUsize::new(0));
        let max_concurrent = Arc::new(AtomicUsize::new(0));
        let items: Vec<i32> = (0..6).collect();
        let concurrent2 = Arc::clone(&concurrent);
        let max_concurrent2 = Arc::clone(&max_concurrent);
        let out = collect(sequence(items).par_flat_map(2, move |n| {
            let concurrent = Arc::clone(&concurrent2);
            let max_concurrent = Arc::clone(&max_concurrent2);
            super::super::sources::from_future(move || {
                let concurrent = Arc::clone(&concurrent);
                let max_concurrent = Arc::clone(&max_concurrent);
                async move {
                    let now = concurrent.fetch_add(1, Ordering::SeqCst) + 1;
                    max_concurrent.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                    concurrent.fetch_sub(1, Ordering::SeqCst);
                    Ok::<i32, RxError>(n)
                }
            })
        }))
        .await;
        assert_eq!(out.len(), 6);
        assert!(max_concurrent.load(Ordering::SeqCst) <= 2);
    }
}
