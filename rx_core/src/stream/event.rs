// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The three-event protocol (`OnNext`/`OnError`/`OnCompletion`) every stream observer
//! sees, and the demand value ([`RxResult`]) it hands back upstream. See §4.7.1 of the
//! design docs.

use std::sync::Arc;

use thiserror::Error;

/// Errors that can terminate a stream execution.
///
/// `Clone` because the same error is handed to every waiter of a [`crate::Latch`]-backed
/// [`super::fiber::Fiber`] and every queued finalizer in a [`super::resource::Resource`]
/// bracket.
#[derive(Debug, Error, Clone)]
pub enum RxError {
    /// §4.7.2 `on_backpressure_buffer(.., strategy = Error)`.
    #[error("backpressure buffer overflow at capacity {capacity}")]
    BackpressureOverflow { capacity: usize },

    /// §4.7.4: a fiber-join error whose kind is distinguishable from a regular failure.
    #[error("fiber was cancelled")]
    Cancelled,

    /// A primary failure with cleanup errors from release/finalizers attached as
    /// suppressed causes (§4.7.5, §7 "Resource cleanup error").
    #[error("{primary} (+{} suppressed cleanup error(s))", suppressed.len())]
    Suppressed {
        primary: Arc<RxError>,
        suppressed: Vec<Arc<RxError>>,
    },

    /// Catch-all for user-supplied operator failures (a `map`/`flat_map` closure, a
    /// loader, a future) that don't warrant their own variant.
    #[error("{0}")]
    Message(Arc<str>),
}

impl RxError {
    #[must_use]
    pub fn message(msg: impl Into<Arc<str>>) -> Self { Self::Message(msg.into()) }

    /// Wraps `self` as the primary cause of a suppressed-error chain, or extends an
    /// existing chain, matching §4.7.5's "LIFO, errors accumulated as suppressed".
    #[must_use]
    pub fn with_suppressed(self, mut suppressed: Vec<Arc<RxError>>) -> Self {
        if suppressed.is_empty() {
            return self;
        }
        match self {
            Self::Suppressed {
                primary,
                suppressed: mut existing,
            } => {
                existing.append(&mut suppressed);
                Self::Suppressed {
                    primary,
                    suppressed: existing,
                }
            }
            primary => Self::Suppressed {
                primary: Arc::new(primary),
                suppressed,
            },
        }
    }
}

/// One of the three events a stream execution delivers to its observer, in order:
/// any number of [`OnNext`][Self::OnNext], then exactly one of
/// [`OnError`][Self::OnError] or [`OnCompletion`][Self::OnCompletion].
#[derive(Debug, Clone)]
pub enum RxEvent<A> {
    OnNext(A),
    OnError(Arc<RxError>),
    OnCompletion,
}

/// The demand a downstream observer expresses after consuming an event.
///
/// Combine two results with [`combine`][Self::combine] (or the `&` operator): the
/// combined demand is the minimum of the two, and a [`Stop`][Self::Stop] on either side
/// wins outright (§4.7.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RxResult {
    /// Unbounded demand - the default "pull everything" mode.
    Continue,
    /// Terminal: stop delivering events; upstream must release resources.
    Stop,
    /// Zero demand, but the subscription stays alive - upstream must buffer or drop
    /// per whichever backpressure strategy is in effect.
    Paused,
    /// Demand for exactly `n` more items; once exhausted, behaves like `Paused`.
    Request(u64),
}

impl RxResult {
    /// This result's demand as a plain count, with `Continue` represented as
    /// [`u64::MAX`] so combining via `min` does the right thing.
    #[must_use]
    pub fn demand(self) -> u64 {
        match self {
            Self::Continue => u64::MAX,
            Self::Stop | Self::Paused => 0,
            Self::Request(n) => n,
        }
    }

    #[must_use]
    pub fn is_stop(self) -> bool { matches!(self, Self::Stop) }

    /// `&&` from §4.7.1: min demand, any-stop wins.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        if self.is_stop() || other.is_stop() {
            return Self::Stop;
        }
        match self.demand().min(other.demand()) {
            0 => Self::Paused,
            u64::MAX => Self::Continue,
            n => Self::Request(n),
        }
    }
}

impl std::ops::BitAnd for RxResult {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self { self.combine(rhs) }
}

/// A consumer of [`RxEvent`]s that reports its demand for more via [`RxResult`].
///
/// Implementations must be synchronous and non-blocking - suspension in this crate
/// happens at the producer side (via [`crate::Latch`], [`crate::Semaphore`], etc.), not
/// inside an observer callback.
pub trait Observer<A>: Send {
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult;
}

/// A boxed, type-erased [`Observer`] - the shape every operator actually passes around.
pub type DynObserver<A> = Box<dyn Observer<A>>;

/// Adapts a plain closure into an [`Observer`], for call sites (mostly tests) that don't
/// want to name a struct.
pub struct FnObserver<A, F> {
    f: F,
    _marker: std::marker::PhantomData<fn(A)>,
}

impl<A, F> Observer<A> for FnObserver<A, F>
where
    A: Send,
    F: FnMut(RxEvent<A>) -> RxResult + Send,
{
    fn on_event(&mut self, event: RxEvent<A>) -> RxResult { (self.f)(event) }
}

pub fn observer_fn<A, F>(f: F) -> FnObserver<A, F>
where
    A: Send,
    F: FnMut(RxEvent<A>) -> RxResult + Send,
{
    FnObserver {
        f,
        _marker: std::marker::PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_takes_minimum_demand() {
        assert_eq!(RxResult::Continue.combine(RxResult::Request(3)), RxResult::Request(3));
        assert_eq!(RxResult::Request(5).combine(RxResult::Request(2)), RxResult::Request(2));
        assert_eq!(RxResult::Continue.combine(RxResult::Continue), RxResult::Continue);
    }

    #[test]
    fn combine_any_stop_wins() {
        assert_eq!(RxResult::Stop.combine(RxResult::Continue), RxResult::Stop);
        assert_eq!(RxResult::Request(9).combine(RxResult::Stop), RxResult::Stop);
    }

    #[test]
    fn combine_zero_demand_is_paused() {
        assert_eq!(RxResult::Paused.combine(RxResult::Request(4)), RxResult::Paused);
        assert_eq!(RxResult::Request(0).combine(RxResult::Continue), RxResult::Paused);
    }

    #[test]
    fn bitand_matches_combine() {
        assert_eq!(RxResult::Request(3) & RxResult::Request(7), RxResult::Request(3));
    }

    #[test]
    fn with_suppressed_wraps_and_extends() {
        let base = RxError::message("primary");
        let once = base.with_suppressed(vec![Arc::new(RxError::message("a"))]);
        let RxError::Suppressed { suppressed, .. } = &once else {
            panic!("expected Suppressed");
        };
        assert_eq!(suppressed.len(), 1);
        let twice = once.with_suppressed(vec![Arc::new(RxError::message("b"))]);
        let RxError::Suppressed { suppressed, .. } = &twice else {
            panic!("expected Suppressed");
        };
        assert_eq!(suppressed.len(), 2);
    }
}
