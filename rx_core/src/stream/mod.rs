// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The reactive stream core (§4.7): a lazy, composable description of an asynchronous
//! sequence of values, built from a small closed set of producers and operators, driven
//! to completion by subscribing an [`Observer`].
//!
//! Module layout:
//! - [`event`] - the `OnNext`/`OnError`/`OnCompletion` protocol and `RxResult` demand.
//! - [`produce`] - [`Stream`] itself and the [`Produce`] trait every node implements.
//! - [`sources`] - `single`, `empty`, `exception`, `sequence`, `from_future`, `Variable`.
//! - [`operators`] - `map`, `filter`, `transform`, `recover`, `buffer`, backpressure.
//! - [`combinators`] - `flat_map`, `race`, `merge`, `par_sequence`, `par_zip`, ...
//! - [`fiber`] - [`Fiber`], a backgrounded subscription you can poll/cancel/join.
//! - [`resource`] - [`Resource`], an acquire/release/finalizer bracket.
//! - [`runner`] - test/diagnostic helpers (`run_to_vec`, `RecordingObserver`).

pub mod combinators;
pub mod event;
pub mod fiber;
pub mod operators;
pub mod produce;
pub mod resource;
pub mod runner;
pub mod sources;

pub use combinators::{merge, par_sequence, par_sequence_n, par_traverse, par_zip, par_zip3, race};
pub use event::{DynObserver, FnObserver, Observer, RxError, RxEvent, RxResult, observer_fn};
pub use fiber::Fiber;
pub use operators::OverflowStrategy;
pub use produce::{Produce, Stream};
pub use resource::Resource;
pub use runner::{RecordingObserver, RunOutcome, run_to_vec};
pub use sources::{Variable, empty, exception, from_future, sequence, single};
