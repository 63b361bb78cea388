// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Stream`]: the lazy, cheap-to-clone handle over an operator tree, and [`Produce`],
//! the single trait every node in that tree implements.
//!
//! The design docs ask for a tagged-sum operator tree interpreted by one runner, to
//! avoid virtual dispatch over node kinds (§9 DESIGN NOTES). Rust's type system makes a
//! single non-generic enum impossible here - `map`/`flat_map` change the element type at
//! each node - so the tree is instead a small, closed set of node *structs* (one per
//! §4.7.2/§4.7.3 operator, see `sources.rs`/`operators.rs`/`combinators.rs`), each
//! implementing [`Produce`]. The one dynamic dispatch this costs happens once per
//! `subscribe` call, not once per emission, which is the property DESIGN NOTES actually
//! cares about.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::scheduler::Scheduler;

use super::event::DynObserver;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One node of a stream's operator tree: given a scheduler and an observer, produces
/// events into that observer until it reports `Stop` or the node reaches a terminal
/// event.
pub trait Produce<A>: Send + Sync {
    fn subscribe(self: Arc<Self>, scheduler: Arc<Scheduler>, observer: DynObserver<A>) -> BoxFuture<'static, ()>;
}

/// A lazy, declarative description of a stream computation.
///
/// Cloning a `Stream` clones an `Arc` - cheap, and shares the same underlying operator
/// tree. Nothing runs until [`run`][Self::run] (or [`Fiber::start`][super::fiber::Fiber::start])
/// subscribes an observer.
pub struct Stream<A> {
    pub(crate) inner: Arc<dyn Produce<A>>,
}

impl<A> Clone for Stream<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Send + 'static> Stream<A> {
    pub(crate) fn from_producer(producer: impl Produce<A> + 'static) -> Self {
        Self {
            inner: Arc::new(producer),
        }
    }

    /// Subscribes `observer` and drives this stream's operator tree to completion (or
    /// until the observer says `Stop`). Nothing runs until the returned future is
    /// polled - this method itself has no side effect.
    pub fn run(&self, scheduler: Arc<Scheduler>, observer: DynObserver<A>) -> BoxFuture<'static, ()> {
        Arc::clone(&self.inner).subscribe(scheduler, observer)
    }

    /// Sugar for [`Fiber::start`][super::fiber::Fiber::start].
    pub fn into_fiber(self, scheduler: Arc<Scheduler>) -> super::fiber::Fiber<A> {
        super::fiber::Fiber::start(self, scheduler)
    }
}

impl<A> std::fmt::Debug for Stream<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("Stream") }
}
