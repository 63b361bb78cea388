// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A capacity-bounded FIFO queue with cooperative `offer`/`take`. See [`BoundedQueue`]
//! for details.

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::oneshot;

struct OfferWaiter<A> {
    value: Option<A>,
    ack: oneshot::Sender<()>,
}

struct TakeWaiter<A> {
    deliver: oneshot::Sender<A>,
}

struct State<A> {
    capacity: usize,
    items: VecDeque<A>,
    offer_waiters: VecDeque<OfferWaiter<A>>,
    take_waiters: VecDeque<TakeWaiter<A>>,
}

/// A FIFO queue bounded at `capacity` elements, with cooperative (non-OS-blocking)
/// `offer`/`take`.
///
/// At any instant at most one of (offer-waiters, take-waiters) is non-empty: a queue
/// that's neither full nor empty has no reason for either side to wait.
pub struct BoundedQueue<A> {
    state: Mutex<State<A>>,
}

impl<A: Send + 'static> BoundedQueue<A> {
    /// # Panics
    /// Panics if `capacity` is zero - a zero-capacity queue can never hold an item.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedQueue capacity must be positive");
        Self {
            state: Mutex::new(State {
                capacity,
                items: VecDeque::new(),
                offer_waiters: VecDeque::new(),
                take_waiters: VecDeque::new(),
            }),
        }
    }

    /// Cooperatively suspends if the queue is full; otherwise enqueues immediately
    /// (waking a waiting `take` if one is queued).
    pub async fn offer(&self, value: A) {
        enum Outcome {
            Done,
            Wait(oneshot::Receiver<()>),
        }

        let outcome = {
            let mut guard = self.lock();
            if let Some(take_waiter) = guard.take_waiters.pop_front() {
                let _ = take_waiter.deliver.send(value);
                Outcome::Done
            } else if guard.items.len() < guard.capacity {
                guard.items.push_back(value);
                Outcome::Done
            } else {
                let (tx, rx) = oneshot::channel();
                guard.offer_waiters.push_back(OfferWaiter {
                    value: Some(value),
                    ack: tx,
                });
                Outcome::Wait(rx)
            }
        };

        if let Outcome::Wait(rx) = outcome {
            rx.await.expect("offer waiter dropped without being accepted");
        }
    }

    /// Non-blocking `offer`; returns `true` iff the value was accepted immediately.
    #[must_use]
    pub fn try_offer(&self, value: A) -> bool {
        let mut guard = self.lock();
        if let Some(take_waiter) = guard.take_waiters.pop_front() {
            let _ = take_waiter.deliver.send(value);
            true
        } else if guard.items.len() < guard.capacity {
            guard.items.push_back(value);
            true
        } else {
            false
        }
    }

    /// Cooperatively suspends if the queue is empty; otherwise dequeues immediately
    /// (waking a waiting `offer` if one is queued, whose value then fills the freed
    /// slot).
    pub async fn take(&self) -> A {
        enum Outcome<A> {
            Ready(A),
            Wait(oneshot::Receiver<A>),
        }

        let outcome = {
            let mut guard = self.lock();
            if let Some(value) = guard.items.pop_front() {
                if let Some(offer_waiter) = guard.offer_waiters.pop_front() {
                    let value = offer_waiter.value.expect("offer waiter always carries a value");
                    guard.items.push_back(value);
                    let _ = offer_waiter.ack.send(());
                }
                Outcome::Ready(value)
            } else {
                let (tx, rx) = oneshot::channel();
                guard.take_waiters.push_back(TakeWaiter { deliver: tx });
                Outcome::Wait(rx)
            }
        };

        match outcome {
            Outcome::Ready(value) => value,
            Outcome::Wait(rx) => rx.await.expect("take waiter dropped without receiving a value"),
        }
    }

    #[must_use]
    pub fn try_take(&self) -> Option<A> {
        let mut guard = self.lock();
        let value = guard.items.pop_front()?;
        if let Some(offer_waiter) = guard.offer_waiters.pop_front() {
            let queued = offer_waiter.value.expect("offer waiter always carries a value");
            guard.items.push_back(queued);
            let _ = offer_waiter.ack.send(());
        }
        Some(value)
    }

    #[must_use]
    pub fn size(&self) -> usize { self.lock().items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.size() == 0 }

    #[must_use]
    pub fn is_full(&self) -> bool {
        let guard = self.lock();
        guard.items.len() >= guard.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.lock().capacity }

    fn lock(&self) -> std::sync::MutexGuard<'_, State<A>> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<A> std::fmt::Debug for BoundedQueue<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f.debug_struct("BoundedQueue")
            .field("capacity", &guard.capacity)
            .field("size", &guard.items.len())
            .field("offer_waiters", &guard.offer_waiters.len())
            .field("take_waiters", &guard.take_waiters.len())
            .finish()
    }
}
