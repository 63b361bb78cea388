// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A lock-free, CAS-based reference cell wrapping one value of any type. See
//! [`AtomicCell`] for details.

use std::sync::Arc;

use arc_swap::ArcSwap;

/// A lock-free read-modify-write cell around a single value of type `A`.
///
/// Built on [`arc_swap::ArcSwap`] rather than a hand-rolled `AtomicPtr` - reclaiming a
/// replaced value the moment a swap wins is only sound if nothing else can still be
/// dereferencing the old pointer, and a plain CAS loop over raw pointers can't promise
/// that: a reader that loaded the old pointer before a racing writer's swap can still be
/// mid-`clone()` when that writer frees it. `ArcSwap` defers reclamation until every
/// outstanding [`Guard`][arc_swap::Guard] for the old value has been dropped, which is
/// exactly the guarantee [`get`][Self::get] and [`modify`][Self::modify] need under
/// concurrent access. [`update`][Self::update] and [`modify`][Self::modify] retry their
/// closure until the swap succeeds, so the closure must be pure: it may run more than
/// once per logical update if another thread wins the race in between.
///
/// ```
/// use r3bl_rx_core::AtomicCell;
///
/// let cell = AtomicCell::new(1);
/// cell.update(|n| n + 1);
/// assert_eq!(cell.get(), 2);
/// ```
pub struct AtomicCell<A> {
    inner: ArcSwap<A>,
}

impl<A> AtomicCell<A> {
    #[must_use]
    pub fn new(initial: A) -> Self {
        Self {
            inner: ArcSwap::new(Arc::new(initial)),
        }
    }

    /// Reads the current value. Clones it out from behind the guard.
    #[must_use]
    pub fn get(&self) -> A
    where
        A: Clone,
    {
        let guard = self.inner.load();
        (**guard).clone()
    }

    /// Replaces the value, returning the previous one.
    pub fn get_and_set(&self, new_value: A) -> A
    where
        A: Clone,
    {
        let old = self.inner.swap(Arc::new(new_value));
        Arc::try_unwrap(old).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Stores a new value, discarding the previous one.
    pub fn set(&self, new_value: A) {
        self.inner.store(Arc::new(new_value));
    }

    /// Retries `f(current) -> new` until the CAS succeeds, then returns the old value.
    pub fn get_and_update(&self, mut f: impl FnMut(&A) -> A) -> A
    where
        A: Clone,
    {
        self.modify(|old| {
            let new = f(old);
            (new, old.clone())
        })
    }

    /// Retries `f(current) -> new` until the CAS succeeds, then returns the new value.
    pub fn update_and_get(&self, mut f: impl FnMut(&A) -> A) -> A
    where
        A: Clone,
    {
        self.modify(|old| {
            let new = f(old);
            (new.clone(), new)
        })
    }

    /// Convenience alias for [`update_and_get`][Self::update_and_get] that discards the
    /// result, matching the `update` name used throughout the design docs.
    pub fn update(&self, f: impl FnMut(&A) -> A)
    where
        A: Clone,
    {
        drop(self.update_and_get(f));
    }

    /// The general CAS-retry primitive: `f` computes a new value and an arbitrary
    /// result `B` from the current value; the loop retries until its swap wins, then
    /// returns `B`. [`update`][Self::update] and friends are built on this.
    ///
    /// Delegates to [`ArcSwap::rcu`], which re-reads the live value and re-invokes `f`
    /// itself on every lost race, rather than a manual load/compute/compare-exchange
    /// loop - that's what keeps this sound: the candidate `f` builds is always computed
    /// from a value `rcu` has confirmed is still current at the moment of its own
    /// compare-and-swap, never from a pointer that could have been freed out from under
    /// us in between.
    pub fn modify<B>(&self, mut f: impl FnMut(&A) -> (A, B)) -> B {
        let mut result = None;
        self.inner.rcu(|current: &Arc<A>| {
            let (new_value, out) = f(current);
            result = Some(out);
            new_value
        });
        result.expect("rcu invokes its closure at least once before returning")
    }

    /// Swaps in `new` only if the current value equals `expected`. Returns whether the
    /// swap happened.
    pub fn compare_and_set(&self, expected: &A, new: A) -> bool
    where
        A: PartialEq + Clone,
    {
        // `modify`'s closure may run more than once if another thread wins a race in
        // between, so `new` must be cloned on each attempt rather than moved.
        self.modify(|current| {
            if current == expected {
                (new.clone(), true)
            } else {
                (current.clone(), false)
            }
        })
    }
}

impl<A: std::fmt::Debug + Clone> std::fmt::Debug for AtomicCell<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AtomicCell").field("value", &self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc as StdArc;
    use std::thread;

    #[test]
    fn get_and_set_roundtrip() {
        let cell = AtomicCell::new(10);
        assert_eq!(cell.get(), 10);
        cell.set(20);
        assert_eq!(cell.get(), 20);
    }

    #[test]
    fn get_and_set_returns_previous() {
        let cell = AtomicCell::new(1);
        assert_eq!(cell.get_and_set(2), 1);
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn update_applies_function() {
        let cell = AtomicCell::new(5);
        cell.update(|n| n * 2);
        assert_eq!(cell.get(), 10);
    }

    #[test]
    fn get_and_update_returns_old_update_and_get_returns_new() {
        let cell = AtomicCell::new(5);
        assert_eq!(cell.get_and_update(|n| n + 1), 5);
        assert_eq!(cell.get(), 6);
        assert_eq!(cell.update_and_get(|n| n + 1), 7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn modify_returns_custom_result() {
        let cell = AtomicCell::new(vec![1, 2, 3]);
        let len = cell.modify(|v| {
            let mut new_v = v.clone();
            new_v.push(4);
            let len = new_v.len();
            (new_v, len)
        });
        assert_eq!(len, 4);
        assert_eq!(cell.get(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn compare_and_set_succeeds_on_match() {
        let cell = AtomicCell::new(1);
        assert!(cell.compare_and_set(&1, 2));
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn compare_and_set_fails_on_mismatch() {
        let cell = AtomicCell::new(1);
        assert!(!cell.compare_and_set(&99, 2));
        assert_eq!(cell.get(), 1);
    }

    #[test]
    fn concurrent_updates_apply_exactly_once_each() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 1000;
        let cell = StdArc::new(AtomicCell::new(0i64));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let cell = StdArc::clone(&cell);
                thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        cell.update(|n| n + 1);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(cell.get(), (THREADS * PER_THREAD) as i64);
    }

    /// Regression test for the use-after-free the hand-rolled `AtomicPtr` version had:
    /// one thread holds a long-lived reference to the current value (via `get`, which
    /// clones through an `ArcSwap` guard) while many other threads race `update` against
    /// the same cell. Under the old implementation this could dereference freed memory;
    /// under `ArcSwap` every reader sees a value that stays alive until it's done with
    /// it, so this just needs to run without crashing (e.g. under Miri/ASan) and land on
    /// a count consistent with every update applying exactly once.
    #[test]
    fn concurrent_readers_and_writers_never_observe_freed_memory() {
        const WRITERS: usize = 6;
        const PER_WRITER: usize = 2000;
        let cell = StdArc::new(AtomicCell::new(0i64));

        let mut handles = Vec::new();
        for _ in 0..WRITERS {
            let cell = StdArc::clone(&cell);
            handles.push(thread::spawn(move || {
                for _ in 0..PER_WRITER {
                    cell.update(|n| n + 1);
                }
            }));
        }
        for _ in 0..4 {
            let cell = StdArc::clone(&cell);
            handles.push(thread::spawn(move || {
                for _ in 0..PER_WRITER {
                    let _ = cell.get();
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(cell.get(), (WRITERS * PER_WRITER) as i64);
    }
}
