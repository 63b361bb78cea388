// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A completable-once container of a success/failure result, with many cooperative
//! waiters. See [`Latch`] for details.

use std::sync::Mutex;

use tokio::sync::oneshot;

/// State machine behind a [`Latch`]: either still waiting (with a queue of registered
/// waiters to notify on completion) or terminally completed with a result.
enum State<A, E> {
    Empty(Vec<oneshot::Sender<Result<A, E>>>),
    Completed(Result<A, E>),
}

/// A container that can be completed exactly once with `Ok(A)` or `Err(E)`, after which
/// every past and future call to [`get`][Self::get] observes the same result.
///
/// Completion never blocks an OS thread: [`get`][Self::get] registers a continuation (a
/// one-shot channel) and cooperatively suspends the calling task until
/// [`complete`][Self::complete] or [`complete_error`][Self::complete_error] fires it.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use r3bl_rx_core::Latch;
/// use std::sync::Arc;
///
/// let latch: Arc<Latch<i32, String>> = Arc::new(Latch::new());
/// let waiter = {
///     let latch = Arc::clone(&latch);
///     tokio::spawn(async move { latch.get().await })
/// };
/// assert!(latch.complete(42));
/// assert_eq!(waiter.await.unwrap(), Ok(42));
/// # }
/// ```
pub struct Latch<A, E> {
    state: Mutex<State<A, E>>,
}

impl<A: Clone, E: Clone> Latch<A, E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::Empty(Vec::new())),
        }
    }

    /// Cooperatively suspends until the latch completes, then returns the result. If
    /// already completed, resolves immediately without suspending.
    pub async fn get(&self) -> Result<A, E> {
        let rx = {
            let mut guard = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            match &mut *guard {
                State::Completed(result) => return result.clone(),
                State::Empty(waiters) => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    rx
                }
            }
        };
        // The sender side is only ever dropped after sending (see `complete_with`), so
        // this can't legitimately fail; a closed channel would mean a bug upstream.
        rx.await.expect("latch waiter sender dropped without completing")
    }

    /// Returns `Some(value)` iff already completed successfully; `None` if still
    /// pending *or* completed with an error (use [`get`][Self::get] to observe errors).
    #[must_use]
    pub fn try_get(&self) -> Option<A> {
        match &*self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner) {
            State::Completed(Ok(value)) => Some(value.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(
            &*self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner),
            State::Completed(_)
        )
    }

    /// Completes the latch with a success value. Returns `true` iff this call performed
    /// the (only) transition; `false` if the latch was already completed.
    pub fn complete(&self, value: A) -> bool { self.complete_with(Ok(value)) }

    /// Completes the latch with a failure. Returns `true` iff this call performed the
    /// (only) transition; `false` if the latch was already completed.
    pub fn complete_error(&self, error: E) -> bool { self.complete_with(Err(error)) }

    fn complete_with(&self, result: Result<A, E>) -> bool {
        let waiters = {
            let mut guard = self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            match &*guard {
                State::Completed(_) => return false,
                State::Empty(_) => {
                    let State::Empty(waiters) =
                        std::mem::replace(&mut *guard, State::Completed(result.clone()))
                    else {
                        unreachable!("just matched Empty above")
                    };
                    waiters
                }
            }
        };
        for waiter in waiters {
            // A waiter that dropped its receiver (e.g. its task was cancelled) just
            // misses the notification; that's fine, nobody is listening anymore.
            let _ = waiter.send(result.clone());
        }
        true
    }
}

impl<A: Clone, E: Clone> Default for Latch<A, E> {
    fn default() -> Self { Self::new() }
}

impl<A, E> std::fmt::Debug for Latch<A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let completed = matches!(
            &*self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner),
            State::Completed(_)
        );
        f.debug_struct("Latch").field("completed", &completed).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn completes_once_and_returns_true_first_time_only() {
        let latch: Latch<i32, String> = Latch::new();
        assert!(latch.complete(1));
        assert!(!latch.complete(2));
        assert_eq!(latch.get().await, Ok(1));
    }

    #[tokio::test]
    async fn try_get_reflects_success_only() {
        let latch: Latch<i32, String> = Latch::new();
        assert_eq!(latch.try_get(), None);
        latch.complete(7);
        assert_eq!(latch.try_get(), Some(7));

        let err_latch: Latch<i32, String> = Latch::new();
        err_latch.complete_error("boom".to_string());
        assert_eq!(err_latch.try_get(), None);
        assert_eq!(err_latch.get().await, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn multiple_waiters_all_observe_same_result() {
        let latch: Arc<Latch<i32, String>> = Arc::new(Latch::new());
        let mut handles = Vec::new();
        for _ in 0..3 {
            let latch = Arc::clone(&latch);
            handles.push(tokio::spawn(async move { latch.get().await }));
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(latch.complete(42));
        for handle in handles {
            assert_eq!(handle.await.unwrap(), Ok(42));
        }
        // A subsequent complete must be a no-op and not change the observed value.
        assert!(!latch.complete(7));
        assert_eq!(latch.get().await, Ok(42));
    }

    #[tokio::test]
    async fn get_after_completion_resolves_immediately() {
        let latch: Latch<i32, String> = Latch::new();
        latch.complete(5);
        assert_eq!(latch.get().await, Ok(5));
        assert!(latch.is_completed());
    }
}
