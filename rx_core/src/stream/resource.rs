// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Resource`]: acquire/release bracket with LIFO finalizers (§4.7.5).

use std::future::Future;
use std::sync::Arc;

use super::event::RxError;

type AcquireFn<A> = Box<dyn FnOnce() -> super::produce::BoxFuture<'static, Result<A, RxError>> + Send>;
type ReleaseFn<A> = Box<dyn FnOnce(&A) -> super::produce::BoxFuture<'static, Result<(), RxError>> + Send>;
type FinalizerFn<A> = Box<dyn FnOnce(&A) -> super::produce::BoxFuture<'static, Result<(), RxError>> + Send>;

/// A description of how to acquire a value, release it, and run any number of extra
/// finalizers - all run LIFO, all run even if an earlier one fails, with later failures
/// attached as [`RxError::Suppressed`] causes on the first (§7 "Resource cleanup error").
///
/// `Resource` is built once via [`Resource::new`]/[`with_finalizer`][Self::with_finalizer]
/// and consumed by [`use_with`][Self::use_with] - acquire, hand the body a `&A`, then run
/// release and finalizers regardless of how the body finished.
pub struct Resource<A> {
    acquire: AcquireFn<A>,
    release: ReleaseFn<A>,
    finalizers: Vec<FinalizerFn<A>>,
}

impl<A: Send + Sync + 'static> Resource<A> {
    pub fn new<Acq, AcqFut, Rel, RelFut>(acquire: Acq, release: Rel) -> Self
    where
        Acq: FnOnce() -> AcqFut + Send + 'static,
        AcqFut: Future<Output = Result<A, RxError>> + Send + 'static,
        Rel: FnOnce(&A) -> RelFut + Send + 'static,
        RelFut: Future<Output = Result<(), RxError>> + Send + 'static,
    {
        Self {
            acquire: Box::new(move || Box::pin(acquire())),
            release: Box::new(move |a| Box::pin(release(a))),
            finalizers: Vec::new(),
        }
    }

    /// Registers an additional finalizer, run after `release`, in the order added being
    /// reversed at cleanup time (last-registered runs first - LIFO, per §4.7.5).
    #[must_use]
    pub fn with_finalizer<Fin, FinFut>(mut self, finalizer: Fin) -> Self
    where
        Fin: FnOnce(&A) -> FinFut + Send + 'static,
        FinFut: Future<Output = Result<(), RxError>> + Send + 'static,
    {
        self.finalizers.push(Box::new(move |a| Box::pin(finalizer(a))));
        self
    }

    /// Acquires the resource, runs `body` with a reference to it, then releases it and
    /// runs every finalizer - in that LIFO order - regardless of whether `body` (or an
    /// earlier cleanup step) succeeded.
    ///
    /// The body takes `&A` rather than `A` so cleanup can still observe the value after
    /// the body returns, without requiring `A: Clone`.
    pub async fn use_with<B, F, Fut>(self, body: F) -> Result<B, RxError>
    where
        F: FnOnce(&A) -> Fut,
        Fut: Future<Output = Result<B, RxError>>,
    {
        let value = (self.acquire)().await?;

        let body_result = body(&value).await;

        let mut cleanup_steps: Vec<FinalizerFn<A>> = self.finalizers;
        cleanup_steps.reverse();
        cleanup_steps.insert(0, self.release);

        let mut suppressed = Vec::new();
        for step in cleanup_steps {
            if let Err(error) = step(&value).await {
                suppressed.push(Arc::new(error));
            }
        }

        match body_result {
            Ok(value) if suppressed.is_empty() => Ok(value),
            Ok(_) => {
                let mut rest = suppressed;
                let primary = rest.remove(0);
                Err((*primary).clone().with_suppressed(rest))
            }
            Err(primary) => Err(primary.with_suppressed(suppressed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn events() -> Arc<Mutex<Vec<&'static str>>> { Arc::new(Mutex::new(Vec::new())) }

    #[tokio::test]
    async fn release_and_finalizers_run_in_lifo_order_on_success() {
        let log = events();
        let log_a = Arc::clone(&log);
        let log_b = Arc::clone(&log);
        let log_c = Arc::clone(&log);

        let resource = Resource::new(
            move || async move { Ok::<_, RxError>(1) },
            move |_| {
                let log = Arc::clone(&log_a);
                async move {
                    log.lock().unwrap().push("release");
                    Ok(())
                }
            },
        )
        .with_finalizer(move |_| {
            let log = Arc::clone(&log_b);
            async move {
                log.lock().unwrap().push("finalizer-1");
                Ok(())
            }
        })
        .with_finalizer(move |_| {
            let log = Arc::clone(&log_c);
            async move {
                log.lock().unwrap().push("finalizer-2");
                Ok(())
            }
        });

        let result = resource.use_with(|value| async move { Ok::<_, RxError>(*value) }).await;
        assert_eq!(result.unwrap(), 1);
        assert_eq!(*log.lock().unwrap(), vec!["finalizer-2", "finalizer-1", "release"]);
    }

    #[tokio::test]
    async fn cleanup_runs_even_when_body_fails() {
        let log = events();
        let log_a = Arc::clone(&log);
        let resource = Resource::new(move || async move { Ok::<_, RxError>(()) }, move |_| {
            let log = Arc::clone(&log_a);
            async move {
                log.lock().unwrap().push("release");
                Ok(())
            }
        });

        let result = resource
            .use_with(|_| async move { Err::<(), _>(RxError::message("body failed")) })
            .await;
        assert!(result.is_err());
        assert_eq!(*log.lock().unwrap(), vec!["release"]);
    }

    #[tokio::test]
    async fn release_failure_is_suppressed_under_body_error() {
        let resource = Resource::new(move || async move { Ok::<_, RxError>(()) }, move |_| async move {
            Err(RxError::message("release failed"))
        });

        let result = resource
            .use_with(|_| async move { Err::<(), _>(RxError::message("body failed")) })
            .await;
        let err = result.unwrap_err();
        let RxError::Suppressed { primary, suppressed } = &err else {
            panic!("expected Suppressed, got {err:?}");
        };
        assert!(matches!(**primary, RxError::Message(ref m) if &**m == "body failed"));
        assert_eq!(suppressed.len(), 1);
    }

    #[tokio::test]
    async fn cleanup_failure_alone_surfaces_as_primary_error() {
        let resource = Resource::new(move || async move { Ok::<_, RxError>(()) }, move |_| async move {
            Err(RxError::message("release failed"))
        });

        let result = resource.use_with(|_| async move { Ok::<_, RxError>(7) }).await;
        assert!(result.is_err());
    }
}
