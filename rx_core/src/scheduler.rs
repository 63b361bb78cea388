// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Task execution: immediate, delayed, and periodic scheduling, with idempotent
//! cancellation. See [`Scheduler`] for details.
//!
//! Delayed and periodic scheduling always compares against the
//! [`Ticker`][crate::ticker::Ticker] the scheduler was built with, rather than real wall
//! time directly, so tests built on a [`ManualTicker`][crate::ticker::ManualTicker] can
//! simulate delays deterministically instead of sleeping for real.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use tracing::trace;

use crate::ticker::{SystemTicker, Ticker};

/// A boxed, one-shot unit of work submitted to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Which execution strategy a [`Scheduler`] uses for [`Scheduler::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerKind {
    /// Fixed-size worker pool sized to the host's parallelism (at least 2).
    Default,
    /// Grows as needed; intended for blocking I/O that would otherwise starve the
    /// default pool.
    Blocking,
    /// Cooperative single-thread execution - the only option on platforms without
    /// threads, and what you get when the ambient Tokio runtime is `current_thread`.
    SingleThreaded,
}

/// A cancellation handle returned by [`Scheduler::schedule`] and
/// [`Scheduler::schedule_at_fixed_rate`].
///
/// Cancelling is idempotent: calling [`cancel`][Self::cancel] more than once, or after
/// the task has already run, is a no-op.
#[derive(Debug, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) { self.cancelled.store(true, Ordering::SeqCst); }

    #[must_use]
    pub fn is_cancelled(&self) -> bool { self.cancelled.load(Ordering::SeqCst) }
}

/// What a [`DelayedTask`] runs: a one-shot closure that's consumed on dispatch, or a
/// repeatable one that's re-boxed on every tick so the task can keep firing until
/// cancelled.
enum TaskBody {
    Once(Task),
    Periodic(Arc<dyn Fn() + Send + Sync>),
}

struct DelayedTask {
    deadline_nanos: i64,
    sequence: u64,
    period_nanos: Option<i64>,
    token: CancelToken,
    body: Mutex<Option<TaskBody>>,
}

impl PartialEq for DelayedTask {
    fn eq(&self, other: &Self) -> bool {
        self.deadline_nanos == other.deadline_nanos && self.sequence == other.sequence
    }
}
impl Eq for DelayedTask {}
impl PartialOrd for DelayedTask {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}
impl Ord for DelayedTask {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Earlier deadlines first, ties broken by submission order; wrapped in
        // `Reverse` at the heap call site to make `BinaryHeap` (a max-heap) behave as a
        // min-heap.
        (self.deadline_nanos, self.sequence).cmp(&(other.deadline_nanos, other.sequence))
    }
}

/// Task executor: immediate (`execute`), delayed (`schedule`), and periodic
/// (`schedule_at_fixed_rate`) submission, backed by a [`Ticker`] so delay comparisons
/// are deterministic under tests.
///
/// Built on top of the ambient Tokio runtime - [`SchedulerKind::Default`] and
/// [`SchedulerKind::SingleThreaded`] both dispatch immediate work via [`tokio::spawn`]
/// (the distinction is in how many OS threads the ambient runtime itself uses);
/// [`SchedulerKind::Blocking`] dispatches via [`tokio::task::spawn_blocking`], whose pool
/// already grows on demand.
pub struct Scheduler {
    kind: SchedulerKind,
    ticker: Arc<dyn Ticker>,
    pending: Mutex<BinaryHeap<Reverse<DelayedTaskHandle>>>,
    sequence: AtomicU64,
    wake: Arc<tokio::sync::Notify>,
    shutdown: Arc<AtomicBool>,
    driver_started: AtomicBool,
}

struct DelayedTaskHandle(Arc<DelayedTask>);
impl PartialEq for DelayedTaskHandle {
    fn eq(&self, other: &Self) -> bool { self.0 == other.0 }
}
impl Eq for DelayedTaskHandle {}
impl PartialOrd for DelayedTaskHandle {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}
impl Ord for DelayedTaskHandle {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.0.cmp(&other.0) }
}

const DELAY_QUEUE_POLL_INTERVAL: Duration = Duration::from_millis(1);

impl Scheduler {
    /// Builds a scheduler. This does **not** spawn the delay-queue driver task - that
    /// would require an ambient Tokio runtime to already be running, and a bare
    /// `Scheduler::new`/`CacheBuilder::new` (the cache holds one by default) must stay
    /// usable from plain `#[test]` functions that never touch `schedule`/
    /// `schedule_at_fixed_rate`. The driver is spawned lazily, on the first delayed or
    /// periodic submission - see [`Self::ensure_driver_started`].
    #[must_use]
    pub fn new(kind: SchedulerKind, ticker: Arc<dyn Ticker>) -> Arc<Self> {
        Arc::new(Self {
            kind,
            ticker,
            pending: Mutex::new(BinaryHeap::new()),
            sequence: AtomicU64::new(0),
            wake: Arc::new(tokio::sync::Notify::new()),
            shutdown: Arc::new(AtomicBool::new(false)),
            driver_started: AtomicBool::new(false),
        })
    }

    /// A [`SchedulerKind::Default`] scheduler backed by a real [`SystemTicker`].
    #[must_use]
    pub fn default_pool() -> Arc<Self> { Self::new(SchedulerKind::Default, SystemTicker::shared()) }

    /// The process-wide singleton default scheduler, lazily created on first use. The
    /// workspace's HTTP/MCP collaborators (§6) hold onto this handle rather than each
    /// building their own pool.
    #[must_use]
    pub fn current() -> Arc<Self> {
        static DEFAULT: OnceLock<Arc<Scheduler>> = OnceLock::new();
        Arc::clone(DEFAULT.get_or_init(Self::default_pool))
    }

    #[must_use]
    pub fn kind(&self) -> SchedulerKind { self.kind }

    #[must_use]
    pub fn parallelism(&self) -> usize {
        match self.kind {
            SchedulerKind::SingleThreaded => 1,
            SchedulerKind::Default | SchedulerKind::Blocking => std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(2)
                .max(2),
        }
    }

    /// Submits `task` for immediate execution.
    pub fn execute(&self, task: impl FnOnce() + Send + 'static) {
        match self.kind {
            SchedulerKind::Blocking => {
                tokio::task::spawn_blocking(task);
            }
            SchedulerKind::Default | SchedulerKind::SingleThreaded => {
                tokio::spawn(async move { task() });
            }
        }
    }

    /// Schedules `task` to run once, after `delay` has elapsed according to this
    /// scheduler's [`Ticker`].
    pub fn schedule(self: &Arc<Self>, delay: Duration, task: impl FnOnce() + Send + 'static) -> CancelToken {
        self.schedule_nanos(delay_to_nanos(delay), None, TaskBody::Once(Box::new(task)))
    }

    /// Schedules `task` to run after `initial_delay`, then every `period` thereafter,
    /// until cancelled.
    pub fn schedule_at_fixed_rate(
        self: &Arc<Self>,
        initial_delay: Duration,
        period: Duration,
        task: impl Fn() + Send + Sync + 'static,
    ) -> CancelToken {
        let period_nanos = delay_to_nanos(period);
        self.schedule_nanos(
            delay_to_nanos(initial_delay),
            Some(period_nanos),
            TaskBody::Periodic(Arc::new(task)),
        )
    }

    /// Spawns the background delay-queue driver the first time this scheduler is asked
    /// to run a delayed or periodic task, not a moment before. Idempotent and safe to
    /// call from every `schedule*` entry point.
    fn ensure_driver_started(self: &Arc<Self>) {
        if !self.driver_started.swap(true, Ordering::SeqCst) {
            self.spawn_delay_queue_driver();
        }
    }

    fn schedule_nanos(self: &Arc<Self>, delay_nanos: i64, period_nanos: Option<i64>, body: TaskBody) -> CancelToken {
        self.ensure_driver_started();
        let token = CancelToken::new();
        let deadline_nanos = self.ticker.read().saturating_add(delay_nanos);
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let delayed = Arc::new(DelayedTask {
            deadline_nanos,
            sequence,
            period_nanos,
            token: token.clone(),
            body: Mutex::new(Some(body)),
        });
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Reverse(DelayedTaskHandle(delayed)));
        self.wake.notify_one();
        token
    }

    /// Stops accepting new delayed-queue wakeups. In-flight tasks already dispatched to
    /// the Tokio runtime still run to completion; this only drains the delay queue's
    /// background driver.
    pub fn shutdown(&self) { self.shutdown.store(true, Ordering::SeqCst); }

    fn spawn_delay_queue_driver(self: &Arc<Self>) {
        let scheduler = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                if scheduler.shutdown.load(Ordering::SeqCst) {
                    return;
                }
                let due = scheduler.drain_due_tasks();
                for handle in due {
                    scheduler.dispatch_due_task(handle);
                }
                tokio::select! {
                    () = tokio::time::sleep(DELAY_QUEUE_POLL_INTERVAL) => {}
                    () = scheduler.wake.notified() => {}
                }
            }
        });
    }

    fn drain_due_tasks(&self) -> Vec<Arc<DelayedTask>> {
        let now = self.ticker.read();
        let mut guard = self.pending.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut due = Vec::new();
        while let Some(Reverse(DelayedTaskHandle(top))) = guard.peek() {
            if top.deadline_nanos > now {
                break;
            }
            let Some(Reverse(DelayedTaskHandle(top))) = guard.pop() else {
                break;
            };
            due.push(top);
        }
        due
    }

    fn dispatch_due_task(self: &Arc<Self>, delayed: Arc<DelayedTask>) {
        if delayed.token.is_cancelled() {
            trace!("scheduled task skipped: cancelled before it ran");
            return;
        }
        let Some(body) = delayed
            .body
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
        else {
            return;
        };

        match body {
            TaskBody::Once(task) => self.execute(task),
            TaskBody::Periodic(task) => {
                let recurring = Arc::clone(&task);
                self.execute(move || recurring());
                self.rearm(&delayed, task);
            }
        }
    }

    /// Re-queues a periodic task's next tick. Runs after dispatch, so a `cancel()` that
    /// lands between ticks is observed the next time this task comes due.
    fn rearm(self: &Arc<Self>, delayed: &Arc<DelayedTask>, task: Arc<dyn Fn() + Send + Sync>) {
        let Some(period_nanos) = delayed.period_nanos else {
            return;
        };
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let next = Arc::new(DelayedTask {
            deadline_nanos: delayed.deadline_nanos.saturating_add(period_nanos),
            sequence,
            period_nanos: Some(period_nanos),
            token: delayed.token.clone(),
            body: Mutex::new(Some(TaskBody::Periodic(task))),
        });
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Reverse(DelayedTaskHandle(next)));
        self.wake.notify_one();
    }
}

fn delay_to_nanos(delay: Duration) -> i64 { i64::try_from(delay.as_nanos()).unwrap_or(i64::MAX) }

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("kind", &self.kind)
            .field("parallelism", &self.parallelism())
            .finish()
    }
}
