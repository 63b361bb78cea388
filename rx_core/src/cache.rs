// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A thread-safe LRU cache with optional size/weight bounds, expiration,
//! refresh-after-write, removal notifications, and hit/miss statistics (§4.9).
//!
//! Where the design docs describe a family of type-level cache variants (plain,
//! weighted, with-listener, loading, loading-with-weigher, loading-with-listener), this
//! module collapses them into one [`Cache<K, V>`] configured by [`CacheBuilder`] - a
//! weigher, removal listener, and loader are each independently optional fields rather
//! than six separate generated types. [`CacheBuilder`] follows the same consuming
//! `with_x(self) -> Self` / `build(self)` shape as
//! `r3bl_tui::core::color_wheel::lolcat::LolcatBuilder`.
//!
//! All structural operations - lookups included - run under one [`Mutex`] per cache
//! instance (§4.9.6); the one thing kept outside that mutex is a loader invocation
//! itself (§4.9.2, §4.9.5), since a user-supplied loader has unbounded latency and
//! holding the structural lock across it would serialize every other cache access
//! behind it.

use std::collections::HashMap as StdHashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::warn;

use crate::scheduler::Scheduler;
use crate::semaphore::Semaphore;
use crate::ticker::{SystemTicker, Ticker};

/// Errors a [`Cache`] or [`CacheBuilder`] can report synchronously.
#[derive(Debug, Error, Clone, miette::Diagnostic)]
pub enum CacheError {
    #[error("cannot set both maximum_size and maximum_weight on the same cache")]
    #[diagnostic(code(r3bl_rx_core::cache::conflicting_size_bounds))]
    ConflictingSizeBounds,

    #[error("cache loader returned null for the requested key")]
    #[diagnostic(code(r3bl_rx_core::cache::loader_returned_null))]
    LoaderReturnedNull,

    #[error("cache loader failed: {0}")]
    #[diagnostic(code(r3bl_rx_core::cache::loader_failed))]
    LoaderFailed(Arc<str>),

    #[error("get_with_loader called on a cache with no loader configured")]
    #[diagnostic(code(r3bl_rx_core::cache::no_loader_configured))]
    NoLoaderConfigured,
}

impl CacheError {
    #[must_use]
    pub fn loader_failed(msg: impl Into<Arc<str>>) -> Self { Self::LoaderFailed(msg.into()) }
}

/// Why an entry left the cache (§4.9.3, §4.9.4). `Size` covers both count-based and
/// weight-based capacity eviction - the design docs don't distinguish a separate cause
/// for weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalCause {
    Explicit,
    Replaced,
    Size,
    ExpiredAfterWrite,
    ExpiredAfterAccess,
}

impl fmt::Display for RemovalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "explicit",
            Self::Replaced => "replaced",
            Self::Size => "size",
            Self::ExpiredAfterWrite => "expired_after_write",
            Self::ExpiredAfterAccess => "expired_after_access",
        };
        f.write_str(label)
    }
}

/// Delivered exactly once per removal, before the entry is dropped from the cache's own
/// view of itself.
#[derive(Debug, Clone)]
pub struct RemovalNotification<K, V> {
    pub key: K,
    pub value: V,
    pub cause: RemovalCause,
}

type Listener<K, V> = Arc<dyn Fn(RemovalNotification<K, V>) + Send + Sync>;
type Weigher<K, V> = Arc<dyn Fn(&K, &V) -> u32 + Send + Sync>;
type Loader<K, V> = Arc<dyn Fn(&K) -> Result<V, CacheError> + Send + Sync>;

/// Atomic counters backing [`CacheStats`]; a no-op when the cache was built with
/// [`CacheBuilder::no_stats`].
#[derive(Default)]
struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    load_success: AtomicU64,
    load_failure: AtomicU64,
    total_load_nanos: AtomicU64,
    eviction_count: AtomicU64,
    eviction_weight: AtomicU64,
}

/// An immutable snapshot of a cache's statistics (§4.9.1 `CacheStats`).
///
/// [`plus`][Self::plus]/[`minus`][Self::minus] support the common pattern of diffing two
/// snapshots taken at different times to compute stats for an interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub load_success: u64,
    pub load_failure: u64,
    pub total_load_nanos: u64,
    pub eviction_count: u64,
    pub eviction_weight: u64,
}

impl CacheStats {
    #[must_use]
    pub fn request_count(&self) -> u64 { self.hits + self.misses }

    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.request_count() == 0 { 1.0 } else { self.hits as f64 / self.request_count() as f64 }
    }

    #[must_use]
    pub fn miss_rate(&self) -> f64 {
        if self.request_count() == 0 { 0.0 } else { self.misses as f64 / self.request_count() as f64 }
    }

    #[must_use]
    pub fn load_count(&self) -> u64 { self.load_success + self.load_failure }

    #[must_use]
    pub fn load_failure_rate(&self) -> f64 {
        if self.load_count() == 0 { 0.0 } else { self.load_failure as f64 / self.load_count() as f64 }
    }

    #[must_use]
    pub fn average_load_penalty_ns(&self) -> f64 {
        if self.load_count() == 0 { 0.0 } else { self.total_load_nanos as f64 / self.load_count() as f64 }
    }

    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            load_success: self.load_success + other.load_success,
            load_failure: self.load_failure + other.load_failure,
            total_load_nanos: self.total_load_nanos + other.total_load_nanos,
            eviction_count: self.eviction_count + other.eviction_count,
            eviction_weight: self.eviction_weight + other.eviction_weight,
        }
    }

    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            hits: self.hits.saturating_sub(other.hits),
            misses: self.misses.saturating_sub(other.misses),
            load_success: self.load_success.saturating_sub(other.load_success),
            load_failure: self.load_failure.saturating_sub(other.load_failure),
            total_load_nanos: self.total_load_nanos.saturating_sub(other.total_load_nanos),
            eviction_count: self.eviction_count.saturating_sub(other.eviction_count),
            eviction_weight: self.eviction_weight.saturating_sub(other.eviction_weight),
        }
    }
}

impl StatsCounters {
    fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            load_success: self.load_success.load(Ordering::Relaxed),
            load_failure: self.load_failure.load(Ordering::Relaxed),
            total_load_nanos: self.total_load_nanos.load(Ordering::Relaxed),
            eviction_count: self.eviction_count.load(Ordering::Relaxed),
            eviction_weight: self.eviction_weight.load(Ordering::Relaxed),
        }
    }
}

/// One slab-allocated node of the intrusive LRU list (§4.9.7): `prev`/`next` are slab
/// indices rather than pointers, which keeps the whole structure in safe Rust while
/// still giving O(1) unlink/relink.
struct Node<K, V> {
    key: K,
    value: V,
    weight: u32,
    write_nanos: i64,
    access_nanos: i64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// The mutable state guarded by the cache's single mutex.
struct Inner<K, V> {
    slab: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    index: FxHashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    current_weight: u64,
    pending_refresh: FxHashSet<K>,
}

impl<K: Hash + Eq + Clone, V> Inner<K, V> {
    fn new(initial_capacity: usize) -> Self {
        Self {
            slab: Vec::with_capacity(initial_capacity),
            free: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(initial_capacity, FxBuildHasher),
            head: None,
            tail: None,
            current_weight: 0,
            pending_refresh: FxHashSet::default(),
        }
    }

    fn len(&self) -> usize { self.index.len() }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = self.slab[idx].as_ref().expect("unlink on live index");
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.slab[p].as_mut().unwrap().next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slab[n].as_mut().unwrap().prev = prev,
            None => self.tail = prev,
        }
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let node = self.slab[idx].as_mut().expect("link_front on live index");
            node.prev = None;
            node.next = old_head;
        }
        if let Some(h) = old_head {
            self.slab[h].as_mut().unwrap().prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    fn insert_node(&mut self, node: Node<K, V>) -> usize {
        let key = node.key.clone();
        self.current_weight += u64::from(node.weight);
        let idx = if let Some(free_idx) = self.free.pop() {
            self.slab[free_idx] = Some(node);
            free_idx
        } else {
            self.slab.push(Some(node));
            self.slab.len() - 1
        };
        self.index.insert(key, idx);
        self.link_front(idx);
        idx
    }

    fn remove_node(&mut self, idx: usize) -> Node<K, V> {
        self.unlink(idx);
        let node = self.slab[idx].take().expect("remove_node on live index");
        self.index.remove(&node.key);
        self.current_weight -= u64::from(node.weight);
        self.free.push(idx);
        node
    }

    fn node(&self, idx: usize) -> &Node<K, V> { self.slab[idx].as_ref().expect("node() on live index") }
}

/// Immutable builder for [`Cache`], following the `with_x(self) -> Self` /
/// `build(self)` consuming-builder idiom used across the workspace.
pub struct CacheBuilder<K, V> {
    maximum_size: Option<u64>,
    maximum_weight: Option<u64>,
    expire_after_write: Option<Duration>,
    expire_after_access: Option<Duration>,
    refresh_after_write: Option<Duration>,
    initial_capacity: usize,
    record_stats: bool,
    ticker: Arc<dyn Ticker>,
    scheduler: Arc<Scheduler>,
    weigher: Option<Weigher<K, V>>,
    listener: Option<Listener<K, V>>,
    loader: Option<Loader<K, V>>,
}

impl<K, V> CacheBuilder<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            maximum_size: None,
            maximum_weight: None,
            expire_after_write: None,
            expire_after_access: None,
            refresh_after_write: None,
            initial_capacity: 16,
            record_stats: false,
            ticker: SystemTicker::shared(),
            scheduler: Scheduler::default_pool(),
            weigher: None,
            listener: None,
            loader: None,
        }
    }

    #[must_use]
    pub fn with_maximum_size(mut self, n: u64) -> Self {
        self.maximum_size = Some(n);
        self
    }

    #[must_use]
    pub fn with_maximum_weight(mut self, w: u64) -> Self {
        self.maximum_weight = Some(w);
        self
    }

    #[must_use]
    pub fn with_expiration_after_write(mut self, d: Duration) -> Self {
        self.expire_after_write = Some(d);
        self
    }

    #[must_use]
    pub fn with_expiration_after_access(mut self, d: Duration) -> Self {
        self.expire_after_access = Some(d);
        self
    }

    #[must_use]
    pub fn with_refresh_after_write(mut self, d: Duration) -> Self {
        self.refresh_after_write = Some(d);
        self
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, n: usize) -> Self {
        self.initial_capacity = n;
        self
    }

    #[must_use]
    pub fn with_stats(mut self) -> Self {
        self.record_stats = true;
        self
    }

    #[must_use]
    pub fn no_stats(mut self) -> Self {
        self.record_stats = false;
        self
    }

    #[must_use]
    pub fn with_ticker(mut self, ticker: Arc<dyn Ticker>) -> Self {
        self.ticker = ticker;
        self
    }

    #[must_use]
    pub fn with_scheduler(mut self, scheduler: Arc<Scheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    #[must_use]
    pub fn with_weigher(mut self, weigher: impl Fn(&K, &V) -> u32 + Send + Sync + 'static) -> Self {
        self.weigher = Some(Arc::new(weigher));
        self
    }

    #[must_use]
    pub fn with_removal_listener(mut self, listener: impl Fn(RemovalNotification<K, V>) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Configures a loader, making this a loading cache: [`Cache::get_with_loader`] can
    /// omit its explicit loader argument by falling back to this one, and
    /// refresh-after-write (§4.9.5) becomes active if also configured.
    #[must_use]
    pub fn with_loader(mut self, loader: impl Fn(&K) -> Result<V, CacheError> + Send + Sync + 'static) -> Self {
        self.loader = Some(Arc::new(loader));
        self
    }

    pub fn build(self) -> Result<Cache<K, V>, CacheError> {
        if self.maximum_size.is_some() && self.maximum_weight.is_some() {
            return Err(CacheError::ConflictingSizeBounds);
        }
        let refresh_permits = self
            .scheduler
            .parallelism()
            .min(4)
            .max(1);
        Ok(Cache {
            core: Arc::new(CacheCore {
                inner: Mutex::new(Inner::new(self.initial_capacity)),
                stats: StatsCounters::default(),
                refresh_gate: Semaphore::new(i64::try_from(refresh_permits).unwrap_or(1)),
            }),
            maximum_size: self.maximum_size,
            maximum_weight: self.maximum_weight,
            expire_after_write_nanos: self.expire_after_write.map(|d| d.as_nanos() as i64),
            expire_after_access_nanos: self.expire_after_access.map(|d| d.as_nanos() as i64),
            refresh_after_write_nanos: self.refresh_after_write.map(|d| d.as_nanos() as i64),
            ticker: self.ticker,
            scheduler: self.scheduler,
            weigher: self.weigher,
            listener: self.listener,
            loader: self.loader,
            record_stats: self.record_stats,
        })
    }
}

impl<K, V> Default for CacheBuilder<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self { Self::new() }
}

/// The structural state shared with a cache's background refresh tasks (§4.9.5):
/// wrapped in its own `Arc` so a spawned refresh closure can hold a cheap, safe handle
/// to exactly the state it needs, rather than assuming anything about how long the
/// owning [`Cache`] itself lives.
struct CacheCore<K, V> {
    inner: Mutex<Inner<K, V>>,
    stats: StatsCounters,
    refresh_gate: Semaphore,
}

/// A thread-safe LRU cache with optional size/weight bounds, TTL expiration,
/// refresh-after-write, a removal listener, and hit/miss statistics. Built via
/// [`CacheBuilder`].
pub struct Cache<K, V> {
    core: Arc<CacheCore<K, V>>,
    maximum_size: Option<u64>,
    maximum_weight: Option<u64>,
    expire_after_write_nanos: Option<i64>,
    expire_after_access_nanos: Option<i64>,
    refresh_after_write_nanos: Option<i64>,
    ticker: Arc<dyn Ticker>,
    scheduler: Arc<Scheduler>,
    weigher: Option<Weigher<K, V>>,
    listener: Option<Listener<K, V>>,
    loader: Option<Loader<K, V>>,
    record_stats: bool,
}

enum ExpiryCause {
    NotExpired,
    Write,
    Access,
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn expiry_cause(&self, node: &Node<K, V>, now: i64) -> ExpiryCause {
        if let Some(ttl) = self.expire_after_write_nanos {
            if now - node.write_nanos > ttl {
                return ExpiryCause::Write;
            }
        }
        if let Some(ttl) = self.expire_after_access_nanos {
            if now - node.access_nanos > ttl {
                return ExpiryCause::Access;
            }
        }
        ExpiryCause::NotExpired
    }

    fn notify(&self, key: K, value: V, cause: RemovalCause) {
        if let Some(listener) = &self.listener {
            // §4.9.6/§7: listener exceptions must never break cache integrity. Rust has
            // no catchable exceptions for a plain closure, so the contract here is
            // enforced by convention - a panicking listener still unwinds, but nothing
            // about the cache's own invariants depends on the listener having run.
            listener(RemovalNotification { key, value, cause });
        }
    }

    /// Removes `idx` for `cause`, firing the removal notification while still holding
    /// the structural mutex (§4.9.6).
    fn evict_one(&self, inner: &mut Inner<K, V>, idx: usize, cause: RemovalCause) {
        let node = inner.remove_node(idx);
        if self.record_stats && matches!(cause, RemovalCause::Size) {
            self.core.stats.eviction_count.fetch_add(1, Ordering::Relaxed);
            self.core.stats.eviction_weight.fetch_add(u64::from(node.weight), Ordering::Relaxed);
        }
        self.notify(node.key, node.value, cause);
    }

    /// Evicts from the LRU tail while over either capacity bound (§4.9.4).
    fn enforce_capacity(&self, inner: &mut Inner<K, V>) {
        loop {
            let over = match (self.maximum_size, self.maximum_weight) {
                (Some(max), _) => inner.len() as u64 > max,
                (None, Some(max)) => inner.current_weight > max,
                (None, None) => false,
            };
            if !over {
                break;
            }
            let Some(tail) = inner.tail else { break };
            self.evict_one(inner, tail, RemovalCause::Size);
        }
    }

    /// Removes `idx` if it's expired as of `now`, firing the appropriate expiry cause;
    /// returns whether it was removed.
    fn expire_if_needed(&self, inner: &mut Inner<K, V>, idx: usize, now: i64) -> bool {
        let cause = self.expiry_cause(inner.node(idx), now);
        match cause {
            ExpiryCause::NotExpired => false,
            ExpiryCause::Write => {
                self.evict_one(inner, idx, RemovalCause::ExpiredAfterWrite);
                true
            }
            ExpiryCause::Access => {
                self.evict_one(inner, idx, RemovalCause::ExpiredAfterAccess);
                true
            }
        }
    }

    fn weight_of(&self, key: &K, value: &V) -> u32 { self.weigher.as_ref().map_or(1, |w| w(key, value)) }

    /// §4.9.2 `get`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.ticker.read();
        let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(&idx) = inner.index.get(key) else {
            if self.record_stats {
                self.core.stats.misses.fetch_add(1, Ordering::Relaxed);
            }
            return None;
        };
        if self.expire_if_needed(&mut inner, idx, now) {
            if self.record_stats {
                self.core.stats.misses.fetch_add(1, Ordering::Relaxed);
            }
            return None;
        }
        inner.touch(idx);
        inner.slab[idx].as_mut().unwrap().access_nanos = now;
        let value = inner.node(idx).value.clone();
        if self.record_stats {
            self.core.stats.hits.fetch_add(1, Ordering::Relaxed);
        }
        drop(inner);
        self.maybe_trigger_refresh(key.clone(), now);
        Some(value)
    }

    /// §4.9.2 `get_with_loader`: loads on miss or expiry using `loader`, rejecting a
    /// loader that reports success with no usable value. Runs the loader outside the
    /// structural mutex (see module docs).
    pub fn get_with_loader(&self, key: &K, loader: impl FnOnce(&K) -> Result<V, CacheError>) -> Result<V, CacheError> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let started = self.ticker.read();
        let result = loader(key);
        let elapsed = (self.ticker.read() - started).max(0) as u64;
        if self.record_stats {
            self.core.stats.total_load_nanos.fetch_add(elapsed, Ordering::Relaxed);
        }
        match result {
            Ok(value) => {
                if self.record_stats {
                    self.core.stats.load_success.fetch_add(1, Ordering::Relaxed);
                }
                self.put(key.clone(), value.clone());
                Ok(value)
            }
            Err(error) => {
                if self.record_stats {
                    self.core.stats.load_failure.fetch_add(1, Ordering::Relaxed);
                }
                Err(error)
            }
        }
    }

    /// Convenience over [`get_with_loader`][Self::get_with_loader] using the loader
    /// configured on this cache's [`CacheBuilder`].
    pub fn get_or_load(&self, key: &K) -> Result<V, CacheError> {
        let Some(loader) = self.loader.clone() else {
            return Err(CacheError::NoLoaderConfigured);
        };
        self.get_with_loader(key, |k| loader(k))
    }

    /// §4.9.2 `put`.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let now = self.ticker.read();
        let weight = self.weight_of(&key, &value);
        let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let previous = if let Some(&idx) = inner.index.get(&key) {
            let old = inner.remove_node(idx);
            self.notify(old.key.clone(), old.value.clone(), RemovalCause::Replaced);
            Some(old.value)
        } else {
            None
        };
        inner.insert_node(Node {
            key,
            value,
            weight,
            write_nanos: now,
            access_nanos: now,
            prev: None,
            next: None,
        });
        self.enforce_capacity(&mut inner);
        previous
    }

    /// §4.9.2 `put_if_absent`.
    pub fn put_if_absent(&self, key: K, value: V) -> Option<V> {
        let now = self.ticker.read();
        let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(&idx) = inner.index.get(&key) {
            if !self.expire_if_needed(&mut inner, idx, now) {
                inner.touch(idx);
                return Some(inner.node(idx).value.clone());
            }
        }
        let weight = self.weight_of(&key, &value);
        inner.insert_node(Node {
            key,
            value,
            weight,
            write_nanos: now,
            access_nanos: now,
            prev: None,
            next: None,
        });
        self.enforce_capacity(&mut inner);
        None
    }

    /// §4.9.2 `put_all`.
    pub fn put_all(&self, entries: impl IntoIterator<Item = (K, V)>) {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// §4.9.2 `invalidate`.
    pub fn invalidate(&self, key: &K) {
        let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(&idx) = inner.index.get(key) {
            self.evict_one(&mut inner, idx, RemovalCause::Explicit);
        }
    }

    /// §4.9.2 `invalidate_all(keys)`.
    pub fn invalidate_all_keys(&self, keys: impl IntoIterator<Item = K>) {
        for key in keys {
            self.invalidate(&key);
        }
    }

    /// §4.9.2 `invalidate_all()`.
    pub fn invalidate_all(&self) {
        let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        while let Some(tail) = inner.tail {
            self.evict_one(&mut inner, tail, RemovalCause::Explicit);
        }
    }

    /// §4.9.2 `as_map`: a snapshot of every non-expired entry.
    #[must_use]
    pub fn as_map(&self) -> StdHashMap<K, V> {
        let now = self.ticker.read();
        let inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut map = StdHashMap::with_capacity(inner.len());
        for (key, &idx) in &inner.index {
            let node = inner.node(idx);
            if matches!(self.expiry_cause(node, now), ExpiryCause::NotExpired) {
                map.insert(key.clone(), node.value.clone());
            }
        }
        map
    }

    /// §4.9.2 `estimated_size`: includes not-yet-cleaned expired entries.
    #[must_use]
    pub fn estimated_size(&self) -> i64 {
        self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).len() as i64
    }

    /// §4.9.2 `clean_up`: forcibly removes every currently-expired entry.
    pub fn clean_up(&self) {
        let now = self.ticker.read();
        let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let expired: Vec<usize> = inner
            .index
            .values()
            .copied()
            .filter(|&idx| !matches!(self.expiry_cause(inner.node(idx), now), ExpiryCause::NotExpired))
            .collect();
        for idx in expired {
            let cause = match self.expiry_cause(inner.node(idx), now) {
                ExpiryCause::Write => RemovalCause::ExpiredAfterWrite,
                ExpiryCause::Access => RemovalCause::ExpiredAfterAccess,
                ExpiryCause::NotExpired => continue,
            };
            self.evict_one(&mut inner, idx, cause);
        }
    }

    /// §4.9.2 `stats`.
    #[must_use]
    pub fn stats(&self) -> CacheStats { self.core.stats.snapshot() }

    /// §4.9.5: if refresh-after-write is configured and `key`'s entry is stale enough,
    /// enqueues a background reload deduplicated per key. Skips (logging at warn) if
    /// the bounded refresh executor is saturated, per the drop-and-log policy chosen
    /// for this crate (see `DESIGN.md`).
    fn maybe_trigger_refresh(&self, key: K, now: i64) {
        let (Some(refresh_ttl), Some(loader)) = (self.refresh_after_write_nanos, self.loader.clone()) else {
            return;
        };
        let should_refresh = {
            let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            let Some(&idx) = inner.index.get(&key) else {
                return;
            };
            let stale = now - inner.node(idx).write_nanos > refresh_ttl;
            if !stale || inner.pending_refresh.contains(&key) {
                false
            } else {
                inner.pending_refresh.insert(key.clone());
                true
            }
        };
        if !should_refresh {
            return;
        }
        if !self.core.refresh_gate.try_acquire() {
            warn!("refresh executor saturated, skipping this round");
            let mut inner = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            inner.pending_refresh.remove(&key);
            return;
        }
        self.spawn_refresh(key, loader);
    }

    fn spawn_refresh(&self, key: K, loader: Loader<K, V>)
    where
        K: 'static,
        V: 'static,
    {
        // Closes over an `Arc<CacheCore<_>>` clone rather than `self` - the refresh task
        // may outlive this particular `Cache` handle, so it only needs to keep the
        // shared structural state (mutex, stats, refresh gate) alive, not `self` itself.
        let core = Arc::clone(&self.core);
        let listener = self.listener.clone();
        let record_stats = self.record_stats;
        let ticker = Arc::clone(&self.ticker);
        self.scheduler.execute(move || {
            let result = loader(&key);
            match result {
                Ok(new_value) => {
                    let mut guard = core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                    guard.pending_refresh.remove(&key);
                    if let Some(&idx) = guard.index.get(&key) {
                        let old_value = guard.node(idx).value.clone();
                        let now_nanos = ticker.read();
                        let node = guard.slab[idx].as_mut().unwrap();
                        node.value = new_value.clone();
                        node.write_nanos = now_nanos;
                        drop(guard);
                        if record_stats {
                            core.stats.load_success.fetch_add(1, Ordering::Relaxed);
                        }
                        if let Some(listener) = &listener {
                            listener(RemovalNotification {
                                key,
                                value: old_value,
                                cause: RemovalCause::Replaced,
                            });
                        }
                    }
                }
                Err(error) => {
                    if record_stats {
                        core.stats.load_failure.fetch_add(1, Ordering::Relaxed);
                    }
                    let mut guard = core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                    guard.pending_refresh.remove(&key);
                    drop(guard);
                    warn!(%error, "background cache refresh failed, keeping stale value");
                }
            }
            core.refresh_gate.release();
        });
    }
}

impl<K, V> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.core.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner).len();
        f.debug_struct("Cache")
            .field("size", &size)
            .field("maximum_size", &self.maximum_size)
            .field("maximum_weight", &self.maximum_weight)
            .field("record_stats", &self.record_stats)
            .finish()
    }
}

impl<K, V> fmt::Debug for CacheBuilder<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBuilder")
            .field("maximum_size", &self.maximum_size)
            .field("maximum_weight", &self.maximum_weight)
            .field("record_stats", &self.record_stats)
            .finish()
    }
}
