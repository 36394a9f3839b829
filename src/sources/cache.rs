//! In-memory LRU page cache with in-flight request sharing.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use lru::LruCache;

use super::FetchCapability;
use crate::state::{Entity, FetchResult, QueryParameters};

/// Shared handle to a fetch that is still running.
type InFlight = Shared<BoxFuture<'static, FetchResult>>;

/// Mutable cache bookkeeping guarded by one mutex.
struct CacheState {
    /// Completed successful pages, most recently used first.
    lru: LruCache<QueryParameters, Vec<Entity>>,
    /// Fetches that have been issued but not resolved yet.
    in_flight: HashMap<QueryParameters, InFlight>,
}

/// What: Lock the cache state, recovering from a poisoned mutex.
///
/// Details:
/// - The state is plain data; a panic elsewhere cannot leave it half-updated
///   in a way that matters for correctness, so the guard is reused.
fn lock(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    state
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Caching wrapper around another [`FetchCapability`].
///
/// - Successful pages are kept in an LRU keyed by [`QueryParameters`].
/// - Identical concurrent requests share one underlying fetch.
/// - Errors are never cached, so asking again retries.
pub struct CachedSource<S> {
    /// Wrapped capability.
    inner: Arc<S>,
    /// Cache state; `None` when caching is disabled (capacity 0).
    state: Option<Arc<Mutex<CacheState>>>,
}

impl<S> CachedSource<S> {
    /// What: Wrap `inner` with a cache of `capacity` pages.
    ///
    /// Inputs:
    /// - `inner`: Capability to forward misses to
    /// - `capacity`: Number of pages to keep; 0 disables caching entirely
    ///
    /// Output:
    /// - New `CachedSource`.
    pub fn new(inner: S, capacity: usize) -> Self {
        let state = NonZeroUsize::new(capacity).map(|cap| {
            Arc::new(Mutex::new(CacheState {
                lru: LruCache::new(cap),
                in_flight: HashMap::new(),
            }))
        });
        Self {
            inner: Arc::new(inner),
            state,
        }
    }

    /// Wrapped capability.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of pages currently cached.
    #[must_use]
    pub fn cached_pages(&self) -> usize {
        self.state.as_ref().map_or(0, |s| lock(s).lru.len())
    }
}

impl<S: FetchCapability + 'static> FetchCapability for CachedSource<S> {
    fn fetch(&self, params: QueryParameters) -> BoxFuture<'static, FetchResult> {
        let Some(state) = &self.state else {
            return self.inner.fetch(params);
        };
        let mut guard = lock(state);
        if let Some(entities) = guard.lru.get(&params) {
            tracing::trace!(offset = params.offset, limit = params.limit, "page cache hit");
            return futures::future::ready(FetchResult::Success(entities.clone())).boxed();
        }
        if let Some(running) = guard.in_flight.get(&params) {
            tracing::debug!(
                offset = params.offset,
                limit = params.limit,
                "joining in-flight fetch"
            );
            return running.clone().boxed();
        }
        tracing::debug!(offset = params.offset, limit = params.limit, "page cache miss");
        let upstream = self.inner.fetch(params);
        let state_for_task = Arc::clone(state);
        let shared = async move {
            let result = upstream.await;
            let mut guard = lock(&state_for_task);
            guard.in_flight.remove(&params);
            if let FetchResult::Success(entities) = &result {
                guard.lru.put(params, entities.clone());
            }
            result
        }
        .boxed()
        .shared();
        guard.in_flight.insert(params, shared.clone());
        shared.boxed()
    }
}
