//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#![cfg(test)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::sources::FetchCapability;
use crate::state::{Entity, FetchResult, Label, QueryParameters};

/// What: Build a page of species-like entities.
///
/// Inputs:
/// - `first_id`: Id of the first entity
/// - `count`: Number of entities
///
/// Output:
/// - Entities with a Japanese and an English label each.
pub fn species_page(first_id: i64, count: usize) -> Vec<Entity> {
    (first_id..)
        .take(count)
        .map(|id| Entity {
            id,
            labels: vec![
                Label::new(1, format!("ja-{id}")),
                Label::new(9, format!("en-{id}")),
            ],
        })
        .collect()
}

/// In-memory fetch capability backed by a fixed number of entities.
///
/// Counts calls so cache tests can check how often the backend was hit.
pub struct FakeSource {
    /// Total entities available.
    pub total: u64,
    /// When set, every call fails with this message.
    pub fail_with: Option<String>,
    /// Artificial latency per call.
    pub delay: Duration,
    /// Number of `fetch` calls seen.
    pub calls: Arc<AtomicUsize>,
}

impl FakeSource {
    /// What: Fake source with `total` entities and no latency.
    ///
    /// Inputs:
    /// - `total`: Number of entities the backend holds
    ///
    /// Output:
    /// - `FakeSource` that always succeeds.
    pub fn with_total(total: u64) -> Self {
        Self {
            total,
            fail_with: None,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FetchCapability for FakeSource {
    fn fetch(&self, params: QueryParameters) -> BoxFuture<'static, FetchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let total = self.total;
        let fail_with = self.fail_with.clone();
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if let Some(message) = fail_with {
                return FetchResult::Error(message);
            }
            let start = params.offset.min(total);
            let end = params.offset.saturating_add(u64::from(params.limit)).min(total);
            let count = usize::try_from(end - start).unwrap_or(0);
            let first_id = i64::try_from(start + 1).unwrap_or(i64::MAX);
            FetchResult::Success(species_page(first_id, count))
        }
        .boxed()
    }
}
