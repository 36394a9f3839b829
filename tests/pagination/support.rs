//! Fake fetch capability shared by the paging tests.

use std::time::Duration;

use dexpage::sources::FetchCapability;
use dexpage::state::{Entity, FetchResult, Label, QueryParameters};
use futures::FutureExt;
use futures::future::BoxFuture;

/// In-memory listing of `total` species with optional per-offset latency and failure.
pub struct Listing {
    pub total: u64,
    pub fail_with: Option<String>,
    /// Offsets that answer only after `slow_delay`.
    pub slow_offsets: Vec<u64>,
    pub slow_delay: Duration,
}

impl Listing {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            fail_with: None,
            slow_offsets: Vec::new(),
            slow_delay: Duration::from_millis(0),
        }
    }
}

pub fn species(id: i64) -> Entity {
    Entity {
        id,
        labels: vec![
            Label::new(1, format!("ja-{id}")),
            Label::new(9, format!("en-{id}")),
        ],
    }
}

impl FetchCapability for Listing {
    fn fetch(&self, params: QueryParameters) -> BoxFuture<'static, FetchResult> {
        let fail = self.fail_with.clone();
        let delay = if self.slow_offsets.contains(&params.offset) {
            self.slow_delay
        } else {
            Duration::from_millis(0)
        };
        let end = params
            .offset
            .saturating_add(u64::from(params.limit))
            .min(self.total);
        let start = params.offset.min(end);
        async move {
            tokio::time::sleep(delay).await;
            if let Some(message) = fail {
                return FetchResult::Error(message);
            }
            let ids = (start + 1..=end).filter_map(|id| i64::try_from(id).ok());
            FetchResult::Success(ids.map(species).collect())
        }
        .boxed()
    }
}
