//! Fetch capabilities: the seam between the list controller and the network.
//!
//! A capability turns [`QueryParameters`] into a [`FetchResult`]. It must be
//! idempotent for identical parameters and safe to call repeatedly; failures
//! are reported as [`FetchResult::Error`] rather than as `Err`, so callers never
//! have to handle a second failure channel.

use futures::future::BoxFuture;

use crate::state::{FetchResult, QueryParameters};

mod cache;
mod graphql;

pub use cache::CachedSource;
pub use graphql::{DEFAULT_ENDPOINT, GraphqlSource, SPECIES_QUERY};

/// Result type alias for source plumbing that is later folded into a [`FetchResult`].
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Asynchronous page fetcher injected into the controller runtime.
pub trait FetchCapability: Send + Sync {
    /// What: Fetch one page.
    ///
    /// Inputs:
    /// - `params`: Offset/limit for the wanted page
    ///
    /// Output:
    /// - Future resolving to the page outcome; never panics, never `Err`.
    fn fetch(&self, params: QueryParameters) -> BoxFuture<'static, FetchResult>;
}

impl<T: FetchCapability + ?Sized> FetchCapability for std::sync::Arc<T> {
    fn fetch(&self, params: QueryParameters) -> BoxFuture<'static, FetchResult> {
        (**self).fetch(params)
    }
}
