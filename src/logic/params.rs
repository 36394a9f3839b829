//! Page size configuration and offset/limit derivation.

use crate::state::{PageState, QueryParameters};

/// Default number of entities fetched per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Default primary language id (Japanese in the species dataset).
pub const DEFAULT_PRIMARY_LANGUAGE_ID: i64 = 1;
/// Default secondary language id (English in the species dataset).
pub const DEFAULT_SECONDARY_LANGUAGE_ID: i64 = 9;

/// Listing constants fixed for the lifetime of one controller.
///
/// - `page_size` controls how many entities are fetched per page and is also
///   the threshold of the next-page heuristic (a full page enables "Next").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Entities per page; always positive.
    pub page_size: u32,
    /// Language id used for the primary label.
    pub primary_language_id: i64,
    /// Language id used for the secondary label.
    pub secondary_language_id: i64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            primary_language_id: DEFAULT_PRIMARY_LANGUAGE_ID,
            secondary_language_id: DEFAULT_SECONDARY_LANGUAGE_ID,
        }
    }
}

/// What: Map a page index and page size onto query parameters.
///
/// Inputs:
/// - `page_index`: Zero-based page index
/// - `page_size`: Entities per page
///
/// Output:
/// - `QueryParameters { limit: page_size, offset: page_index * page_size }`.
///
/// Details:
/// - The multiplication saturates so an absurd page index cannot wrap into a
///   small offset.
#[must_use]
pub fn derive_query_parameters(page_index: u64, page_size: u32) -> QueryParameters {
    QueryParameters {
        limit: page_size,
        offset: page_index.saturating_mul(u64::from(page_size)),
    }
}

/// Query parameters for the page `page` currently points at.
#[must_use]
pub fn params_for(page: &PageState, config: &ListConfig) -> QueryParameters {
    derive_query_parameters(page.page_index(), config.page_size)
}
