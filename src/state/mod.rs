//! State module: data model, page state and the application state struct.

pub mod app_state;
pub mod page;
pub mod types;

pub use app_state::AppState;
pub use page::PageState;
pub use types::{
    Entity, FetchRequest, FetchResponse, FetchResult, Label, ListItemView, QueryParameters,
    ViewModel, ViewState,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

/// Serializes tests that mutate process-wide environment variables.
#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
