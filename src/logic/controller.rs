//! List view controller: page state, request correlation and view-model assembly.

use crate::logic::language::select_label;
use crate::logic::params::{ListConfig, params_for};
use crate::sources::FetchCapability;
use crate::state::{
    Entity, FetchRequest, FetchResponse, FetchResult, ListItemView, PageState, ViewModel,
    ViewState,
};

/// What: Turn a fetch outcome into the state the UI renders.
///
/// Inputs:
/// - `page`: Page the outcome belongs to
/// - `config`: Listing constants (page size, language ids)
/// - `result`: Outcome of the fetch for that page
///
/// Output:
/// - `Loading` for `Pending`, `Error` with the verbatim message, or `Ready` with rows and affordances.
///
/// Details:
/// - Rows keep the source order.
/// - `can_go_next` is `true` exactly when the page came back full.
#[must_use]
pub fn build_view(page: &PageState, config: &ListConfig, result: &FetchResult) -> ViewState {
    match result {
        FetchResult::Pending => ViewState::Loading,
        FetchResult::Error(message) => ViewState::Error {
            message: message.clone(),
        },
        FetchResult::Success(entities) => {
            let items: Vec<ListItemView> = entities
                .iter()
                .map(|entity| item_view(entity, config))
                .collect();
            let can_go_next = is_full_page(items.len(), config);
            ViewState::Ready(ViewModel {
                items,
                can_go_prev: page.page_index() > 0,
                can_go_next,
            })
        }
    }
}

/// Resolve both labels of one entity.
fn item_view(entity: &Entity, config: &ListConfig) -> ListItemView {
    ListItemView {
        id: entity.id,
        primary_label: select_label(&entity.labels, config.primary_language_id)
            .map(str::to_string),
        secondary_label: select_label(&entity.labels, config.secondary_language_id)
            .map(str::to_string),
    }
}

/// `true` when `len` equals the configured page size.
fn is_full_page(len: usize, config: &ListConfig) -> bool {
    usize::try_from(config.page_size).is_ok_and(|size| size == len)
}

/// What: One-shot view computation for a page.
///
/// Inputs:
/// - `page`: Page to show
/// - `config`: Listing constants
/// - `capability`: Fetch capability to query
///
/// Output:
/// - The view state for the page once the capability resolves.
///
/// Details:
/// - Derives parameters, awaits the capability, then maps the result via [`build_view`].
/// - No retry is attempted here; retry policy belongs to the capability.
pub async fn compute_view_model<C>(
    page: &PageState,
    config: &ListConfig,
    capability: &C,
) -> ViewState
where
    C: FetchCapability + ?Sized,
{
    let params = params_for(page, config);
    tracing::debug!(
        offset = params.offset,
        limit = params.limit,
        "computing view model"
    );
    let result = capability.fetch(params).await;
    build_view(page, config, &result)
}

/// Owns the page state and the latest fetch outcome for one listing.
///
/// Every request gets a fresh id; only the response carrying the latest id is
/// accepted, so a slow response for a page the user already left can never
/// overwrite the current view.
#[derive(Debug)]
pub struct ListViewController {
    /// Current page.
    page: PageState,
    /// Listing constants.
    config: ListConfig,
    /// Outcome of the latest accepted request, or `Pending`.
    result: FetchResult,
    /// Id handed out to the next request.
    next_request_id: u64,
    /// Id of the most recently issued request; 0 before the first request.
    latest_request_id: u64,
}

impl ListViewController {
    /// What: Create a controller on the first page.
    ///
    /// Inputs:
    /// - `config`: Listing constants
    ///
    /// Output:
    /// - Controller in the `Pending` state with no request issued yet.
    #[must_use]
    pub const fn new(config: ListConfig) -> Self {
        Self::starting_at(config, 0)
    }

    /// Create a controller positioned on `page_index`.
    #[must_use]
    pub const fn starting_at(config: ListConfig, page_index: u64) -> Self {
        Self {
            page: PageState::at(page_index),
            config,
            result: FetchResult::Pending,
            next_request_id: 1,
            latest_request_id: 0,
        }
    }

    /// Listing constants.
    #[must_use]
    pub const fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current page.
    #[must_use]
    pub const fn page(&self) -> &PageState {
        &self.page
    }

    /// Outcome of the latest accepted request.
    #[must_use]
    pub const fn result(&self) -> &FetchResult {
        &self.result
    }

    /// Id of the most recently issued request.
    #[must_use]
    pub const fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }

    /// What: Issue a request for the current page.
    ///
    /// Output:
    /// - `FetchRequest` with a fresh id and the current page's parameters.
    ///
    /// Details:
    /// - Resets the visible result to `Pending` and marks the id as the only
    ///   one whose response will be accepted.
    pub fn request(&mut self) -> FetchRequest {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request_id = id;
        self.result = FetchResult::Pending;
        let params = params_for(&self.page, &self.config);
        tracing::debug!(
            id,
            page = self.page.page_index(),
            offset = params.offset,
            limit = params.limit,
            "issuing fetch request"
        );
        FetchRequest { id, params }
    }

    /// What: "Previous" action.
    ///
    /// Output:
    /// - `Some(request)` for the previous page; `None` when already on page 0.
    pub fn on_prev(&mut self) -> Option<FetchRequest> {
        if self.page.prev() {
            Some(self.request())
        } else {
            tracing::trace!("prev ignored on first page");
            None
        }
    }

    /// What: "Next" action.
    ///
    /// Output:
    /// - Request for the following page.
    ///
    /// Details:
    /// - Unconditional; guarding past-the-end navigation is left to the
    ///   affordance layer via [`Self::can_go_next`].
    pub fn on_next(&mut self) -> FetchRequest {
        self.page.next();
        self.request()
    }

    /// Re-issue the request for the current page, e.g. after an error.
    pub fn retry(&mut self) -> FetchRequest {
        self.request()
    }

    /// What: Offer a response to the controller.
    ///
    /// Inputs:
    /// - `response`: Response from the fetch worker
    ///
    /// Output:
    /// - `true` when accepted; `false` when it belongs to a superseded request.
    ///
    /// Details:
    /// - Errors are stored like any other outcome; the page is never touched.
    pub fn apply(&mut self, response: FetchResponse) -> bool {
        if response.id != self.latest_request_id {
            tracing::debug!(
                id = response.id,
                latest = self.latest_request_id,
                "discarding stale fetch response"
            );
            return false;
        }
        if let FetchResult::Error(message) = &response.result {
            tracing::warn!(id = response.id, error = %message, "fetch failed");
        }
        self.result = response.result;
        true
    }

    /// `true` when the current page is not the first.
    #[must_use]
    pub const fn can_go_prev(&self) -> bool {
        self.page.page_index() > 0
    }

    /// `true` when the latest result is a full page.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        matches!(&self.result, FetchResult::Success(entities) if is_full_page(entities.len(), &self.config))
    }

    /// Current view state.
    #[must_use]
    pub fn view(&self) -> ViewState {
        build_view(&self.page, &self.config, &self.result)
    }
}

impl Default for ListViewController {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}
