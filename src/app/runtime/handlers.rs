use crate::state::{AppState, FetchResponse};

/// What: Handle a fetch response from the worker.
///
/// Inputs:
/// - `app`: Application state
/// - `response`: Id-tagged response
///
/// Output:
/// - `true` when the response was for the latest request and is now shown.
///
/// Details:
/// - Responses for superseded requests are dropped without touching the view.
/// - The row highlight is re-clamped to the new page.
pub fn handle_fetch_response(app: &mut AppState, response: FetchResponse) -> bool {
    if !app.controller.apply(response) {
        return false;
    }
    app.sync_selection();
    true
}
