//! Navigation actions that turn controller requests into worker messages.

use tokio::sync::mpsc;

use crate::state::{AppState, FetchRequest};

/// What: Forward a fetch request to the background worker.
///
/// Inputs:
/// - `request`: Id-tagged request from the controller
/// - `fetch_tx`: Channel to the fetch worker
///
/// Details:
/// - A closed channel only happens during shutdown; the send error is logged and dropped.
pub fn send_fetch(request: FetchRequest, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    if fetch_tx.send(request).is_err() {
        tracing::debug!(id = request.id, "fetch worker gone; request dropped");
    }
}

/// What: Issue a request for the current page (initial load).
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
pub fn request_current(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let request = app.controller.request();
    app.reset_selection();
    send_fetch(request, fetch_tx);
}

/// What: "Previous" affordance.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` when a request for the previous page was issued.
///
/// Details:
/// - Ignored when the control is disabled (first page).
pub fn go_prev(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    if !app.controller.can_go_prev() {
        return false;
    }
    let Some(request) = app.controller.on_prev() else {
        return false;
    };
    app.reset_selection();
    send_fetch(request, fetch_tx);
    true
}

/// What: "Next" affordance.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` when a request for the next page was issued.
///
/// Details:
/// - The control is disabled unless the last page came back full; that is
///   the only guard against paging past the end.
pub fn go_next(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) -> bool {
    if !app.controller.can_go_next() {
        return false;
    }
    let request = app.controller.on_next();
    app.reset_selection();
    send_fetch(request, fetch_tx);
    true
}

/// What: Re-fetch the current page with a fresh request id.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `fetch_tx`: Channel to the fetch worker
pub fn retry(app: &mut AppState, fetch_tx: &mpsc::UnboundedSender<FetchRequest>) {
    let request = app.controller.retry();
    app.reset_selection();
    send_fetch(request, fetch_tx);
}
