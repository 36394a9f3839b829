//! Last-request-wins through the background fetch worker.

use std::sync::Arc;
use std::time::Duration;

use dexpage::app::runtime::handlers::handle_fetch_response;
use dexpage::app::runtime::workers::spawn_fetch_worker;
use dexpage::logic::{ListConfig, request_current, send_fetch};
use dexpage::state::{AppState, FetchResponse, ViewState};
use tokio::sync::mpsc;

#[tokio::test]
/// What: A slow page-0 response arriving after page 1 must not replace it.
///
/// Inputs:
/// - Page 0 answers after 150ms, page 1 immediately; the controller moves to
///   page 1 while page 0 is still in flight.
///
/// Output:
/// - Final view shows page 1 (first id 51); the late response is discarded.
async fn slow_previous_page_is_discarded() {
    let mut listing = crate::support::Listing::new(500);
    listing.slow_offsets = vec![0];
    listing.slow_delay = Duration::from_millis(150);

    let (req_tx, req_rx) = mpsc::unbounded_channel();
    let (res_tx, mut res_rx) = mpsc::unbounded_channel::<FetchResponse>();
    spawn_fetch_worker(Arc::new(listing), req_rx, res_tx);

    let mut app = AppState::new(ListConfig::default(), 0, String::new());
    request_current(&mut app, &req_tx);
    let next = app.controller.on_next();
    app.reset_selection();
    send_fetch(next, &req_tx);

    let mut applied = Vec::new();
    for _ in 0..2 {
        let response = tokio::time::timeout(Duration::from_secs(2), res_rx.recv())
            .await
            .expect("worker answered in time")
            .expect("channel open");
        applied.push(handle_fetch_response(&mut app, response));
    }

    assert_eq!(applied, vec![true, false]);
    assert_eq!(app.controller.page().page_index(), 1);
    let ViewState::Ready(vm) = app.view() else {
        panic!("expected ready view");
    };
    assert_eq!(vm.items.first().map(|i| i.id), Some(51));
    assert!(vm.can_go_prev);
}

#[tokio::test]
/// What: While a newer request is pending, an older response does not flip the view.
///
/// Inputs:
/// - Two requests issued back to back; only the older answer is applied.
///
/// Output:
/// - View stays `Loading`.
async fn stale_response_leaves_pending_view() {
    let mut app = AppState::new(ListConfig::default(), 0, String::new());
    let old = app.controller.request();
    let _newer = app.controller.on_next();
    let changed = handle_fetch_response(
        &mut app,
        FetchResponse {
            id: old.id,
            result: dexpage::state::FetchResult::Error("late".into()),
        },
    );
    assert!(!changed);
    assert_eq!(app.view(), ViewState::Loading);
}
