//! Previous/next availability and error display.

use dexpage::logic::{ListConfig, ListViewController, compute_view_model};
use dexpage::state::{FetchResponse, PageState, ViewState};

use crate::support::Listing;

#[tokio::test]
/// What: First page of a long listing.
///
/// Inputs:
/// - Page 0, page size 50, 200 entities available.
///
/// Output:
/// - 50 rows; previous disabled, next enabled.
async fn first_full_page_allows_next_only() {
    let view = compute_view_model(&PageState::at(0), &ListConfig::default(), &Listing::new(200)).await;
    let ViewState::Ready(vm) = view else {
        panic!("expected ready view, got {view:?}");
    };
    assert_eq!(vm.items.len(), 50);
    assert_eq!(vm.items[0].id, 1);
    assert!(!vm.can_go_prev);
    assert!(vm.can_go_next);
}

#[tokio::test]
/// What: Partial second page.
///
/// Inputs:
/// - Page 1, page size 50, 80 entities available (30 on page 1).
///
/// Output:
/// - 30 rows starting at #51; previous enabled, next disabled.
async fn partial_page_allows_prev_only() {
    let view = compute_view_model(&PageState::at(1), &ListConfig::default(), &Listing::new(80)).await;
    let ViewState::Ready(vm) = view else {
        panic!("expected ready view, got {view:?}");
    };
    assert_eq!(vm.items.len(), 30);
    assert_eq!(vm.items[0].id, 51);
    assert!(vm.can_go_prev);
    assert!(!vm.can_go_next);
}

#[tokio::test]
/// What: A failed fetch shows the message verbatim and keeps the page.
///
/// Inputs:
/// - Controller on page 3 whose fetch fails with "network timeout".
///
/// Output:
/// - Error view with the same message; page index still 3; retry re-requests page 3.
async fn error_keeps_page_and_message() {
    let mut listing = Listing::new(500);
    listing.fail_with = Some("network timeout".into());
    let mut controller = ListViewController::starting_at(ListConfig::default(), 3);

    let request = controller.request();
    let result = dexpage::sources::FetchCapability::fetch(&listing, request.params).await;
    assert!(controller.apply(FetchResponse {
        id: request.id,
        result,
    }));

    assert_eq!(
        controller.view(),
        ViewState::Error {
            message: "network timeout".into()
        }
    );
    assert_eq!(controller.page().page_index(), 3);

    let again = controller.retry();
    assert_eq!(again.params, request.params);
    assert!(again.id > request.id);
    assert_eq!(controller.view(), ViewState::Loading);
}

#[test]
fn prev_on_first_page_is_a_no_op() {
    let mut controller = ListViewController::new(ListConfig::default());
    let first = controller.request();
    assert!(controller.on_prev().is_none());
    assert_eq!(controller.page().page_index(), 0);
    assert_eq!(controller.latest_request_id(), first.id);
}
