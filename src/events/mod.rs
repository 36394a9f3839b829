//! Event handling layer for dexpage's TUI.
//!
//! Keys map onto the controller's affordances; disabled controls ignore their keys.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{go_next, go_prev, retry};
use crate::state::{AppState, FetchRequest};

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind == KeyEventKind::Press => handle_key(*ke, app, fetch_tx),
        _ => false,
    }
}

/// What: Apply one key press.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
/// - `fetch_tx`: Channel to the fetch worker
///
/// Output:
/// - `true` for quit keys.
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    fetch_tx: &mpsc::UnboundedSender<FetchRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            go_prev(app, fetch_tx);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            go_next(app, fetch_tx);
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('r') => retry(app, fetch_tx),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FetchResponse, FetchResult};
    use crate::test_utils::species_page;

    /// Build a key-press event for `code`.
    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    /// What: Quit keys end the loop; other keys do not.
    ///
    /// Inputs:
    /// - `q`, `Esc`, `Ctrl+C`, `x`
    ///
    /// Output:
    /// - `true` for the first three, `false` for `x`.
    fn quit_keys_exit() {
        let mut app = AppState::default();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(handle_event(&key(KeyCode::Char('q')), &mut app, &tx));
        assert!(handle_event(&key(KeyCode::Esc), &mut app, &tx));
        assert!(handle_event(
            &CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &mut app,
            &tx
        ));
        assert!(!handle_event(&key(KeyCode::Char('x')), &mut app, &tx));
    }

    #[test]
    /// What: Right arrow pages forward after a full page, left pages back.
    ///
    /// Inputs:
    /// - Page 0 resolved with 50 entities; `Right`, then `Left`.
    ///
    /// Output:
    /// - Requests for offsets 50 and 0.
    fn arrows_page_through() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let req = app.controller.request();
        app.controller.apply(FetchResponse {
            id: req.id,
            result: FetchResult::Success(species_page(1, 50)),
        });
        handle_event(&key(KeyCode::Right), &mut app, &tx);
        assert_eq!(rx.try_recv().map(|r| r.params.offset).ok(), Some(50));
        handle_event(&key(KeyCode::Left), &mut app, &tx);
        assert_eq!(rx.try_recv().map(|r| r.params.offset).ok(), Some(0));
        handle_event(&key(KeyCode::Left), &mut app, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn retry_reissues_current_page() {
        let mut app = AppState::new(crate::logic::ListConfig::default(), 3, String::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let req = app.controller.request();
        app.controller.apply(FetchResponse {
            id: req.id,
            result: FetchResult::Error("network timeout".into()),
        });
        handle_event(&key(KeyCode::Char('r')), &mut app, &tx);
        let again = rx.try_recv().expect("retry sent");
        assert_eq!(again.params.offset, 150);
        assert_eq!(app.controller.latest_request_id(), again.id);
    }
}
