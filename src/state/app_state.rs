//! Central `AppState` container read by the UI and mutated by event handlers.

use ratatui::widgets::ListState;

use crate::logic::{ListConfig, ListViewController};
use crate::state::ViewState;

/// Global application state for the TUI.
#[derive(Debug)]
pub struct AppState {
    /// Page state, request correlation and latest result.
    pub controller: ListViewController,
    /// Index of the highlighted row on the current page.
    pub selected: usize,
    /// List widget state mirroring `selected`.
    pub list_state: ListState,
    /// Endpoint shown in the title bar.
    pub endpoint: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ListConfig::default(), 0, String::new())
    }
}

impl AppState {
    /// What: Build the state for a session.
    ///
    /// Inputs:
    /// - `config`: Listing constants for the session
    /// - `start_page`: Page to open on
    /// - `endpoint`: Endpoint label for the title bar
    ///
    /// Output:
    /// - Fresh `AppState` with no request issued yet.
    #[must_use]
    pub fn new(config: ListConfig, start_page: u64, endpoint: String) -> Self {
        Self {
            controller: ListViewController::starting_at(config, start_page),
            selected: 0,
            list_state: ListState::default(),
            endpoint,
        }
    }

    /// Current view state derived from the controller.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.controller.view()
    }

    /// What: Reset the row highlight after a new page was requested.
    ///
    /// Details:
    /// - A new page starts with its first row highlighted once data arrives.
    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.list_state.select(None);
    }

    /// What: Move the row highlight by `delta`, clamped to the visible rows.
    ///
    /// Inputs:
    /// - `delta`: Signed step (negative moves up)
    ///
    /// Details:
    /// - No-op unless the current view has rows.
    pub fn move_selection(&mut self, delta: isize) {
        let ViewState::Ready(vm) = self.view() else {
            return;
        };
        if vm.items.is_empty() {
            return;
        }
        let max = vm.items.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
        self.list_state.select(Some(self.selected));
    }

    /// Re-sync the list widget highlight after a response was accepted.
    pub fn sync_selection(&mut self) {
        match self.view() {
            ViewState::Ready(vm) if !vm.items.is_empty() => {
                self.selected = self.selected.min(vm.items.len() - 1);
                self.list_state.select(Some(self.selected));
            }
            _ => {
                self.selected = 0;
                self.list_state.select(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FetchResponse, FetchResult};
    use crate::test_utils::species_page;

    #[test]
    /// What: Selection is clamped to the rows of the current page.
    ///
    /// Inputs:
    /// - Page with 3 rows; move down 10, then up 1.
    ///
    /// Output:
    /// - Selection 2 then 1; list state mirrors it.
    fn selection_clamps_to_rows() {
        let mut app = AppState::default();
        let req = app.controller.request();
        app.controller.apply(FetchResponse {
            id: req.id,
            result: FetchResult::Success(species_page(1, 3)),
        });
        app.sync_selection();
        assert_eq!(app.list_state.selected(), Some(0));
        app.move_selection(10);
        assert_eq!(app.selected, 2);
        app.move_selection(-1);
        assert_eq!(app.selected, 1);
        assert_eq!(app.list_state.selected(), Some(1));
    }

    #[test]
    fn selection_ignored_while_loading() {
        let mut app = AppState::default();
        let _ = app.controller.request();
        app.move_selection(1);
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    /// What: A new page request drops the highlight from the previous page.
    ///
    /// Inputs:
    /// - Row 2 highlighted on a 3-row page, then `reset_selection`.
    ///
    /// Output:
    /// - Selection back to 0 with no highlighted row.
    fn reset_selection_clears_highlight() {
        let mut app = AppState::default();
        let req = app.controller.request();
        app.controller.apply(FetchResponse {
            id: req.id,
            result: FetchResult::Success(species_page(1, 3)),
        });
        app.move_selection(2);
        assert_eq!(app.list_state.selected(), Some(2));
        app.reset_selection();
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), None);
    }
}
