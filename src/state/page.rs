//! Page index holder with guarded transitions.

/// Current zero-based page index.
///
/// The index never goes below zero. There is no upper bound; whether another
/// page exists is decided by the caller from the last fetched page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Zero-based page index.
    page_index: u64,
}

impl PageState {
    /// What: Create a page state positioned at `page_index`.
    ///
    /// Inputs:
    /// - `page_index`: Starting page (0 for a fresh mount)
    ///
    /// Output:
    /// - New `PageState`.
    #[must_use]
    pub const fn at(page_index: u64) -> Self {
        Self { page_index }
    }

    /// Current zero-based page index.
    #[must_use]
    pub const fn page_index(&self) -> u64 {
        self.page_index
    }

    /// What: Advance to the next page unconditionally.
    ///
    /// Details:
    /// - Saturates at `u64::MAX` instead of wrapping.
    pub const fn next(&mut self) {
        self.page_index = self.page_index.saturating_add(1);
    }

    /// What: Step back one page unless already on the first page.
    ///
    /// Output:
    /// - `true` when the index changed, `false` for the no-op at page 0.
    pub const fn prev(&mut self) -> bool {
        if self.page_index > 0 {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: `prev` at page 0 leaves the index unchanged, however often it is called.
    ///
    /// Inputs:
    /// - Default `PageState`
    ///
    /// Output:
    /// - Index stays 0 and `prev` reports no change.
    fn prev_at_zero_is_noop() {
        let mut page = PageState::default();
        assert!(!page.prev());
        assert!(!page.prev());
        assert_eq!(page.page_index(), 0);
    }

    #[test]
    /// What: `next` always increments and `prev` undoes it.
    ///
    /// Inputs:
    /// - Page at index 3
    ///
    /// Output:
    /// - 3 -> 4 -> 3.
    fn next_then_prev_round_trip() {
        let mut page = PageState::at(3);
        page.next();
        assert_eq!(page.page_index(), 4);
        assert!(page.prev());
        assert_eq!(page.page_index(), 3);
    }

    #[test]
    fn next_saturates() {
        let mut page = PageState::at(u64::MAX);
        page.next();
        assert_eq!(page.page_index(), u64::MAX);
    }
}
