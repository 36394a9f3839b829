//! Label selection by language id.

use crate::state::Label;

/// What: Pick the display text for `language_id` from a label collection.
///
/// Inputs:
/// - `labels`: Labels in source order
/// - `language_id`: Wanted language
///
/// Output:
/// - `Some(text)` of the first label whose language matches; `None` when no label matches.
///
/// Details:
/// - First match wins. Duplicate language ids are not validated; later
///   duplicates are simply never seen.
#[must_use]
pub fn select_label(labels: &[Label], language_id: i64) -> Option<&str> {
    labels
        .iter()
        .find(|label| label.language_id == language_id)
        .map(|label| label.text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Both configured languages resolve when present.
    ///
    /// Inputs:
    /// - Labels for language 1 ("ピカチュウ") and 9 ("Pikachu").
    ///
    /// Output:
    /// - Each id returns its own text.
    fn picks_matching_language() {
        let labels = vec![Label::new(1, "ピカチュウ"), Label::new(9, "Pikachu")];
        assert_eq!(select_label(&labels, 1), Some("ピカチュウ"));
        assert_eq!(select_label(&labels, 9), Some("Pikachu"));
    }

    #[test]
    fn missing_language_is_none() {
        let labels = vec![Label::new(9, "Pikachu")];
        assert_eq!(select_label(&labels, 1), None);
        assert_eq!(select_label(&[], 9), None);
    }

    #[test]
    /// What: Duplicate language ids resolve to the first occurrence.
    ///
    /// Inputs:
    /// - Two labels with language 9, "first" then "second".
    ///
    /// Output:
    /// - "first".
    fn first_match_wins() {
        let labels = vec![
            Label::new(5, "other"),
            Label::new(9, "first"),
            Label::new(9, "second"),
        ];
        assert_eq!(select_label(&labels, 9), Some("first"));
    }
}
