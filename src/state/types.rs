//! Core value types shared by the controller, the fetch sources and the UI.

/// One localized name attached to an [`Entity`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Label {
    /// Identifier of the language this text is written in.
    pub language_id: i64,
    /// Display text in that language.
    pub text: String,
}

impl Label {
    /// What: Convenience constructor used by sources and tests.
    ///
    /// Inputs:
    /// - `language_id`: Language identifier
    /// - `text`: Display text
    ///
    /// Output:
    /// - A new `Label`.
    #[must_use]
    pub fn new(language_id: i64, text: impl Into<String>) -> Self {
        Self {
            language_id,
            text: text.into(),
        }
    }
}

/// A listed record with a stable id and its localized labels.
///
/// Labels are kept in the order the source returned them; not every language
/// is guaranteed to be present.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    /// Unique, stable identifier.
    pub id: i64,
    /// Localized labels in source order.
    pub labels: Vec<Label>,
}

/// Offset/limit pair sent to the fetch capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct QueryParameters {
    /// Number of entities requested (the page size).
    pub limit: u32,
    /// Number of entities skipped before this page.
    pub offset: u64,
}

/// Tri-state outcome of one fetch.
///
/// `Pending` means no data has arrived yet and is distinct from a successful
/// empty page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResult {
    /// Request issued, no answer yet.
    Pending,
    /// The capability reported a failure; the message is shown verbatim.
    Error(String),
    /// Entities for the whole page, in source order.
    Success(Vec<Entity>),
}

/// Fetch request correlated by a monotonic id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Parameters derived from the page at the time of the request.
    pub params: QueryParameters,
}

/// Response corresponding to a prior [`FetchRequest`].
#[derive(Clone, Debug)]
pub struct FetchResponse {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Outcome reported by the fetch capability.
    pub result: FetchResult,
}

/// One render-ready row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItemView {
    /// Entity id.
    pub id: i64,
    /// Text in the primary language, `None` when the entity has none.
    pub primary_label: Option<String>,
    /// Text in the secondary language, `None` when the entity has none.
    pub secondary_label: Option<String>,
}

/// Render-ready page plus pagination affordances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    /// Rows in the order the source returned them.
    pub items: Vec<ListItemView>,
    /// Whether the "Previous" control is enabled.
    pub can_go_prev: bool,
    /// Whether the "Next" control is enabled.
    ///
    /// A full page is taken as a hint that another page exists. When the
    /// backing store ends exactly on a page boundary this stays `true` until
    /// the user advances and receives an empty page.
    pub can_go_next: bool,
}

/// What the UI should show for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// Waiting for the latest request to resolve.
    Loading,
    /// The latest request failed.
    Error {
        /// Message from the fetch capability, unmodified.
        message: String,
    },
    /// The latest request succeeded.
    Ready(ViewModel),
}
