//! Core non-UI logic split into modular submodules.

pub mod controller;
pub mod language;
pub mod params;
pub mod query;

pub use controller::{ListViewController, build_view, compute_view_model};
pub use language::select_label;
pub use params::{
    DEFAULT_PAGE_SIZE, DEFAULT_PRIMARY_LANGUAGE_ID, DEFAULT_SECONDARY_LANGUAGE_ID, ListConfig,
    derive_query_parameters, params_for,
};
pub use query::{go_next, go_prev, request_current, retry, send_fetch};
