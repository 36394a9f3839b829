//! Non-interactive `--print` mode: fetch one page and write it to stdout.

use std::fmt::Write as _;

use crate::logic::{ListConfig, compute_view_model};
use crate::sources::FetchCapability;
use crate::state::{PageState, ViewModel, ViewState};

/// What: Format a view model as plain text, one row per line.
///
/// Inputs:
/// - `vm`: View model of one page
/// - `page_index`: Zero-based page the rows belong to
///
/// Output:
/// - `#id<TAB>primary<TAB>secondary` lines plus a trailing navigation hint.
///
/// Details:
/// - Missing labels print as empty fields.
#[must_use]
pub fn format_view_model(vm: &ViewModel, page_index: u64) -> String {
    let mut out = String::new();
    for item in &vm.items {
        let _ = writeln!(
            out,
            "#{}\t{}\t{}",
            item.id,
            item.primary_label.as_deref().unwrap_or_default(),
            item.secondary_label.as_deref().unwrap_or_default()
        );
    }
    let page = page_index.saturating_add(1);
    if vm.can_go_next {
        let _ = writeln!(out, "-- page {page}; more with --page {}", page.saturating_add(1));
    } else {
        let _ = writeln!(out, "-- page {page}; end of listing");
    }
    out
}

/// What: Fetch and format one page.
///
/// Inputs:
/// - `page`: Page to print
/// - `config`: Listing constants
/// - `source`: Fetch capability
///
/// Output:
/// - `Ok(text)` for a successful page; `Err(message)` with the fetch error verbatim.
pub async fn print_page<C>(page: PageState, config: &ListConfig, source: &C) -> Result<String, String>
where
    C: FetchCapability + ?Sized,
{
    match compute_view_model(&page, config, source).await {
        ViewState::Ready(vm) => Ok(format_view_model(&vm, page.page_index())),
        ViewState::Error { message } => Err(message),
        ViewState::Loading => Err("source returned no data".to_string()),
    }
}
