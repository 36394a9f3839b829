use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Settings;
use crate::logic::request_current;
use crate::sources::{CachedSource, FetchCapability, GraphqlSource};
use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

/// Runtime channel bundle.
pub mod channels;
/// Main `select!` loop.
pub mod event_loop;
/// Handlers for worker messages.
pub mod handlers;
/// Background fetch worker and terminal input thread.
pub mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use workers::{spawn_event_thread, spawn_fetch_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Build the production fetch capability from settings.
///
/// Inputs:
/// - `settings`: Endpoint, timeout, language ids and cache capacity
///
/// Output:
/// - Cached GraphQL source; `Err` when the HTTP client cannot be created.
///
/// # Errors
/// - Returns `Err` when the HTTP client fails to initialize.
pub fn build_source(settings: &Settings) -> Result<CachedSource<GraphqlSource>> {
    let graphql = GraphqlSource::new(
        settings.endpoint.clone(),
        settings.request_timeout(),
        vec![settings.primary_language_id, settings.secondary_language_id],
    )?;
    Ok(CachedSource::new(graphql, settings.cache_capacity))
}

/// What: Run the dexpage TUI end-to-end: set up the terminal, spawn the fetch worker
/// and input thread, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (file plus command-line overrides)
/// - `start_page`: Page to open on
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - Fetch failures are never fatal; they are shown in the list area and the
///   user can retry or navigate.
pub async fn run(settings: Settings, start_page: u64) -> Result<()> {
    let source = Arc::new(build_source(&settings)?);
    let app = AppState::new(settings.list_config(), start_page, settings.endpoint.clone());
    run_with_source(source, app).await
}

/// What: Run the TUI against an arbitrary fetch capability.
///
/// Inputs:
/// - `source`: Fetch capability
/// - `app`: Initial application state
///
/// Output:
/// - `Ok(())` on clean exit; `Err` when the terminal cannot be set up or restored.
pub async fn run_with_source<S>(source: Arc<S>, mut app: AppState) -> Result<()>
where
    S: FetchCapability + ?Sized + 'static,
{
    setup_terminal()?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e.into());
        }
    };

    let mut channels = Channels::new();
    if let Some(req_rx) = channels.fetch_req_rx.take() {
        spawn_fetch_worker(source, req_rx, channels.fetch_res_tx.clone());
    }
    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    // Initial page load
    request_current(&mut app, &channels.fetch_req_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::debug!(
        page = app.controller.page().page_index(),
        "main loop exited"
    );

    restore_terminal()?;
    Ok(())
}
