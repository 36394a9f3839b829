use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::handle_fetch_response;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel
/// - Returns `true` when an event handler indicates exit (e.g., quit command)
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.fetch_req_tx)
        }
        Some(response) = channels.fetch_res_rx.recv() => {
            handle_fetch_response(app, response);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, processing all channel messages and rendering the UI.
///
/// Inputs:
/// - `terminal`: Terminal to render into
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: None (runs until exit condition is met)
///
/// Details:
/// - Redraws after every message, so an accepted response is visible immediately.
/// - Exits when the event handler returns true or every channel has closed.
pub async fn run_event_loop<B>(terminal: &mut Terminal<B>, app: &mut AppState, channels: &mut Channels)
where
    B: ratatui::backend::Backend,
{
    loop {
        if let Err(e) = terminal.draw(|f| ui(f, app)) {
            tracing::warn!(error = %e, "frame draw failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
