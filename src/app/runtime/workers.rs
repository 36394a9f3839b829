use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::FetchCapability;
use crate::state::{FetchRequest, FetchResponse};

/// What: Spawn the background worker that executes fetch requests.
///
/// Inputs:
/// - `source`: Fetch capability shared by all requests
/// - `req_rx`: Channel receiver for id-tagged requests
/// - `res_tx`: Channel sender for id-tagged responses
///
/// Details:
/// - Each request runs on its own task, so a slow page never blocks a newer one.
/// - Responses are sent back in completion order; discarding superseded ones is
///   the receiver's job (it compares ids against the latest request).
pub fn spawn_fetch_worker<S>(
    source: Arc<S>,
    mut req_rx: mpsc::UnboundedReceiver<FetchRequest>,
    res_tx: mpsc::UnboundedSender<FetchResponse>,
) where
    S: FetchCapability + ?Sized + 'static,
{
    tokio::spawn(async move {
        while let Some(request) = req_rx.recv().await {
            let pending = source.fetch(request.params);
            let tx = res_tx.clone();
            tokio::spawn(async move {
                let result = pending.await;
                if tx
                    .send(FetchResponse {
                        id: request.id,
                        result,
                    })
                    .is_err()
                {
                    tracing::debug!(id = request.id, "event loop gone; response dropped");
                }
            });
        }
        tracing::debug!("fetch worker exiting");
    });
}

/// What: Spawn the thread that forwards terminal events to the event loop.
///
/// Inputs:
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag set by the event loop on exit
///
/// Details:
/// - Polls with a short timeout so the cancellation flag is honoured promptly.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    break;
                }
            }
        }
    });
}
