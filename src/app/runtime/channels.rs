use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{FetchRequest, FetchResponse};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop, the terminal event thread and the fetch worker.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the fetch worker.
    pub fetch_req_tx: mpsc::UnboundedSender<FetchRequest>,
    /// Receiving side of `fetch_req_tx`; taken by the worker on spawn.
    pub fetch_req_rx: Option<mpsc::UnboundedReceiver<FetchRequest>>,
    /// Responses from the fetch worker.
    pub fetch_res_tx: mpsc::UnboundedSender<FetchResponse>,
    /// Receiving side of `fetch_res_tx`.
    pub fetch_res_rx: mpsc::UnboundedReceiver<FetchResponse>,
}

impl Channels {
    /// What: Create all runtime channels.
    ///
    /// Output:
    /// - `Channels` with fresh unbounded pairs and an uncancelled event flag.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (fetch_req_tx, fetch_req_rx) = mpsc::unbounded_channel();
        let (fetch_res_tx, fetch_res_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            fetch_req_tx,
            fetch_req_rx: Some(fetch_req_rx),
            fetch_res_tx,
            fetch_res_rx,
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
