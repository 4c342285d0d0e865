//! Suggestion fetch worker
//!
//! Handles suggest requests in a background thread to avoid blocking the
//! UI. Receives requests via channel, makes HTTP calls to the suggest
//! endpoint on a current-thread tokio runtime, and sends results back to
//! the main thread. Each request carries a cancellation token; a request
//! superseded by a newer keystroke is aborted mid-flight.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use crate::suggest::client::SuggestClient;
use crate::suggest::Suggestion;

/// A fetch issued for one input change
#[derive(Debug)]
pub struct SuggestRequest {
    /// Trimmed, non-empty search text
    pub query: String,
    /// Monotonic id assigned by the UI thread
    pub request_id: u64,
    /// Cancelled when a newer request supersedes this one
    pub cancel: CancellationToken,
}

/// Worker reply for one request
#[derive(Debug)]
pub enum SuggestResponse {
    Results {
        items: Vec<Suggestion>,
        request_id: u64,
    },
    Failed {
        message: String,
        request_id: u64,
    },
    Cancelled {
        request_id: u64,
    },
}

/// Spawn the suggestion fetch worker thread
///
/// Creates a background thread that:
/// 1. Listens for requests on the request channel
/// 2. Fetches suggestions from the suggest endpoint
/// 3. Sends responses back via the response channel
pub fn spawn_worker(
    client: SuggestClient,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: SuggestClient,
    request_rx: Receiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            // Without a runtime every fetch fails; keep answering so the
            // UI thread is never left waiting on a dead channel.
            log::debug!("failed to build worker runtime: {}", e);
            while let Ok(request) = request_rx.recv() {
                let _ = response_tx.send(SuggestResponse::Failed {
                    message: format!("worker runtime unavailable: {e}"),
                    request_id: request.request_id,
                });
            }
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = runtime.block_on(handle_fetch(&client, &request));
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("suggest worker thread shutting down");
}

/// Race the fetch against its cancellation token
///
/// Cancellation wins ties: a request superseded before its response
/// resolves reports `Cancelled` and the fetch future is dropped.
async fn handle_fetch(client: &SuggestClient, request: &SuggestRequest) -> SuggestResponse {
    let request_id = request.request_id;

    tokio::select! {
        biased;

        _ = request.cancel.cancelled() => SuggestResponse::Cancelled { request_id },
        result = client.fetch(&request.query) => match result {
            Ok(items) => SuggestResponse::Results { items, request_id },
            Err(e) => SuggestResponse::Failed {
                message: e.to_string(),
                request_id,
            },
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
