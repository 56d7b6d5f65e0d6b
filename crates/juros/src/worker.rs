//! Background worker for fetching the AI tip without blocking the UI.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use crate::insight::{FALLBACK_INSIGHT, InsightClient};

/// Request sent to the background worker
#[derive(Debug)]
pub enum InsightRequest {
    /// Generate tip text for the given prompt
    Generate { prompt: String },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum InsightResponse {
    /// Tip text, or the fixed fallback sentence when the backend failed
    Complete { text: String },
}

/// Background worker that calls the tip backend on a separate thread
pub struct InsightWorker {
    request_tx: Sender<InsightRequest>,
    response_rx: Receiver<InsightResponse>,
    thread: Option<JoinHandle<()>>,
}

impl InsightWorker {
    /// Create a new insight worker with a background thread
    pub fn new(client: InsightClient) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let thread = thread::spawn(move || {
            run_worker(client, request_rx, response_tx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Send a generation request to the worker
    pub fn send(&self, request: InsightRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<InsightResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(InsightRequest::Shutdown);
    }
}

impl Drop for InsightWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run_worker(
    client: InsightClient,
    request_rx: Receiver<InsightRequest>,
    response_tx: Sender<InsightResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            InsightRequest::Shutdown => break,

            InsightRequest::Generate { prompt } => {
                tracing::info!("Requesting financial tip");
                let text = match client.generate(&prompt) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("Tip backend failed: {e}");
                        FALLBACK_INSIGHT.to_string()
                    }
                };
                let _ = response_tx.send(InsightResponse::Complete { text });
            }
        }
    }
}
