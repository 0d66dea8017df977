//! Effect executor wiring the reducer to the backend client.
//!
//! All orchestration happens on the tokio event loop: each network
//! effect is spawned as a task that reports back over an mpsc channel
//! as a `*Settled` event, which flows through the reducer like any
//! other event. The runtime never mutates state directly.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::controller;
use super::event::{ConsoleEvent, Effect};
use super::state::ConsoleState;
use crate::backend::BackendClient;

/// How long the upload-success banner stays up before auto-clearing.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

/// Owns the console state, the backend client, and the event channel.
pub struct ConsoleRuntime {
    state: ConsoleState,
    client: BackendClient,
    export_dir: PathBuf,
    events_tx: mpsc::UnboundedSender<ConsoleEvent>,
    events_rx: mpsc::UnboundedReceiver<ConsoleEvent>,
    /// Banner auto-clear task; aborted when superseded or on drop
    banner_timer: Option<JoinHandle<()>>,
    /// Network requests whose `*Settled` event has not arrived yet
    in_flight: usize,
}

impl ConsoleRuntime {
    /// Create a runtime around an initial state
    pub fn new(client: BackendClient, state: ConsoleState, export_dir: PathBuf) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            export_dir,
            events_tx,
            events_rx,
            banner_timer: None,
            in_flight: 0,
        }
    }

    /// Current console state (read-only; only the reducer writes it)
    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    /// Run one event through the reducer and execute its effects
    pub fn dispatch(&mut self, event: ConsoleEvent) {
        let effects = controller::apply(&mut self.state, event);
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Wait for every in-flight network request to settle, applying
    /// completions as they arrive, then drain anything else pending
    /// (such as an already-elapsed banner timer).
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.settle(event),
                None => break,
            }
        }
        self.drain_pending();
    }

    /// Apply queued completion events without waiting for new ones
    pub fn drain_pending(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.settle(event);
        }
    }

    fn settle(&mut self, event: ConsoleEvent) {
        if matches!(
            event,
            ConsoleEvent::SuggestionsSettled { .. }
                | ConsoleEvent::ResearchSettled { .. }
                | ConsoleEvent::UploadSettled { .. }
        ) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.dispatch(event);
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchSuggestions { query, generation } => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    let outcome = client.suggest(&query).await;
                    let _ = tx.send(ConsoleEvent::SuggestionsSettled {
                        generation,
                        outcome,
                    });
                });
            }
            Effect::RunResearch {
                query,
                max_sources,
                generation,
            } => {
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    let outcome = client.research(&query, max_sources).await;
                    let _ = tx.send(ConsoleEvent::ResearchSettled {
                        generation,
                        outcome,
                    });
                });
            }
            Effect::UploadFiles { files, generation } => {
                let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
                let client = self.client.clone();
                let tx = self.events_tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    let outcome = client.ingest(files).await;
                    let _ = tx.send(ConsoleEvent::UploadSettled {
                        generation,
                        names,
                        outcome,
                    });
                });
            }
            Effect::ScheduleBannerClear { generation } => {
                // A new upload cycle supersedes the previous countdown
                if let Some(timer) = self.banner_timer.take() {
                    timer.abort();
                }
                let tx = self.events_tx.clone();
                self.banner_timer = Some(tokio::spawn(async move {
                    tokio::time::sleep(SUCCESS_BANNER_TTL).await;
                    let _ = tx.send(ConsoleEvent::BannerElapsed { generation });
                }));
            }
            Effect::SaveExport {
                file_name,
                contents,
            } => {
                let path = self.export_dir.join(&file_name);
                match std::fs::write(&path, contents) {
                    Ok(()) => info!(path = %path.display(), "Report exported"),
                    Err(e) => error!(path = %path.display(), error = %e, "Export write failed"),
                }
            }
        }
    }
}

impl Drop for ConsoleRuntime {
    fn drop(&mut self) {
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }
    }
}
