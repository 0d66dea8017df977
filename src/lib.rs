//! # Research Console
//!
//! Interactive terminal client for a remote research analysis backend.
//! A user submits natural-language research queries, receives live
//! query-refinement suggestions while composing them, uploads source
//! documents for ingestion, and exports the resulting report.
//!
//! ## Architecture
//!
//! ```text
//! stdin → ConsoleEvent → reducer → ConsoleState + Effects
//!                                       ↓
//!                          BackendClient (HTTP: /research /suggest /ingest)
//! ```
//!
//! The crate is the client-side interaction and state-orchestration
//! layer only; the analysis backend is an external collaborator reached
//! over its HTTP contract.
//!
//! ## Example
//!
//! ```ignore
//! use research_console::{BackendClient, Config, ConsoleEvent, ConsoleRuntime, ConsoleState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = BackendClient::new(&config.backend, config.request.clone())?;
//!     let state = ConsoleState::new(config.export.max_sources);
//!     let mut runtime = ConsoleRuntime::new(client, state, config.export.directory.clone());
//!
//!     runtime.dispatch(ConsoleEvent::Submitted(Some("impact of caching on latency".into())));
//!     runtime.run_until_idle().await;
//!     println!("{}", research_console::console::view::render(runtime.state()));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// HTTP client and wire types for the research backend.
pub mod backend;
/// Configuration management loaded from the environment.
pub mod config;
/// Console state, events, reducer, and runtime.
pub mod console;
/// Error types and result aliases for the application.
pub mod error;
/// Pure report export to pdf/markdown/json text.
pub mod export;

pub use backend::BackendClient;
pub use config::Config;
pub use console::{ConsoleEvent, ConsoleRuntime, ConsoleState, Effect};
pub use error::{AppError, AppResult};
pub use export::ExportFormat;
