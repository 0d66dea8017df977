//! Console state orchestration.
//!
//! This module is the interaction core of the crate:
//! - [`ConsoleState`]: one explicit, serializable record of everything
//!   the console shows
//! - [`ConsoleEvent`] / [`Effect`]: user input and settled requests in,
//!   requested side effects out
//! - [`controller::apply`]: the single deterministic reducer
//! - [`ConsoleRuntime`]: executes effects on the tokio event loop
//! - [`view`]: plain-text rendering of derived visibility
//!
//! Concurrency model: suggestion fetches, the research request, and the
//! upload request run independently; each component is the sole writer
//! of its own slice of state, and per-kind generation counters make the
//! last issued request win over stragglers.

pub mod controller;
mod event;
mod runtime;
mod session;
mod state;
mod suggest;
mod upload;
pub mod view;

pub use event::{ConsoleEvent, Effect};
pub use runtime::{ConsoleRuntime, SUCCESS_BANNER_TTL};
pub use state::{ConsoleState, Notice, Panel, UploadedFile};
pub use suggest::MIN_QUERY_CHARS;
pub use upload::ALLOWED_EXTENSIONS;
