use serde::{Deserialize, Serialize};

use crate::backend::{ResearchResult, Suggestion};

/// Record of one successfully ingested file; binary content is not
/// retained client-side after transfer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub name: String,
}

/// Blocking, user-visible failure notice
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Notice {
    ResearchFailed,
    UploadFailed,
}

impl Notice {
    /// Message shown to the user, naming the likely cause
    pub fn message(&self) -> &'static str {
        match self {
            Notice::ResearchFailed => {
                "Error conducting research. Please make sure the backend is running and try again."
            }
            Notice::UploadFailed => {
                "Error uploading files. Please make sure the backend is running and try again."
            }
        }
    }
}

/// Which of the mutually exclusive main panels is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Results,
    Welcome,
}

/// The entire console UI state as one explicit, serializable record.
///
/// Every user event and every settled network request flows through the
/// single reducer in [`controller`](super::controller), which is the only
/// code that mutates this struct. All I/O is expressed as effects, so a
/// sequence of events replays deterministically in tests.
///
/// The `*_generation` counters tag outbound requests of each kind; a
/// settled response carrying a stale generation is discarded, so the
/// last *request* wins even when responses arrive out of order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsoleState {
    /// Current query text (mirrors the input box)
    pub query: String,
    /// True while a research request is in flight
    pub is_loading: bool,
    /// The last successful research result, replaced wholesale
    pub results: Option<ResearchResult>,
    /// Most recent suggestion list, replaced wholesale
    pub suggestions: Vec<Suggestion>,
    /// Whether the suggestion overlay is shown
    pub show_suggestions: bool,
    /// Append-only list of successfully ingested files
    pub uploaded_files: Vec<UploadedFile>,
    /// True while an upload request is in flight
    pub is_uploading: bool,
    /// True while the transient upload-success banner is visible
    pub upload_success: bool,
    /// Pending blocking notice, if any
    pub notice: Option<Notice>,
    /// Cap passed to the backend with each research request
    pub max_sources: u32,
    pub suggest_generation: u64,
    pub research_generation: u64,
    pub upload_generation: u64,
    pub banner_generation: u64,
}

impl ConsoleState {
    /// Create state with the given research source cap
    pub fn new(max_sources: u32) -> Self {
        Self {
            max_sources,
            ..Self::default()
        }
    }

    /// Derived main-panel visibility: loading wins, then results,
    /// then the welcome fallback. Exactly one is ever shown.
    pub fn panel(&self) -> Panel {
        if self.is_loading {
            Panel::Loading
        } else if self.results.is_some() {
            Panel::Results
        } else {
            Panel::Welcome
        }
    }

    /// Whether the suggestion overlay is visible. Orthogonal to the
    /// main panel; never stored, always derived.
    pub fn suggestion_overlay(&self) -> bool {
        self.show_suggestions && !self.suggestions.is_empty()
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            results: None,
            suggestions: Vec::new(),
            show_suggestions: false,
            uploaded_files: Vec::new(),
            is_uploading: false,
            upload_success: false,
            notice: None,
            max_sources: 10,
            suggest_generation: 0,
            research_generation: 0,
            upload_generation: 0,
            banner_generation: 0,
        }
    }
}
