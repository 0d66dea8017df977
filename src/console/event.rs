use crate::backend::{FileUpload, IngestResponse, ResearchResult, SuggestResponse};
use crate::error::BackendError;
use crate::export::ExportFormat;

/// Everything that can happen to the console: user input and settled
/// network requests alike. The reducer consumes events; it never
/// performs I/O itself.
#[derive(Debug)]
pub enum ConsoleEvent {
    /// The query text changed (a keystroke, in UI terms)
    QueryChanged(String),
    /// Enter pressed in the query box; `modified` means a modifier key
    /// was held, which inserts a newline instead of submitting
    EnterPressed { modified: bool },
    /// Explicit submission; `None` submits the current query text
    Submitted(Option<String>),
    /// A suggestion row was clicked (index into the current list)
    SuggestionClicked(usize),
    /// Files were selected for ingestion
    FilesSelected(Vec<FileUpload>),
    /// The user asked to export the current report
    ExportRequested(ExportFormat),
    /// A suggestion request settled
    SuggestionsSettled {
        generation: u64,
        outcome: Result<SuggestResponse, BackendError>,
    },
    /// A research request settled
    ResearchSettled {
        generation: u64,
        outcome: Result<ResearchResult, BackendError>,
    },
    /// An upload request settled; `names` are the files it carried
    UploadSettled {
        generation: u64,
        names: Vec<String>,
        outcome: Result<IngestResponse, BackendError>,
    },
    /// The upload-success banner timer elapsed
    BannerElapsed { generation: u64 },
    /// The user dismissed the blocking notice
    NoticeDismissed,
}

/// Side effects requested by the reducer, executed by
/// [`ConsoleRuntime`](super::ConsoleRuntime). Network effects
/// carry the generation that tags their eventual `*Settled` event.
#[derive(Debug)]
pub enum Effect {
    /// POST the query to `/suggest`
    FetchSuggestions { query: String, generation: u64 },
    /// POST the query to `/research`
    RunResearch {
        query: String,
        max_sources: u32,
        generation: u64,
    },
    /// POST the files to `/ingest`
    UploadFiles {
        files: Vec<FileUpload>,
        generation: u64,
    },
    /// Start (or restart) the 3-second banner auto-clear timer
    ScheduleBannerClear { generation: u64 },
    /// Write an exported report to disk; purely client-local
    SaveExport { file_name: String, contents: String },
}
