//! Upload manager: document selection, the ingest request, and the
//! transient success banner.

use tracing::{debug, error, warn};

use super::event::Effect;
use super::state::{ConsoleState, Notice, UploadedFile};
use crate::backend::{FileUpload, IngestResponse};
use crate::error::BackendError;

/// Extensions accepted for ingestion. Client-side filter only; the
/// backend is free to reject anything it likes on top of this.
pub const ALLOWED_EXTENSIONS: [&str; 5] = [".pdf", ".txt", ".docx", ".md", ".html"];

/// Filter the selected files and start one upload request for whatever
/// passes. Selecting nothing acceptable is a no-op.
pub(super) fn select(state: &mut ConsoleState, files: Vec<FileUpload>) -> Vec<Effect> {
    let accepted: Vec<FileUpload> = files
        .into_iter()
        .filter(|file| {
            let keep = ALLOWED_EXTENSIONS.contains(&file.extension().as_str());
            if !keep {
                warn!(name = %file.name, "Skipping file with unsupported extension");
            }
            keep
        })
        .collect();

    if accepted.is_empty() {
        return Vec::new();
    }

    state.is_uploading = true;
    state.upload_success = false;
    state.upload_generation += 1;

    vec![Effect::UploadFiles {
        files: accepted,
        generation: state.upload_generation,
    }]
}

/// Apply the settled outcome of an upload request.
///
/// `is_uploading` is cleared unconditionally. On success the submitted
/// names are appended to the accumulated file list (never pruned by
/// this layer) and the success banner is scheduled to auto-clear.
pub(super) fn settle(
    state: &mut ConsoleState,
    generation: u64,
    names: Vec<String>,
    outcome: Result<IngestResponse, BackendError>,
) -> Vec<Effect> {
    if generation != state.upload_generation {
        debug!(
            generation,
            current = state.upload_generation,
            "Discarding stale upload response"
        );
        return Vec::new();
    }

    state.is_uploading = false;
    match outcome {
        Ok(response) if response.success => {
            state
                .uploaded_files
                .extend(names.into_iter().map(|name| UploadedFile { name }));
            state.upload_success = true;
            state.banner_generation += 1;
            vec![Effect::ScheduleBannerClear {
                generation: state.banner_generation,
            }]
        }
        Ok(_) => {
            error!("Ingest request reported success=false");
            state.notice = Some(Notice::UploadFailed);
            Vec::new()
        }
        Err(e) => {
            error!(error = %e, "Upload request failed");
            state.notice = Some(Notice::UploadFailed);
            Vec::new()
        }
    }
}

/// Clear the success banner when its timer elapses, unless a newer
/// upload cycle has already superseded this one.
pub(super) fn banner_elapsed(state: &mut ConsoleState, generation: u64) -> Vec<Effect> {
    if generation == state.banner_generation {
        state.upload_success = false;
    }
    Vec::new()
}
