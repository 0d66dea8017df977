//! The single reducer every console event flows through.
//!
//! [`apply`] is deterministic and performs no I/O: it mutates the
//! [`ConsoleState`] record and returns the effects the runtime should
//! execute. Replaying the same event sequence over a fresh state always
//! produces the same state and effects.

use tracing::warn;

use super::event::{ConsoleEvent, Effect};
use super::state::ConsoleState;
use super::{session, suggest, upload};
use crate::export;

/// Apply one event to the console state, returning requested effects.
pub fn apply(state: &mut ConsoleState, event: ConsoleEvent) -> Vec<Effect> {
    match event {
        ConsoleEvent::QueryChanged(text) => {
            state.query = text;
            suggest::maybe_fetch(state)
        }
        ConsoleEvent::EnterPressed { modified } => {
            if modified {
                // Modifier+Enter inserts a newline, no submission
                state.query.push('\n');
                Vec::new()
            } else {
                submit(state, None)
            }
        }
        ConsoleEvent::Submitted(text) => submit(state, text),
        ConsoleEvent::SuggestionClicked(index) => match state.suggestions.get(index) {
            Some(suggestion) => {
                let text = suggestion.suggested_query.clone();
                state.query = text.clone();
                // Straight to research, bypassing any further suggestion fetch
                submit(state, Some(text))
            }
            None => {
                warn!(index, count = state.suggestions.len(), "Suggestion index out of range");
                Vec::new()
            }
        },
        ConsoleEvent::FilesSelected(files) => upload::select(state, files),
        ConsoleEvent::ExportRequested(format) => match &state.results {
            Some(result) => match export::render(result, format) {
                Ok(contents) => vec![Effect::SaveExport {
                    file_name: format.file_name(),
                    contents,
                }],
                Err(e) => {
                    warn!(error = %e, "Export rendering failed");
                    Vec::new()
                }
            },
            // Nothing to export is a silent no-op, not an error
            None => Vec::new(),
        },
        ConsoleEvent::SuggestionsSettled {
            generation,
            outcome,
        } => suggest::settle(state, generation, outcome),
        ConsoleEvent::ResearchSettled {
            generation,
            outcome,
        } => session::settle(state, generation, outcome),
        ConsoleEvent::UploadSettled {
            generation,
            names,
            outcome,
        } => upload::settle(state, generation, names, outcome),
        ConsoleEvent::BannerElapsed { generation } => upload::banner_elapsed(state, generation),
        ConsoleEvent::NoticeDismissed => {
            state.notice = None;
            Vec::new()
        }
    }
}

/// Submit `text` (or the current query) for research. Whitespace-only
/// input is a no-op. Otherwise the prior report and the suggestion
/// overlay are cleared before the request goes out.
fn submit(state: &mut ConsoleState, text: Option<String>) -> Vec<Effect> {
    let text = text.unwrap_or_else(|| state.query.clone());
    if text.trim().is_empty() {
        return Vec::new();
    }

    state.query = text.clone();
    state.suggestions.clear();
    state.show_suggestions = false;
    session::begin(state, text)
}
