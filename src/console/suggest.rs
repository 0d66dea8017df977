//! Suggestion engine: best-effort query refinement fetches.
//!
//! Suggestion traffic must never interrupt typing: failures are logged
//! and swallowed, and a stale response can never clobber the list
//! fetched for a later keystroke.

use tracing::{debug, warn};

use super::event::Effect;
use super::state::ConsoleState;
use crate::backend::SuggestResponse;
use crate::error::BackendError;

/// Queries shorter than this issue no suggestion request.
pub const MIN_QUERY_CHARS: usize = 3;

/// Issue a suggestion fetch for the current query, if it is long
/// enough. Short input emits nothing and leaves any suggestions
/// already on screen untouched.
pub(super) fn maybe_fetch(state: &mut ConsoleState) -> Vec<Effect> {
    if state.query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    state.suggest_generation += 1;
    vec![Effect::FetchSuggestions {
        query: state.query.clone(),
        generation: state.suggest_generation,
    }]
}

/// Apply the settled outcome of a suggestion request.
///
/// The list is replaced wholesale on a successful response; the overlay
/// shows only when that response was non-empty.
pub(super) fn settle(
    state: &mut ConsoleState,
    generation: u64,
    outcome: Result<SuggestResponse, BackendError>,
) -> Vec<Effect> {
    if generation != state.suggest_generation {
        debug!(
            generation,
            current = state.suggest_generation,
            "Discarding stale suggestion response"
        );
        return Vec::new();
    }

    match outcome {
        Ok(response) if response.success => {
            state.suggestions = response.suggestions;
            state.show_suggestions = !state.suggestions.is_empty();
        }
        Ok(_) => {
            debug!("Suggestion request reported success=false");
        }
        Err(e) => {
            warn!(error = %e, "Suggestion fetch failed");
        }
    }

    Vec::new()
}
