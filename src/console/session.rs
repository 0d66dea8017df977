//! Research session: owns the loading flag and the research result.

use tracing::{debug, error};

use super::event::Effect;
use super::state::{ConsoleState, Notice};
use crate::backend::ResearchResult;
use crate::error::BackendError;

/// Begin a new research request for `query`.
///
/// Clears the prior result before the request goes out, so a failure
/// lands the console back on the welcome panel with nothing stale on
/// screen. Bumping the generation discards interest in the outcome of
/// any request still in flight.
pub(super) fn begin(state: &mut ConsoleState, query: String) -> Vec<Effect> {
    state.results = None;
    state.is_loading = true;
    state.research_generation += 1;

    vec![Effect::RunResearch {
        query,
        max_sources: state.max_sources,
        generation: state.research_generation,
    }]
}

/// Apply the settled outcome of a research request.
pub(super) fn settle(
    state: &mut ConsoleState,
    generation: u64,
    outcome: Result<ResearchResult, BackendError>,
) -> Vec<Effect> {
    if generation != state.research_generation {
        debug!(
            generation,
            current = state.research_generation,
            "Discarding stale research response"
        );
        return Vec::new();
    }

    state.is_loading = false;
    match outcome {
        Ok(result) => {
            state.results = Some(result);
        }
        Err(e) => {
            error!(error = %e, "Research request failed");
            state.notice = Some(Notice::ResearchFailed);
        }
    }

    Vec::new()
}
