//! HTTP client and wire types for the research backend.
//!
//! The backend exposes three endpoints: `/research` for running a query,
//! `/suggest` for query refinement candidates, and `/ingest` for document
//! uploads. This module owns the request/response shapes and a thin
//! reqwest-based client; it holds no UI state.

mod client;
mod types;

pub use client::BackendClient;
pub use types::{
    FileUpload, IngestResponse, ResearchReport, ResearchRequest, ResearchResult, Source,
    SuggestRequest, SuggestResponse, Suggestion,
};
