//! Plain-text rendering of the console state.
//!
//! Presentation only: everything here is derived from [`ConsoleState`]
//! on each call and nothing is written back.

use super::state::{ConsoleState, Panel};

fn percent(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

/// Render the whole console: main panel, suggestion overlay, upload
/// banner, and any pending notice.
pub fn render(state: &ConsoleState) -> String {
    let mut out = String::new();

    match state.panel() {
        Panel::Loading => {
            out.push_str("Researching... this may take a moment.\n");
        }
        Panel::Results => {
            if let Some(result) = &state.results {
                let report = &result.research_report;
                out.push_str("=== Research Report ===\n\n");
                out.push_str(report.summary.trim_end());
                out.push_str("\n\nKey findings:\n");
                for finding in &report.key_findings {
                    out.push_str(&format!("  - {}\n", finding));
                }
                if !report.sources.is_empty() {
                    out.push_str("\nSources:\n");
                    for source in &report.sources {
                        out.push_str(&format!(
                            "  [{:>3}%] {}\n",
                            percent(source.relevance_score),
                            source.title
                        ));
                    }
                }
                out.push_str(&format!(
                    "\nConfidence {}% | {} sources | {} reasoning steps | {:.1}s\n",
                    percent(report.confidence_score),
                    result.sources_found,
                    result.reasoning_steps,
                    result.execution_time
                ));
            }
        }
        Panel::Welcome => {
            out.push_str("Type a research question to begin. :help lists commands.\n");
        }
    }

    if state.suggestion_overlay() {
        out.push_str("\nSuggestions (:pick <n> to use one):\n");
        for (i, s) in state.suggestions.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({}%, {}) - {}\n",
                i + 1,
                s.suggested_query,
                percent(s.confidence),
                s.refinement_type,
                s.rationale
            ));
        }
    }

    if state.is_uploading {
        out.push_str("\nUploading files...\n");
    } else if state.upload_success {
        out.push_str("\nFiles uploaded successfully.\n");
    }

    if let Some(notice) = &state.notice {
        out.push_str(&format!("\n!! {}\n", notice.message()));
    }

    out
}

/// Render the accumulated uploaded-file list
pub fn render_files(state: &ConsoleState) -> String {
    if state.uploaded_files.is_empty() {
        return "No files uploaded yet.\n".to_string();
    }
    let mut out = format!("Uploaded files ({}):\n", state.uploaded_files.len());
    for file in &state.uploaded_files {
        out.push_str(&format!("  - {}\n", file.name));
    }
    out
}
