use serde::{Deserialize, Serialize};

/// Request body for the `/research` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ResearchRequest {
    pub query: String,
    pub max_sources: u32,
}

/// Settled outcome of one research request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchResult {
    pub success: bool,
    pub research_report: ResearchReport,
    /// Wall-clock time the backend spent, in seconds
    pub execution_time: f64,
    pub sources_found: u64,
    pub reasoning_steps: u64,
}

/// Structured report produced by a completed research request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchReport {
    pub summary: String,
    pub key_findings: Vec<String>,
    /// Backend confidence in the report, 0.0-1.0
    pub confidence_score: f64,
    pub sources: Vec<Source>,
}

/// One source document consulted by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub title: String,
    pub content: String,
    /// Relevance to the query, 0.0-1.0
    pub relevance_score: f64,
}

/// Request body for the `/suggest` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SuggestRequest {
    pub query: String,
}

/// Response from the `/suggest` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestResponse {
    pub success: bool,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// Backend-proposed refinement of the current query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub suggested_query: String,
    pub refinement_type: String,
    pub rationale: String,
    /// Backend confidence in the refinement, 0.0-1.0
    pub confidence: f64,
    pub expected_improvement: f64,
}

/// Response from the `/ingest` endpoint (extra fields ignored)
#[derive(Debug, Clone, Deserialize)]
pub struct IngestResponse {
    pub success: bool,
}

/// A file selected for ingestion; bytes are consumed by the upload
/// request and not retained afterwards
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Lowercased extension including the dot, or empty string
    pub fn extension(&self) -> String {
        match self.name.rfind('.') {
            Some(idx) => self.name[idx..].to_ascii_lowercase(),
            None => String::new(),
        }
    }

    /// MIME type for the multipart part, guessed from the extension
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_str() {
            ".pdf" => "application/pdf",
            ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ".html" => "text/html",
            ".md" => "text/markdown",
            _ => "text/plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_research_result_deserializes_full_shape() {
        let json = r#"{
            "success": true,
            "research_report": {
                "summary": "Caching reduces tail latency.",
                "key_findings": ["cache hit ratio dominates", "p99 improves 40%"],
                "confidence_score": 0.9,
                "sources": [
                    {"title": "Paper A", "content": "...", "relevance_score": 0.7}
                ]
            },
            "execution_time": 12.5,
            "sources_found": 8,
            "reasoning_steps": 4
        }"#;

        let result: ResearchResult = serde_json::from_str(json).unwrap();
        assert!(result.success);
        assert_eq!(result.research_report.key_findings.len(), 2);
        assert_eq!(result.research_report.sources[0].title, "Paper A");
        assert_eq!(result.sources_found, 8);
    }

    #[test]
    fn test_suggest_response_defaults_missing_suggestions() {
        let response: SuggestResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.success);
        assert!(response.suggestions.is_empty());
    }

    #[test]
    fn test_file_upload_mime_guessing() {
        assert_eq!(FileUpload::new("a.PDF", vec![]).mime_type(), "application/pdf");
        assert_eq!(FileUpload::new("notes.md", vec![]).mime_type(), "text/markdown");
        assert_eq!(FileUpload::new("page.html", vec![]).mime_type(), "text/html");
        assert_eq!(FileUpload::new("raw.txt", vec![]).mime_type(), "text/plain");
        assert_eq!(FileUpload::new("noext", vec![]).mime_type(), "text/plain");
    }
}
