//! Integration tests for the backend HTTP client
//!
//! Tests client behavior against the wire contract using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_console::backend::{BackendClient, FileUpload};
use research_console::config::{BackendConfig, RequestConfig};
use research_console::error::BackendError;

/// Create a test client pointing to the mock server
fn create_test_client(base_url: &str) -> BackendClient {
    let config = BackendConfig {
        base_url: base_url.to_string(),
    };
    let request_config = RequestConfig { timeout_ms: 5000 };

    BackendClient::new(&config, request_config).expect("Failed to create client")
}

fn report_body() -> serde_json::Value {
    json!({
        "success": true,
        "research_report": {
            "summary": "Caching substantially reduces tail latency.",
            "key_findings": ["cache hit ratio dominates", "p99 improves up to 40%"],
            "confidence_score": 0.88,
            "sources": [
                {"title": "Paper A", "content": "body text", "relevance_score": 0.7},
                {"title": "Paper B", "content": "more text", "relevance_score": 0.6}
            ]
        },
        "execution_time": 12.5,
        "sources_found": 8,
        "reasoning_steps": 4
    })
}

mod research_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_research_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/research"))
            .and(body_json(json!({
                "query": "impact of caching on latency",
                "max_sources": 10
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .research("impact of caching on latency", 10)
            .await
            .expect("research should succeed");

        assert!(result.success);
        assert_eq!(
            result.research_report.summary,
            "Caching substantially reduces tail latency."
        );
        assert_eq!(result.research_report.key_findings.len(), 2);
        assert_eq!(result.research_report.sources.len(), 2);
        assert_eq!(result.sources_found, 8);
        assert_eq!(result.reasoning_steps, 4);
    }

    #[tokio::test]
    async fn test_research_server_error_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/research"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.research("query", 10).await.unwrap_err();

        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_research_malformed_body_maps_to_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/research"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client.research("query", 10).await.unwrap_err();

        assert!(matches!(err, BackendError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_research_timeout() {
        use std::time::Duration;

        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/research"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(report_body())
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&mock_server)
            .await;

        let config = BackendConfig {
            base_url: mock_server.uri(),
        };
        let client = BackendClient::new(&config, RequestConfig { timeout_ms: 100 }).unwrap();

        let err = client.research("query", 10).await.unwrap_err();
        assert!(matches!(err, BackendError::Timeout { timeout_ms: 100 }));
    }
}

mod suggest_tests {
    use super::*;

    #[tokio::test]
    async fn test_successful_suggest_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/suggest"))
            .and(body_json(json!({"query": "impact of caching on latency"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "suggestions": [{
                    "suggested_query": "impact of caching on p99 latency",
                    "refinement_type": "specificity",
                    "rationale": "narrows metric",
                    "confidence": 0.82,
                    "expected_improvement": 0.3
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let response = client
            .suggest("impact of caching on latency")
            .await
            .expect("suggest should succeed");

        assert!(response.success);
        assert_eq!(response.suggestions.len(), 1);
        assert_eq!(
            response.suggestions[0].suggested_query,
            "impact of caching on p99 latency"
        );
        assert!((response.suggestions[0].confidence - 0.82).abs() < 0.001);
    }

    #[tokio::test]
    async fn test_suggest_without_suggestions_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/suggest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let response = client.suggest("query").await.unwrap();

        assert!(!response.success);
        assert!(response.suggestions.is_empty());
    }
}

mod ingest_tests {
    use super::*;

    #[tokio::test]
    async fn test_ingest_sends_one_multipart_request_with_repeated_files_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ingest"))
            .and(body_string_contains("name=\"files\""))
            .and(body_string_contains("filename=\"notes.md\""))
            .and(body_string_contains("filename=\"paper.pdf\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "documents_indexed": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let files = vec![
            FileUpload::new("notes.md", b"# notes".to_vec()),
            FileUpload::new("paper.pdf", b"%PDF-1.4".to_vec()),
        ];

        let response = client.ingest(files).await.expect("ingest should succeed");
        assert!(response.success);
    }

    #[tokio::test]
    async fn test_ingest_failure_maps_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ingest"))
            .respond_with(ResponseTemplate::new(503).set_body_string("ingest unavailable"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client
            .ingest(vec![FileUpload::new("a.txt", b"x".to_vec())])
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Api { status: 503, .. }));
    }
}
