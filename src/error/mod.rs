use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Errors from the research backend HTTP API
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from writing an exported report to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "missing key".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: missing key");

        let err = AppError::Internal {
            message: "unexpected".to_string(),
        };
        assert_eq!(err.to_string(), "Internal error: unexpected");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - service unavailable");

        let err = BackendError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = BackendError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_backend_error_conversion_to_app_error() {
        let backend_err = BackendError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = backend_err.into();
        assert!(matches!(app_err, AppError::Backend(_)));
    }

    #[test]
    fn test_export_error_conversion_to_app_error() {
        let export_err = ExportError::Write {
            path: "/nope/report.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let app_err: AppError = export_err.into();
        assert!(matches!(app_err, AppError::Export(_)));
        assert!(app_err.to_string().contains("/nope/report.json"));
    }
}
