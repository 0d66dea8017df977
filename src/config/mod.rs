use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
    pub export: ExportConfig,
}

/// Research backend configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
}

/// Report export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub directory: PathBuf,
    pub max_sources: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = env::var("RESEARCH_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::Config {
                message: format!("RESEARCH_BACKEND_URL must be an http(s) URL, got '{base_url}'"),
            });
        }
        let backend = BackendConfig { base_url };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120_000),
        };

        let export = ExportConfig {
            directory: PathBuf::from(env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string())),
            max_sources: env::var("MAX_SOURCES")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(10),
        };

        Ok(Config {
            backend,
            logging,
            request,
            export,
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 120_000,
        }
    }
}
