use crate::analysis::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Expected: unknown tickers and upstream data gaps
            ApiError::Application { .. } => LogLevel::Warn,

            // Non-critical: rate limited, the next submission usually succeeds
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Info,

            // Critical: the backend itself failed
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Error,

            // Critical: the backend is speaking a different protocol
            ApiError::Decode(_) | ApiError::Malformed(_) => LogLevel::Error,

            // Connection refused usually means the backend is not running
            ApiError::Reqwest(e) if e.is_connect() => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
