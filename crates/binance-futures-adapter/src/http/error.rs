/*
[INPUT]:  Error sources (validation, config, HTTP, API, serialization, order log)
[OUTPUT]: Structured error types with a coarse category for callers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing the failure taxonomy
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum FuturesError {
    /// Caller input rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Missing credentials or unusable client settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Exchange rejected the request (HTTP >= 400)
    #[error("Binance API error {status} ({}): {message}", display_code(.code))]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// Response body was not a JSON object on a non-error status
    #[error("Non-JSON response from Binance API (HTTP {status})")]
    NonJsonResponse { status: u16 },

    /// HTTP error status whose body could not be parsed
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Request did not complete within the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Any other transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Order log sink failed to record an entry
    #[error("Order log error: {0}")]
    Log(#[from] std::io::Error),
}

/// Coarse failure category, one per caller-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Api,
    Timeout,
    Transport,
    Unexpected,
}

impl FuturesError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FuturesError::Validation(_) => ErrorKind::Validation,
            FuturesError::Config(_) | FuturesError::UrlParse(_) => ErrorKind::Configuration,
            FuturesError::Api { .. } | FuturesError::NonJsonResponse { .. } => ErrorKind::Api,
            FuturesError::Timeout { .. } => ErrorKind::Timeout,
            FuturesError::HttpStatus { .. } | FuturesError::Http(_) => ErrorKind::Transport,
            FuturesError::Serialization(_) | FuturesError::Log(_) => ErrorKind::Unexpected,
        }
    }

    /// Provider error code, when the exchange supplied one
    pub fn provider_code(&self) -> Option<i64> {
        match self {
            FuturesError::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Build a transport error, classifying timeouts separately
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            FuturesError::Timeout {
                duration: timeout_secs,
            }
        } else {
            FuturesError::Http(err)
        }
    }

    /// Create an API error from status code, optional provider code and message
    pub fn api_error(status: StatusCode, code: Option<i64>, message: impl Into<String>) -> Self {
        FuturesError::Api {
            status: status.as_u16(),
            code,
            message: message.into(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        FuturesError::Validation(message.into())
    }
}

fn display_code(code: &Option<i64>) -> String {
    code.map_or_else(|| "n/a".to_string(), |code| code.to_string())
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, FuturesError>;
