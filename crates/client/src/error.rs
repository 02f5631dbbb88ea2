//! Typed error enums for the client crate.

use thiserror::Error;

/// Errors from fetching the specification document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("specification request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("specification request returned HTTP {code}")]
    HttpStatus { code: u16 },
    #[error("specification response is not a valid document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl FetchError {
    /// Network failure, timeout or non-2xx status.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Malformed JSON or structural mismatch.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Errors from Telegram Bot API calls.
#[derive(Debug, Error)]
pub enum BotApiError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("Bot API error {code}: {description}")]
    Api { code: i64, description: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl BotApiError {
    /// Whether this error is transient and the call may be repeated.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::Api { code, .. } => matches!(code, 429 | 500 | 502 | 503),
            _ => false,
        }
    }
}
