//! Typed error enum for the service layer.
//!
//! Unifies documentation fetch failures and rejected replies so the
//! dispatcher can report them without downcasting.

use botapi_docs_client::{BotApiError, FetchError};
use thiserror::Error;

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Fetching the specification document failed.
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    /// The Bot API rejected an outbound reply.
    #[error("reply: {0}")]
    Reply(#[from] BotApiError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_transport(),
            Self::Reply(e) => e.is_transient(),
        }
    }
}
