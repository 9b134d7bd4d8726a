use std::fmt;

use async_trait::async_trait;

use super::types::ChatReply;

/// Errors that can occur while asking the backend.
/// The UI shows one fixed string for all of them; the variants exist for the log.
#[derive(Debug)]
pub enum BackendError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The body was not usable JSON.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Status { status, body } => {
                write!(f, "backend error (HTTP {status}): {body}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Returns the name of the backend, for logging.
    fn name(&self) -> &str;

    /// Sends one query and waits for the reply. Implementations must not retry.
    async fn ask(&self, query: &str) -> Result<ChatReply, BackendError>;
}
