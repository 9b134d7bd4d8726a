//! reqwest implementation of [`ChatBackend`].
//!
//! One GET per call, no retries, no client-side timeout: whatever the
//! transport does on its own is all the time limit there is.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{BackendError, ChatBackend};
use super::types::ChatReply;

/// Path of the chat endpoint, appended to the base URL.
pub const CHAT_PATH: &str = "/chat";
/// Name of the query-string parameter carrying the user's text.
pub const QUERY_PARAM: &str = "query";

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, query: &str) -> Result<ChatReply, BackendError> {
        let url = self.chat_url();
        info!("GET {} (query {} bytes)", url, query.len());

        // `.query()` form-urlencodes the text
        let response = self
            .client
            .get(&url)
            .query(&[(QUERY_PARAM, query)])
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Backend response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Backend error: {} - {}", status.as_u16(), body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        debug!("Backend body: {} bytes", body.len());

        ChatReply::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_joins_path() {
        let backend = HttpBackend::new("http://localhost:8000");
        assert_eq!(backend.chat_url(), "http://localhost:8000/chat");
    }

    #[test]
    fn test_chat_url_strips_trailing_slash() {
        let backend = HttpBackend::new("http://localhost:8000/");
        assert_eq!(backend.chat_url(), "http://localhost:8000/chat");
    }
}
