//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{BackendError, ChatBackend, ChatReply};

/// Answers every query with the same reply and records what it was asked.
pub struct StaticBackend {
    reply: ChatReply,
    calls: Mutex<Vec<String>>,
}

impl StaticBackend {
    pub fn new(reply: ChatReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn ask(&self, query: &str) -> Result<ChatReply, BackendError> {
        self.calls.lock().unwrap().push(query.to_string());
        Ok(self.reply.clone())
    }
}

/// Fails every query with a network error.
pub struct FailingBackend;

#[async_trait]
impl ChatBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn ask(&self, _query: &str) -> Result<ChatReply, BackendError> {
        Err(BackendError::Network("connection refused".to_string()))
    }
}

/// Creates a test App with fixed title and placeholder.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new("Test Bot".to_string(), "Ask me".to_string())
}
