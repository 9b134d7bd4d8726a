//! # Backend
//!
//! The one external collaborator: an HTTP service answering
//! `GET /chat?query=...` with a small JSON object.
//!
//! [`ChatBackend`] is the seam the TUI talks to; [`HttpBackend`] is the
//! reqwest implementation. [`settle`] turns one request into the
//! `Action` the reducer consumes, collapsing every failure into
//! [`Outcome::Failed`].

pub mod client;
pub mod http;
pub mod types;

pub use client::{BackendError, ChatBackend};
pub use http::HttpBackend;
pub use types::{ChatReply, NO_RESPONSE_TEXT};

use log::info;

use crate::core::action::{Action, Outcome};

/// Perform exactly one request and map its result to `Action::ReplySettled`.
pub async fn settle(backend: &dyn ChatBackend, query: &str) -> Action {
    let outcome = match backend.ask(query).await {
        Ok(reply) => {
            info!("{} backend answered", backend.name());
            Outcome::Answered {
                text: reply.display_text().to_string(),
                query: reply.query,
            }
        }
        Err(e) => Outcome::Failed(e.to_string()),
    };
    Action::ReplySettled(outcome)
}
