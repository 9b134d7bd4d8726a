//! # Actions
//!
//! Everything that can happen on the chat surface becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! Backend answers? That's `Action::ReplySettled(outcome)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] describing the I/O the adapter has to
//! perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::App;

/// Shown in place of an answer whenever the request fails for any reason.
pub const BACKEND_ERROR_TEXT: &str = "Error contacting backend.";

/// How a single request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The backend returned a JSON body; `text` is already resolved
    /// (response → error → fallback).
    Answered { text: String, query: Option<String> },
    /// Transport, status, or parse failure. The cause is only logged.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Input box content changed.
    InputChanged(String),
    /// Submit the current input.
    Submit,
    /// The in-flight request settled.
    ReplySettled(Outcome),
    Quit,
}

/// I/O requested by the reducer, performed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue exactly one backend request for this query.
    SpawnRequest(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::InputChanged(text) => {
            app.input = text;
            Effect::None
        }
        Action::Submit => {
            if app.input.trim().is_empty() {
                debug!("Ignoring submit: input is blank");
                return Effect::None;
            }
            // One request at a time: later submits are dropped, not queued.
            if app.is_loading {
                debug!("Ignoring submit: request already in flight");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Thinking...");
            info!("Submitting query ({} bytes)", app.input.len());
            Effect::SpawnRequest(app.input.clone())
        }
        Action::ReplySettled(outcome) => {
            match outcome {
                Outcome::Answered { text, query } => {
                    debug!("Reply settled with {} bytes", text.len());
                    app.response = text;
                    app.last_query = query;
                    app.status_message = String::from("Answered");
                }
                Outcome::Failed(cause) => {
                    warn!("Request failed: {}", cause);
                    app.response = BACKEND_ERROR_TEXT.to_string();
                    app.last_query = None;
                    app.status_message = String::from("Request failed");
                }
            }
            app.is_loading = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn answered(text: &str) -> Action {
        Action::ReplySettled(Outcome::Answered {
            text: text.to_string(),
            query: None,
        })
    }

    #[test]
    fn test_input_changed_replaces_input() {
        let mut app = test_app();
        let effect = update(&mut app, Action::InputChanged("hi".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.input, "hi");
    }

    #[test]
    fn test_submit_empty_input_does_nothing() {
        let mut app = test_app();
        app.response = "previous".to_string();
        let before = app.clone();

        let effect = update(&mut app, Action::Submit);

        assert_eq!(effect, Effect::None);
        assert_eq!(app, before);
    }

    #[test]
    fn test_submit_whitespace_input_does_nothing() {
        let mut app = test_app();
        app.input = "  \t\n ".to_string();
        app.response = "previous".to_string();

        let effect = update(&mut app, Action::Submit);

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.response, "previous");
    }

    #[test]
    fn test_submit_sets_loading_and_spawns_request() {
        let mut app = test_app();
        app.input = "what is attention?".to_string();

        let effect = update(&mut app, Action::Submit);

        assert_eq!(effect, Effect::SpawnRequest("what is attention?".to_string()));
        assert!(app.is_loading);
        assert!(!app.can_submit());
    }

    #[test]
    fn test_submit_keeps_input() {
        let mut app = test_app();
        app.input = "keep me".to_string();
        update(&mut app, Action::Submit);
        update(&mut app, answered("ok"));
        assert_eq!(app.input, "keep me");
    }

    #[test]
    fn test_submit_sends_untrimmed_text() {
        let mut app = test_app();
        app.input = "  padded  ".to_string();
        let effect = update(&mut app, Action::Submit);
        assert_eq!(effect, Effect::SpawnRequest("  padded  ".to_string()));
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = test_app();
        app.input = "first".to_string();
        assert!(matches!(update(&mut app, Action::Submit), Effect::SpawnRequest(_)));

        app.input = "second".to_string();
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_answer_sets_response_and_clears_loading() {
        let mut app = test_app();
        app.input = "q".to_string();
        update(&mut app, Action::Submit);

        let effect = update(
            &mut app,
            Action::ReplySettled(Outcome::Answered {
                text: "hello".to_string(),
                query: Some("q".to_string()),
            }),
        );

        assert_eq!(effect, Effect::None);
        assert_eq!(app.response, "hello");
        assert_eq!(app.last_query.as_deref(), Some("q"));
        assert!(!app.is_loading);
    }

    #[test]
    fn test_failure_sets_error_text_and_clears_loading() {
        let mut app = test_app();
        app.input = "q".to_string();
        update(&mut app, Action::Submit);

        update(
            &mut app,
            Action::ReplySettled(Outcome::Failed("connection refused".to_string())),
        );

        assert_eq!(app.response, BACKEND_ERROR_TEXT);
        assert!(app.last_query.is_none());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_new_response_overwrites_previous() {
        let mut app = test_app();
        app.input = "q".to_string();
        update(&mut app, Action::Submit);
        update(&mut app, answered("first"));
        update(&mut app, Action::Submit);
        update(&mut app, answered("second"));
        assert_eq!(app.response, "second");
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
