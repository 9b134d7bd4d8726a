//! # Application State
//!
//! The chat surface owns exactly three interaction values plus a little
//! display-only text. Presentation state (cursor, scroll) lives in `tui`.
//!
//! ```text
//! App
//! ├── input: String            // current query text, never cleared on submit
//! ├── response: String         // last settled answer or error, "" initially
//! ├── is_loading: bool         // true while a request is in flight
//! ├── last_query: Option<String> // query echoed back by the backend
//! ├── status_message: String   // title bar text
//! ├── title: String            // heading shown in the title bar
//! └── placeholder: String      // hint shown while input is empty
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;

pub const WELCOME_STATUS: &str = "Ready";

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub input: String,
    pub response: String,
    pub is_loading: bool,
    pub last_query: Option<String>,
    pub status_message: String,
    pub title: String,
    pub placeholder: String,
}

impl App {
    pub fn new(title: String, placeholder: String) -> Self {
        Self {
            input: String::new(),
            response: String::new(),
            is_loading: false,
            last_query: None,
            status_message: String::from(WELCOME_STATUS),
            title,
            placeholder,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone(), config.placeholder.clone())
    }

    /// Whether the submit control accepts presses right now.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }
}
