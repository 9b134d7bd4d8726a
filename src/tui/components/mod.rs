//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: title, status message, loading spinner
//! - `AskButton`: the submit control, `Ask` / `Thinking...`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: single-line query field
//! - `ResponseCard`: scrollable `Bot:` answer card (state in `ResponseCardState`)
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App`:
//!
//! ```rust,ignore
//! AskButton::new(app.is_loading).render(frame, button_area);
//! ```

pub mod ask_button;
pub mod input_box;
pub mod response_card;
mod title_bar;

pub use ask_button::AskButton;
pub use input_box::{InputBox, InputEvent};
pub use response_card::{ResponseCard, ResponseCardState};
pub use title_bar::TitleBar;
