//! # TitleBar Component
//!
//! Single-line header: the surface title, the status message, and a spinner
//! while a request is in flight.
//!
//! Purely presentational. All three props come from `App`, the spinner frame
//! from the event loop's animation clock.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar {
    pub title: String,
    pub status_message: String,
    /// `Some(frame)` while loading; drives the spinner glyph.
    pub spinner_frame: Option<usize>,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, spinner_frame: Option<usize>) -> Self {
        Self {
            title,
            status_message,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            if let Some(index) = self.spinner_frame {
                let glyph = SPINNER_FRAMES[index % SPINNER_FRAMES.len()];
                spans.push(Span::styled(
                    format!("{glyph} "),
                    Style::default().fg(Color::Yellow),
                ));
            }
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
