//! # AskButton Component
//!
//! The submit control. Enabled it reads `Ask`; while a request is in flight
//! it is dimmed, reads `Thinking...`, and the event loop refuses clicks on it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const ASK_LABEL: &str = "Ask";
pub const LOADING_LABEL: &str = "Thinking...";
pub const BUTTON_HEIGHT: u16 = 3;

pub struct AskButton {
    pub loading: bool,
}

impl AskButton {
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }

    pub fn label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { ASK_LABEL }
    }

    pub fn is_enabled(&self) -> bool {
        !self.loading
    }
}

impl Component for AskButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_enabled() {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );

        frame.render_widget(button, area);
    }
}
