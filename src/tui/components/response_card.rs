//! # ResponseCard Component
//!
//! Shows the last response text, prefixed with `Bot:`, inside a bordered
//! card. Long answers scroll vertically via `tui-scrollview`.
//!
//! The card renders nothing while the response text is empty.
//!
//! Text is wrapped up front with `textwrap` so the scroll view's content
//! height is exactly the number of lines rendered.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const BOT_PREFIX: &str = "Bot:";

/// Scroll position of the card, kept across frames.
#[derive(Default)]
pub struct ResponseCardState {
    pub scroll_state: ScrollViewState,
}

impl ResponseCardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top (new response arrived).
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for ResponseCardState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        Some(())
    }
}

pub struct ResponseCard<'a> {
    pub response: &'a str,
    pub last_query: Option<&'a str>,
    pub state: &'a mut ResponseCardState,
}

impl<'a> ResponseCard<'a> {
    pub fn new(
        response: &'a str,
        last_query: Option<&'a str>,
        state: &'a mut ResponseCardState,
    ) -> Self {
        Self {
            response,
            last_query,
            state,
        }
    }

    /// Wrap the card's text to `width` columns.
    pub fn wrapped_lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(1));
        let mut lines = Vec::new();

        if let Some(query) = self.last_query {
            let echo = format!("You asked: {query}");
            let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
            lines.extend(
                textwrap::wrap(&echo, width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l.into_owned(), style))),
            );
            lines.push(Line::default());
        }

        let body = format!("{BOT_PREFIX} {}", self.response);
        for (index, line) in textwrap::wrap(&body, width).into_iter().enumerate() {
            let line = line.into_owned();
            if index == 0
                && let Some(rest) = line.strip_prefix(BOT_PREFIX)
            {
                lines.push(Line::from(vec![
                    Span::styled(BOT_PREFIX, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(rest.to_string()),
                ]));
            } else {
                lines.push(Line::from(line));
            }
        }
        lines
    }
}

impl Component for ResponseCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.response.is_empty() {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green).add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave one column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let lines = self.wrapped_lines(content_width);
        let content_height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, content_height),
        );

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
