//! # InputBox Component
//!
//! Single-line query field.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing and bracketed paste)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter without clearing the buffer
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer and cursor are internal state; the parent mirrors the buffer
//! into `App::input` whenever `ContentChanged` is emitted. The line scrolls
//! horizontally so the cursor always stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border rows/cols around the text line.
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter
    Submit,
    /// Buffer text changed
    ContentChanged,
    /// Cursor moved, text unchanged
    CursorMoved,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Hint shown while the buffer is empty (Prop)
    pub placeholder: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible display column
    scroll_cols: usize,
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl InputBox {
    pub fn new(placeholder: String) -> Self {
        Self {
            buffer: String::new(),
            placeholder,
            cursor: 0,
            scroll_cols: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Keep the cursor column inside `[scroll_cols, scroll_cols + width)`.
    fn update_scroll(&mut self, width: usize) {
        let cursor_col = self.buffer[..self.cursor].width();
        if cursor_col < self.scroll_cols {
            self.scroll_cols = cursor_col;
        } else if width > 0 && cursor_col >= self.scroll_cols + width {
            self.scroll_cols = cursor_col + 1 - width;
        }
    }

    /// The slice of the buffer that fits in `width` columns after scrolling.
    fn visible_text(&self, width: usize) -> String {
        let mut col = 0;
        let mut visible = String::new();
        for c in self.buffer.chars() {
            let cw = c.width().unwrap_or(0);
            if col >= self.scroll_cols {
                if col + cw > self.scroll_cols + width {
                    break;
                }
                visible.push(c);
            }
            col += cw;
        }
        visible
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2) as usize;
        self.update_scroll(width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("Query");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text(width)).style(Style::default().fg(Color::Green))
        };

        frame.render_widget(paragraph.block(block), area);

        let cursor_col = self.buffer[..self.cursor].width() - self.scroll_cols;
        let x = area.x + 1 + cursor_col.min(width) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut bytes = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut bytes));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks become spaces
                let flattened: String = text
                    .chars()
                    .filter(|c| *c != '\r')
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
