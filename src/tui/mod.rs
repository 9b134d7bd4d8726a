//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Requests
//!
//! `Effect::SpawnRequest` spawns one tokio task that calls
//! [`backend::settle`] and sends the resulting action back over a
//! `std::sync::mpsc` channel, drained once per loop iteration.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::backend::{self, ChatBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ResponseCardState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub response_card: ResponseCardState,
}

impl TuiState {
    pub fn new(placeholder: String) -> Self {
        Self {
            input_box: InputBox::new(placeholder),
            response_card: ResponseCardState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Route one terminal event. Returns the effect the loop has to perform.
///
/// Clicks on the Ask button only count while it is enabled; Enter goes
/// through the same reducer, which ignores it while a request is in flight.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> Effect {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::MouseClick(column, row) => {
            if ui::hit_test_button(column, row, frame_area) && app.can_submit() {
                update(app, Action::Submit)
            } else {
                Effect::None
            }
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.response_card.handle_event(&event);
            Effect::None
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::ContentChanged) => {
                update(app, Action::InputChanged(tui.input_box.buffer.clone()))
            }
            Some(InputEvent::Submit) => update(app, Action::Submit),
            Some(InputEvent::CursorMoved) | None => Effect::None,
        },
    }
}

pub fn run(app: App, backend: Arc<dyn ChatBackend>) -> std::io::Result<()> {
    let mut app = app;
    let mut tui = TuiState::new(app.placeholder.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            ratatui::restore();
            return Err(e);
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, event, frame_area) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest(query) => {
                    spawn_request(backend.clone(), query, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (settled requests)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::ReplySettled(_)) {
                tui.response_card.reset();
            }
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

fn spawn_request(backend: Arc<dyn ChatBackend>, query: String, tx: mpsc::Sender<Action>) {
    info!("Spawning backend request");
    tokio::spawn(async move {
        let action = backend::settle(backend.as_ref(), &query).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver settled reply: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Outcome;
    use crate::test_support::test_app;
    use crate::tui::components::AskButton;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 60,
        height: 16,
    };

    fn type_str(app: &mut App, tui: &mut TuiState, s: &str) {
        for c in s.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c), AREA);
        }
    }

    fn button_click() -> TuiEvent {
        let button = ui::screen_layout(AREA).button;
        TuiEvent::MouseClick(button.x + 1, button.y + 1)
    }

    #[test]
    fn test_typing_mirrors_into_app_input() {
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_str(&mut app, &mut tui, "hey");
        assert_eq!(app.input, "hey");
    }

    #[test]
    fn test_enter_on_blank_input_does_nothing() {
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_str(&mut app, &mut tui, "   ");

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Submit, AREA);

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_button_disabled_exactly_while_in_flight() {
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_str(&mut app, &mut tui, "what is attention?");
        assert!(AskButton::new(app.is_loading).is_enabled());

        let effect = handle_event(&mut app, &mut tui, button_click(), AREA);
        assert_eq!(effect, Effect::SpawnRequest("what is attention?".to_string()));
        assert!(!AskButton::new(app.is_loading).is_enabled());

        // Neither a click nor Enter starts a second request
        assert_eq!(handle_event(&mut app, &mut tui, button_click(), AREA), Effect::None);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Submit, AREA), Effect::None);

        update(
            &mut app,
            Action::ReplySettled(Outcome::Answered {
                text: "hello".to_string(),
                query: None,
            }),
        );
        assert!(AskButton::new(app.is_loading).is_enabled());
        assert_eq!(app.response, "hello");
        assert_eq!(app.input, "what is attention?");
    }

    #[test]
    fn test_click_outside_button_is_ignored() {
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        type_str(&mut app, &mut tui, "q");
        let effect = handle_event(&mut app, &mut tui, TuiEvent::MouseClick(1, 0), AREA);
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new(String::new());
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Quit, AREA), Effect::Quit);
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::ForceQuit, AREA),
            Effect::Quit
        );
    }
}
