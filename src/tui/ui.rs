use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::ask_button::BUTTON_HEIGHT;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{AskButton, ResponseCard, TitleBar};

/// Screen regions, top to bottom.
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub response: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(INPUT_HEIGHT), Length(BUTTON_HEIGHT), Min(0)]);
    let [title, input, button, response] = layout.areas(area);
    ScreenLayout {
        title,
        input,
        button,
        response,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let layout = screen_layout(frame.area());

    let spinner = app.is_loading.then_some(spinner_frame);
    TitleBar::new(app.title.clone(), app.status_message.clone(), spinner)
        .render(frame, layout.title);

    tui.input_box.render(frame, layout.input);

    AskButton::new(app.is_loading).render(frame, layout.button);

    ResponseCard::new(
        &app.response,
        app.last_query.as_deref(),
        &mut tui.response_card,
    )
    .render(frame, layout.response);
}

/// Hit test: is the screen cell `(column, row)` on the Ask button?
pub fn hit_test_button(column: u16, row: u16, frame_area: Rect) -> bool {
    let button = screen_layout(frame_area).button;
    column >= button.x
        && column < button.x + button.width
        && row >= button.y
        && row < button.y + button.height
}
