//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui Frame. They never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::features::form;
use crate::state::AppState;

/// Height of the hint line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Form card, centered
            Constraint::Length(STATUS_HEIGHT), // Key hints
        ])
        .split(area);

    let card = centered_rect(chunks[0], form::render::CARD_WIDTH, form::render::CARD_HEIGHT);
    form::render::render_card(frame, card, &app.form, &app.theme, &app.title);

    render_status_line(frame, chunks[1]);
}

/// Centers a `width` x `height` rect inside `area`, clamping to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_status_line(frame: &mut Frame, area: Rect) {
    let hints = "tab next · shift+tab prev · enter submit · esc clear · ctrl+c quit";
    let line = Paragraph::new(Line::styled(hints, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    frame.render_widget(line, area);
}
