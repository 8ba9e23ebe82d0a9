//! Form feature view.
//!
//! Pure rendering for the login card: labeled fields, inline errors, the
//! button row, and the success banner. Functions here read state and draw
//! to the frame; they never mutate.

use gatehouse_core::form::Field;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::editor::FieldEditor;
use super::state::{Focus, FormUiState};
use crate::theme::Theme;

/// Card width in columns, including borders.
pub const CARD_WIDTH: u16 = 46;

/// Card height in rows: three 4-row field slots (bordered input + error
/// line), the button row, the banner row, and spacers, plus borders.
pub const CARD_HEIGHT: u16 = 18;

/// Mask character for secret fields.
const MASK: char = '•';

/// Renders the login card.
pub fn render_card(frame: &mut Frame, area: Rect, form: &FormUiState, theme: &Theme, title: &str) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Username
            Constraint::Length(4), // Password
            Constraint::Length(4), // Confirm Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Success banner
        ])
        .split(inner);

    for (slot, field) in Field::all().into_iter().enumerate() {
        render_field(frame, rows[slot], form, field, theme);
    }

    let buttons = Paragraph::new(buttons_line(form.focus, theme)).alignment(Alignment::Center);
    frame.render_widget(buttons, rows[4]);

    if let Some(message) = &form.controller.state().message {
        let banner = Paragraph::new(Line::styled(
            message.clone(),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(banner, rows[6]);
    }
}

/// Renders one labeled input plus its inline error line.
fn render_field(frame: &mut Frame, area: Rect, form: &FormUiState, field: Field, theme: &Theme) {
    let focused = form.focus == Focus::Field(field);
    let error = form.controller.state().errors.get(field);

    // Error color wins over focus, matching the original's field styling.
    let border_color = if error.is_some() {
        theme.error
    } else if focused {
        theme.primary
    } else {
        theme.border
    };

    let input_box = Rect::new(area.x, area.y, area.width, 3.min(area.height));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(field.label())
        .title_style(Style::default().fg(border_color));
    let input_area = block.inner(input_box);
    frame.render_widget(block, input_box);

    let line = input_line(
        &form.editors[field],
        field.is_secret(),
        focused,
        input_area.width as usize,
    );
    frame.render_widget(Paragraph::new(line), input_area);

    if area.height >= 4 {
        let helper_area = Rect::new(area.x + 1, area.y + 3, area.width.saturating_sub(2), 1);
        if let Some(message) = error {
            let helper = Paragraph::new(Line::styled(message, Style::default().fg(theme.error)));
            frame.render_widget(helper, helper_area);
        }
    }
}

/// Builds the visible slice of a field's value with the cursor highlighted.
///
/// The window is chosen so the cursor always stays visible; content that
/// overflows to the right is clipped by the widget.
fn input_line(editor: &FieldEditor, masked: bool, focused: bool, width: usize) -> Line<'static> {
    let chars: Vec<char> = if masked {
        std::iter::repeat_n(MASK, editor.char_len()).collect()
    } else {
        editor.text().chars().collect()
    };
    let cursor = editor.cursor().min(chars.len());

    // Walk back from the cursor until the window is full.
    let mut start = cursor;
    if width > 0 {
        let mut used = 1; // cell reserved for the cursor itself
        while start > 0 {
            let w = UnicodeWidthChar::width(chars[start - 1]).unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }
    }

    let text_style = Style::default().fg(Color::White);
    let mut spans: Vec<Span<'static>> = Vec::new();

    let before: String = chars[start..cursor].iter().collect();
    if !before.is_empty() {
        spans.push(Span::styled(before, text_style));
    }

    if focused {
        let at = chars.get(cursor).map_or(" ".to_string(), ToString::to_string);
        spans.push(Span::styled(at, text_style.add_modifier(Modifier::REVERSED)));
        let rest_from = (cursor + 1).min(chars.len());
        let after: String = chars[rest_from..].iter().collect();
        if !after.is_empty() {
            spans.push(Span::styled(after, text_style));
        }
    } else {
        let after: String = chars[cursor..].iter().collect();
        if !after.is_empty() {
            spans.push(Span::styled(after, text_style));
        }
    }

    Line::from(spans)
}

/// The Login / Cancel button row; the focused button renders filled.
fn buttons_line(focus: Focus, theme: &Theme) -> Line<'static> {
    let submit_style = if focus == Focus::SubmitButton {
        Style::default()
            .fg(Color::Black)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let cancel_style = if focus == Focus::CancelButton {
        Style::default()
            .fg(Color::Black)
            .bg(theme.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled("[ Login ]", submit_style),
        Span::raw("  "),
        Span::styled("[ Cancel ]", cancel_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> FieldEditor {
        let mut editor = FieldEditor::default();
        editor.insert_str(text);
        editor
    }

    /// Masked fields render bullets, one per char.
    #[test]
    fn test_input_line_masks_secrets() {
        let editor = editor_with("secret1");
        let line = input_line(&editor, true, false, 20);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "•••••••");
    }

    /// The focused line carries a cursor cell even when empty.
    #[test]
    fn test_input_line_cursor_on_empty() {
        let editor = FieldEditor::default();
        let line = input_line(&editor, false, true, 20);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, " ");
    }

    /// Long values scroll so the cursor stays inside the window.
    #[test]
    fn test_input_line_scrolls_to_cursor() {
        let editor = editor_with("abcdefghij"); // cursor at end
        let line = input_line(&editor, false, true, 5);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        // 4 chars + cursor cell fit in a width of 5.
        assert_eq!(rendered, "ghij ");
    }
}
