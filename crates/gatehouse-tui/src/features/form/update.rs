//! Form feature reducer.
//!
//! Keyboard input for the form: editing, focus navigation, submit, cancel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gatehouse_core::form::Field;

use super::state::{Focus, FormUiState};
use crate::effects::UiEffect;

/// Handles a key event for the form.
pub fn handle_key(form: &mut FormUiState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        // Esc is the cancel action: reset the form, keep running.
        KeyCode::Esc => {
            cancel(form);
            return vec![];
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.prev();
            return vec![];
        }
        // Enter submits from any field or the Login button (form semantics);
        // on the Cancel button it cancels instead.
        KeyCode::Enter => {
            if form.focus == Focus::CancelButton {
                cancel(form);
            } else {
                form.controller.submit();
            }
            return vec![];
        }
        _ => {}
    }

    // Remaining keys edit the focused field, if any.
    let Focus::Field(field) = form.focus else {
        return vec![];
    };

    let editor = &mut form.editors[field];
    let edited = match key.code {
        KeyCode::Char(ch) if !ctrl => {
            editor.insert_char(ch);
            true
        }
        KeyCode::Backspace => editor.delete_prev_char(),
        KeyCode::Delete => editor.delete_next_char(),
        KeyCode::Left => {
            editor.move_left();
            false
        }
        KeyCode::Right => {
            editor.move_right();
            false
        }
        KeyCode::Home => {
            editor.move_home();
            false
        }
        KeyCode::End => {
            editor.move_end();
            false
        }
        _ => false,
    };

    if edited {
        let value = editor.text().to_string();
        form.controller.set_field(field, value);
    }

    vec![]
}

/// Inserts pasted text into the focused field.
///
/// Fields are single-line: control characters (including newlines) are
/// stripped before insertion.
pub fn handle_paste(form: &mut FormUiState, text: &str) {
    let Focus::Field(field) = form.focus else {
        return;
    };

    let sanitized: String = text.chars().filter(|ch| !ch.is_control()).collect();
    if sanitized.is_empty() {
        return;
    }

    form.editors[field].insert_str(&sanitized);
    let value = form.editors[field].text().to_string();
    form.controller.set_field(field, value);
}

/// Resets the controller and the editors, returning focus to the first field.
fn cancel(form: &mut FormUiState) {
    form.controller.cancel();
    for editor in form.editors.values_mut() {
        editor.clear();
    }
    form.focus = Focus::Field(Field::Username);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use gatehouse_core::form::Field;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut FormUiState, text: &str) {
        for ch in text.chars() {
            handle_key(form, key(KeyCode::Char(ch)));
        }
    }

    /// Typed characters land in the focused field and the controller.
    #[test]
    fn test_typing_updates_controller() {
        let mut form = FormUiState::new();
        type_str(&mut form, "alice");

        assert_eq!(form.editors[Field::Username].text(), "alice");
        assert_eq!(form.controller.state().username, "alice");
    }

    /// Tab walks fields then buttons and wraps; BackTab reverses.
    #[test]
    fn test_focus_cycle_wraps() {
        let mut form = FormUiState::new();

        let mut seen = vec![form.focus];
        for _ in 0..5 {
            handle_key(&mut form, key(KeyCode::Tab));
            seen.push(form.focus);
        }
        assert_eq!(seen.first(), seen.last());
        assert!(seen.contains(&Focus::SubmitButton));
        assert!(seen.contains(&Focus::CancelButton));

        handle_key(&mut form, key(KeyCode::BackTab));
        assert_eq!(form.focus, Focus::CancelButton);
    }

    /// Enter on a field submits the form.
    #[test]
    fn test_enter_submits() {
        let mut form = FormUiState::new();
        type_str(&mut form, "alice");
        handle_key(&mut form, key(KeyCode::Tab));
        type_str(&mut form, "secret1");
        handle_key(&mut form, key(KeyCode::Tab));
        type_str(&mut form, "secret1");

        handle_key(&mut form, key(KeyCode::Enter));

        let state = form.controller.state();
        assert!(state.submitted);
        assert_eq!(state.message.as_deref(), Some("Welcome, alice!"));
    }

    /// Enter on the Cancel button resets instead of submitting.
    #[test]
    fn test_enter_on_cancel_button_resets() {
        let mut form = FormUiState::new();
        type_str(&mut form, "alice");
        form.focus = Focus::CancelButton;

        handle_key(&mut form, key(KeyCode::Enter));

        assert_eq!(form.controller.state().username, "");
        assert!(!form.controller.state().submitted);
        assert_eq!(form.focus, Focus::Field(Field::Username));
        assert_eq!(form.editors[Field::Username].text(), "");
    }

    /// After a failed submit, typing into a field re-validates live.
    #[test]
    fn test_live_revalidation_after_submit() {
        let mut form = FormUiState::new();
        handle_key(&mut form, key(KeyCode::Enter));
        assert_eq!(
            form.controller.state().errors.get(Field::Username),
            Some("Username is required.")
        );

        type_str(&mut form, "bob");
        assert_eq!(form.controller.state().errors.get(Field::Username), None);
    }

    /// Esc cancels from anywhere, clearing editors and errors.
    #[test]
    fn test_esc_cancels() {
        let mut form = FormUiState::new();
        type_str(&mut form, "alice");
        handle_key(&mut form, key(KeyCode::Enter));
        form.focus = Focus::SubmitButton;

        handle_key(&mut form, key(KeyCode::Esc));

        let state = form.controller.state();
        assert_eq!(state.username, "");
        assert!(state.errors.is_empty());
        assert!(!state.submitted);
        assert_eq!(form.focus, Focus::Field(Field::Username));
    }

    /// Ctrl+C quits; a plain 'c' is just input.
    #[test]
    fn test_ctrl_c_quits() {
        let mut form = FormUiState::new();
        let effects = handle_key(
            &mut form,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);

        let effects = handle_key(&mut form, key(KeyCode::Char('c')));
        assert!(effects.is_empty());
        assert_eq!(form.controller.state().username, "c");
    }

    /// Paste strips control characters and routes through the controller.
    #[test]
    fn test_paste_sanitizes_and_inserts() {
        let mut form = FormUiState::new();
        handle_paste(&mut form, "ali\nce\t");

        assert_eq!(form.editors[Field::Username].text(), "alice");
        assert_eq!(form.controller.state().username, "alice");
    }

    /// Paste with buttons focused is ignored.
    #[test]
    fn test_paste_ignored_on_buttons() {
        let mut form = FormUiState::new();
        form.focus = Focus::SubmitButton;
        handle_paste(&mut form, "alice");

        assert_eq!(form.controller.state().username, "");
    }

    /// Backspace edits route through the controller too.
    #[test]
    fn test_backspace_updates_controller() {
        let mut form = FormUiState::new();
        type_str(&mut form, "ab");
        handle_key(&mut form, key(KeyCode::Backspace));

        assert_eq!(form.controller.state().username, "a");
    }
}
