//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth
//! for how events modify state.

use crossterm::event::Event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::form;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => form::handle_key(&mut app.form, key),
        Event::Paste(text) => {
            form::handle_paste(&mut app.form, &text);
            vec![]
        }
        // Ratatui re-measures on the next draw; nothing to store.
        Event::Resize(_, _) => vec![],
        _ => vec![],
    }
}
