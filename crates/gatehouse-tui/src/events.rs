//! UI event types.
//!
//! All inputs to the TUI are converted to `UiEvent` before being processed
//! by the reducer.

use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
///
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick; caps the render cadence.
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),
}
