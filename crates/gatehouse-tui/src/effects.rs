//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never touches the terminal directly.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
}
