//! Application state composition.
//!
//! The state hierarchy is small: `AppState` owns the form feature slice
//! plus the values resolved once from configuration (theme, card title).

use gatehouse_core::config::Config;

use crate::features::form::FormUiState;
use crate::theme::Theme;

/// Top-level TUI state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Login form slice (controller, focus, editors).
    pub form: FormUiState,
    /// Resolved theme colors.
    pub theme: Theme,
    /// Title shown on the form card.
    pub title: String,
}

impl AppState {
    /// Creates the initial state from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            form: FormUiState::new(),
            theme: Theme::from_config(&config.theme),
            title: config.title.clone(),
        }
    }
}
