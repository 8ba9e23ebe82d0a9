//! Full-screen TUI for the Gatehouse login form.

pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use gatehouse_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login form until the user quits.
pub fn run_form(config: &Config) -> Result<()> {
    // The form requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!("The login form requires a terminal.");
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
