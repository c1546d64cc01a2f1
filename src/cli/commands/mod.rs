//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves configuration for the run
//! 2. Calls into [`crate::core`] to do the work
//! 3. Formats and displays output
//!
//! Running without a command is the same as `bump`, so CI can invoke the
//! binary as a zero-argument step.

mod bump;
mod completion;
mod config_cmd;
mod show;

// Re-export command functions for testing and direct invocation
pub use bump::bump;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list};
pub use show::show;

use anyhow::{Context as _, Result};

use super::args::{Command, ConfigAction};
use super::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Dispatch a command to its handler.
pub fn dispatch(command: Option<Command>, ctx: &Context) -> Result<()> {
    match command.unwrap_or(Command::Bump { dry_run: false }) {
        Command::Bump { dry_run } => bump::bump(ctx, dry_run),
        Command::Show { json } => show::show(ctx, json),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load configuration for this run, reporting any warnings.
fn load_config(ctx: &Context) -> Result<Config> {
    let verbosity = ctx.verbosity();
    let result = Config::load(ctx.root.clone()).context("Failed to load configuration")?;

    for warning in &result.warnings {
        output::warn(&warning.message, verbosity);
    }

    let config = result.config;
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.workspace_config_loaded_from() {
        output::debug(format!("workspace config: {}", path.display()), verbosity);
    }

    Ok(config)
}
