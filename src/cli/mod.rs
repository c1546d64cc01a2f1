//! cli
//!
//! Command-line interface layer for patchbump.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Read the CI workspace variable (the only ambient input)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, turns them into a
//! [`Context`], and dispatches to the handlers in [`commands`]. The file
//! work itself lives in [`crate::core`], which never reads environment
//! variables.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::config::{Setting, Source};
use crate::ui::output::Verbosity;

/// Environment variable CI uses to publish the workspace root.
pub const WORKSPACE_ENV: &str = "WORKSPACE";

/// Execution context shared by all commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Root from `--root` or `$WORKSPACE`, if given.
    pub root: Option<Setting<PathBuf>>,
    /// Version file from `--file`, if given.
    pub file: Option<PathBuf>,
    /// Skip locking the version file.
    pub no_lock: bool,
    pub debug: bool,
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for this run.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Pick the root override: the flag wins over the workspace variable.
///
/// An empty variable counts as unset, matching how CI leaves it blank
/// outside of a job.
pub fn root_override(flag: Option<PathBuf>, env: Option<OsString>) -> Option<Setting<PathBuf>> {
    if let Some(root) = flag {
        return Some(Setting::new(root, Source::Flag));
    }
    env.filter(|value| !value.is_empty())
        .map(|value| Setting::new(PathBuf::from(value), Source::Environment))
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        root: root_override(cli.root, std::env::var_os(WORKSPACE_ENV)),
        file: cli.file,
        no_lock: cli.no_lock,
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let root = root_override(Some(PathBuf::from("/flag")), Some(OsString::from("/env")));
        assert_eq!(root, Some(Setting::new(PathBuf::from("/flag"), Source::Flag)));
    }

    #[test]
    fn environment_used_without_flag() {
        let root = root_override(None, Some(OsString::from("/builds/app")));
        assert_eq!(
            root,
            Some(Setting::new(PathBuf::from("/builds/app"), Source::Environment))
        );
    }

    #[test]
    fn empty_environment_ignored() {
        assert_eq!(root_override(None, Some(OsString::new())), None);
        assert_eq!(root_override(None, None), None);
    }
}
