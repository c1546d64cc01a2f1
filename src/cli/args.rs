//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--root <dir>`: Workspace root (falls back to `$WORKSPACE`)
//! - `--file <path>`: Version file relative to the root
//! - `--no-lock`: Do not lock the version file while bumping
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// patchbump - Bump the patch component of a version file
#[derive(Parser, Debug)]
#[command(name = "patchbump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root containing the version file; defaults to $WORKSPACE when set
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Version file, relative to the root unless absolute
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Do not lock the version file while bumping
    #[arg(long, global = true)]
    pub no_lock: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    // Defaults to `bump` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Increment the patch component of the version file
    #[command(
        name = "bump",
        long_about = "Increment the patch component of the version file.\n\n\
            Reads MAJOR.MINOR.PATCH from the version file, adds one to PATCH, \
            and writes the result back. Major and minor are never changed. \
            This is also what runs when patchbump is invoked without a command.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bump the version file in the CI workspace
    WORKSPACE=/builds/app patchbump

    # Bump a file in a specific directory
    patchbump --root ~/src/app bump

    # Preview without writing
    patchbump bump --dry-run"
    )]
    Bump {
        /// Show the new version without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the current version
    #[command(
        name = "show",
        after_help = "\
WORKFLOW EXAMPLES:
    # Print the version for use in a script
    VERSION=$(patchbump -q show)

    # Machine-readable output
    patchbump show --json"
    )]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect resolved configuration
    #[command(
        name = "config",
        long_about = "Inspect the resolved configuration.\n\n\
            Settings come from defaults, the global config file, the workspace \
            config at <root>/.patchbump.toml, and command-line flags, in \
            increasing order of precedence.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all settings and where they came from
    patchbump config list

    # Get the full path of the version file
    patchbump config get path"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    patchbump completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    patchbump completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (root, version_file, path, lock)
        key: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
