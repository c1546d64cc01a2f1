//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! patchbump has two configuration scopes:
//! - **Global**: User-level settings, including a default root
//! - **Workspace**: Settings checked in at `<root>/.patchbump.toml`
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Workspace config file
//! 4. CLI flags and the `$WORKSPACE` variable (passed in by the caller)
//!
//! The root is resolved first, since the workspace config lives under it:
//! explicit override, then global `root`, then the home directory.
//!
//! # Global Config Locations
//!
//! `$PATCHBUMP_CONFIG`, when set, names the one global config file and it
//! must exist. Otherwise these are searched in order:
//! 1. `$XDG_CONFIG_HOME/patchbump/config.toml`
//! 2. `~/.patchbump/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use patchbump::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let settings = result.config.settings(None, false);
//!
//! println!("Version file: {}", settings.version_file_path().display());
//! println!("Lock: {}", settings.lock.value);
//! ```

pub mod schema;

pub use schema::{GlobalConfig, WorkspaceConfig};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::paths::{self, VersionPaths, DEFAULT_VERSION_FILE};

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "PATCHBUMP_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found; pass --root or set $WORKSPACE")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Default,
    Home,
    Global,
    Workspace,
    Environment,
    Flag,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Source::Default => "default",
            Source::Home => "home directory",
            Source::Global => "global config",
            Source::Workspace => "workspace config",
            Source::Environment => "environment",
            Source::Flag => "command line",
        };
        f.write_str(s)
    }
}

/// A resolved value together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Setting<T> {
    pub fn new(value: T, source: Source) -> Self {
        Self { value, source }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: Setting<PathBuf>,
    pub version_file: Setting<PathBuf>,
    pub lock: Setting<bool>,
}

impl Settings {
    /// Path routing for the resolved root and file.
    pub fn paths(&self) -> VersionPaths {
        VersionPaths::new(self.root.value.clone(), self.version_file.value.clone())
    }

    /// Full path to the version file.
    pub fn version_file_path(&self) -> PathBuf {
        self.paths().version_file_path()
    }
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence rules automatically. Workspace
/// config overrides global config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Workspace configuration (if present under the root)
    pub workspace: Option<WorkspaceConfig>,
    /// Resolved workspace root
    root: Setting<PathBuf>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the workspace config file (if loaded)
    workspace_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// `root_override` is the root supplied by the caller (a CLI flag or
    /// the CI workspace variable). When absent, the global `root` or the
    /// home directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed, or if
    /// no root can be determined. Missing config files are not an error.
    pub fn load(root_override: Option<Setting<PathBuf>>) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load_global_explicit(Path::new(&path))?,
            _ => Self::load_global_from(&Self::global_candidates())?,
        };
        Self::assemble(global, global_path, root_override, dirs::home_dir())
    }

    /// Candidate global config locations, in search order.
    ///
    /// `$PATCHBUMP_CONFIG` is not among them; see [`Config::load_global_explicit`].
    pub fn global_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(xdg_home) = std::env::var_os("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg_home).join("patchbump/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".patchbump/config.toml"));
        }

        candidates
    }

    /// Load a global config the user named explicitly.
    ///
    /// Unlike the searched locations, a missing file here is an error.
    pub fn load_global_explicit(
        path: &Path,
    ) -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        let config: GlobalConfig = read_toml(path)?;
        config.validate()?;
        Ok((config, Some(path.to_path_buf())))
    }

    /// Load the first existing global config among `candidates`.
    pub fn load_global_from(
        candidates: &[PathBuf],
    ) -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        for path in candidates {
            if path.exists() {
                let config: GlobalConfig = read_toml(path)?;
                config.validate()?;
                return Ok((config, Some(path.clone())));
            }
        }

        // No config found, use defaults
        Ok((GlobalConfig::default(), None))
    }

    /// Resolve the root and load the workspace config beneath it.
    fn assemble(
        global: GlobalConfig,
        global_path: Option<PathBuf>,
        root_override: Option<Setting<PathBuf>>,
        home: Option<PathBuf>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let root = match (root_override, &global.root, home) {
            (Some(root), _, _) => root,
            (None, Some(root), _) => Setting::new(root.clone(), Source::Global),
            (None, None, Some(home)) => Setting::new(home, Source::Home),
            (None, None, None) => return Err(ConfigError::NoHomeDir),
        };

        if !root.value.is_dir() {
            warnings.push(ConfigWarning {
                message: format!(
                    "root '{}' ({}) is not a directory",
                    root.value.display(),
                    root.source
                ),
                path: root.value.clone(),
            });
        }

        let (workspace, workspace_path) = Self::load_workspace(&root.value)?;

        Ok(ConfigLoadResult {
            config: Config {
                global,
                workspace,
                root,
                global_path,
                workspace_path,
            },
            warnings,
        })
    }

    /// Load workspace configuration from `<root>/.patchbump.toml`.
    fn load_workspace(
        root: &Path,
    ) -> Result<(Option<WorkspaceConfig>, Option<PathBuf>), ConfigError> {
        let path = paths::workspace_config_path(root);
        if !path.is_file() {
            return Ok((None, None));
        }

        let config: WorkspaceConfig = read_toml(&path)?;
        config.validate()?;
        Ok((Some(config), Some(path)))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the resolved root.
    pub fn root(&self) -> &Setting<PathBuf> {
        &self.root
    }

    /// Get the version file, relative to the root.
    ///
    /// Defaults to `version.txt` if not configured.
    pub fn version_file(&self) -> Setting<PathBuf> {
        if let Some(file) = self.workspace.as_ref().and_then(|w| w.version_file.as_ref()) {
            return Setting::new(file.clone(), Source::Workspace);
        }
        if let Some(file) = &self.global.version_file {
            return Setting::new(file.clone(), Source::Global);
        }
        Setting::new(PathBuf::from(DEFAULT_VERSION_FILE), Source::Default)
    }

    /// Check if the version file should be locked while bumping.
    ///
    /// Defaults to `true` if not configured.
    pub fn lock(&self) -> Setting<bool> {
        if let Some(lock) = self.workspace.as_ref().and_then(|w| w.lock) {
            return Setting::new(lock, Source::Workspace);
        }
        if let Some(lock) = self.global.lock {
            return Setting::new(lock, Source::Global);
        }
        Setting::new(true, Source::Default)
    }

    /// Apply CLI flags on top of the loaded configuration.
    pub fn settings(&self, file_flag: Option<&Path>, no_lock: bool) -> Settings {
        let version_file = match file_flag {
            Some(file) => Setting::new(file.to_path_buf(), Source::Flag),
            None => self.version_file(),
        };
        let lock = if no_lock {
            Setting::new(false, Source::Flag)
        } else {
            self.lock()
        };

        Settings {
            root: self.root.clone(),
            version_file,
            lock,
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded workspace config file.
    pub fn workspace_config_loaded_from(&self) -> Option<&Path> {
        self.workspace_path.as_deref()
    }
}

/// Read and parse a TOML config file.
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
