//! core::paths
//!
//! Centralized path routing for the version file and its companions.
//!
//! # Architecture
//!
//! The version file lives at `<root>/<version_file>`. The root is the only
//! environment-dependent input: a home directory for local runs, or the
//! workspace directory CI provisions for the checkout. It is resolved by
//! the caller and handed in here; nothing in this module reads ambient
//! environment variables.
//!
//! # Storage Layout
//!
//! - `<root>/<version_file>` - The version file (default `version.txt`)
//! - `<root>/.patchbump.toml` - Optional workspace configuration
//! - `<root>/<version_file>.tmp` - Scratch file used during atomic writes
//! - `<root>/<version_file>.lock` - Lock file held during a bump
//!
//! # Example
//!
//! ```
//! use patchbump::core::paths::VersionPaths;
//! use std::path::PathBuf;
//!
//! let paths = VersionPaths::new("/ci/workspace", "version.txt");
//!
//! assert_eq!(
//!     paths.version_file_path(),
//!     PathBuf::from("/ci/workspace/version.txt")
//! );
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default version file name, relative to the root.
pub const DEFAULT_VERSION_FILE: &str = "version.txt";

/// Workspace configuration file name, relative to the root.
pub const WORKSPACE_CONFIG_FILE: &str = ".patchbump.toml";

/// Path routing for a single version file.
///
/// # Invariants
///
/// - A relative `version_file` is always joined onto `root`
/// - An absolute `version_file` is used as-is (root is ignored for it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPaths {
    /// Workspace root (home directory locally, CI workspace in CI).
    pub root: PathBuf,

    /// Version file, usually relative to `root`.
    pub version_file: PathBuf,
}

impl VersionPaths {
    /// Create paths from a root and a version file name.
    pub fn new(root: impl Into<PathBuf>, version_file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            version_file: version_file.into(),
        }
    }

    /// Create paths for the default version file under `root`.
    pub fn with_default_file(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_VERSION_FILE)
    }

    /// Full path to the version file.
    pub fn version_file_path(&self) -> PathBuf {
        self.root.join(&self.version_file)
    }

    /// Full path to the workspace config file.
    pub fn workspace_config_path(&self) -> PathBuf {
        workspace_config_path(&self.root)
    }

    /// Scratch path used while atomically replacing `target`.
    ///
    /// The scratch file sits in the same directory as the target so the
    /// final rename never crosses a filesystem boundary.
    pub fn temp_path_for(target: &Path) -> PathBuf {
        sibling_with_suffix(target, ".tmp")
    }

    /// Lock file guarding bumps of `target`.
    ///
    /// This is a separate, stable file: the version file itself is
    /// replaced by rename on every store, so a lock on it would not
    /// survive the write.
    pub fn lock_path_for(target: &Path) -> PathBuf {
        sibling_with_suffix(target, ".lock")
    }
}

fn sibling_with_suffix(target: &Path, suffix: &str) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_VERSION_FILE));
    name.push(suffix);
    target.with_file_name(name)
}

/// Workspace config path for a root, usable before `VersionPaths` exists.
pub fn workspace_config_path(root: &Path) -> PathBuf {
    root.join(WORKSPACE_CONFIG_FILE)
}
