//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$PATCHBUMP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/patchbump/config.toml`
//! 3. `~/.patchbump/config.toml`
//!
//! # Workspace Config
//!
//! Located at `<root>/.patchbump.toml`.
//!
//! # Validation
//!
//! `version_file` must stay inside the root: relative, non-empty, and
//! free of `..` components.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// root = "/home/ci/workspace"
/// version_file = "version.txt"
/// lock = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Workspace root used when no `--root`/`$WORKSPACE` is given
    pub root: Option<PathBuf>,

    /// Version file relative to the root
    pub version_file: Option<PathBuf>,

    /// Lock the version file while bumping
    pub lock: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue("root cannot be empty".to_string()));
            }
        }

        if let Some(file) = &self.version_file {
            validate_version_file(file)?;
        }

        Ok(())
    }
}

/// Workspace configuration, checked in alongside the version file.
///
/// # Example
///
/// ```toml
/// version_file = "ci/VERSION"
/// lock = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Version file relative to the root
    pub version_file: Option<PathBuf>,

    /// Lock the version file while bumping
    pub lock: Option<bool>,
}

impl WorkspaceConfig {
    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(file) = &self.version_file {
            validate_version_file(file)?;
        }
        Ok(())
    }
}

/// Check that a configured version file stays under the root.
pub fn validate_version_file(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue(
            "version_file cannot be empty".to_string(),
        ));
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(ConfigError::InvalidValue(format!(
                    "version_file '{}' cannot contain '..'",
                    path.display()
                )))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ConfigError::InvalidValue(format!(
                    "version_file '{}' must be relative to the root",
                    path.display()
                )))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = GlobalConfig::default();
            assert!(config.root.is_none());
            assert!(config.version_file.is_none());
            assert!(config.lock.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn empty_root_rejected() {
            let config = GlobalConfig {
                root: Some(PathBuf::new()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn roundtrip() {
            let config = GlobalConfig {
                root: Some(PathBuf::from("/srv/ci")),
                version_file: Some(PathBuf::from("build/version.txt")),
                lock: Some(false),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }
    }

    mod workspace_config {
        use super::*;

        #[test]
        fn parses_fields() {
            let config: WorkspaceConfig = toml::from_str(
                r#"
                version_file = "VERSION"
                lock = false
                "#,
            )
            .unwrap();

            assert_eq!(config.version_file, Some(PathBuf::from("VERSION")));
            assert_eq!(config.lock, Some(false));
        }

        #[test]
        fn root_not_allowed() {
            let result: Result<WorkspaceConfig, _> = toml::from_str(r#"root = "/tmp""#);
            assert!(result.is_err());
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                version_file = "VERSION"
                unknown_field = true
            "#;

            let result: Result<WorkspaceConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }
    }

    mod version_file {
        use super::*;

        #[test]
        fn relative_paths_accepted() {
            assert!(validate_version_file(Path::new("version.txt")).is_ok());
            assert!(validate_version_file(Path::new("./ci/VERSION")).is_ok());
        }

        #[test]
        fn parent_dir_rejected() {
            let err = validate_version_file(Path::new("../version.txt")).unwrap_err();
            assert!(err.to_string().contains(".."));
        }

        #[cfg(unix)]
        #[test]
        fn absolute_rejected() {
            assert!(validate_version_file(Path::new("/etc/version")).is_err());
        }

        #[test]
        fn empty_rejected() {
            assert!(validate_version_file(Path::new("")).is_err());
        }
    }
}
