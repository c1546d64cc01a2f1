//! config command - Inspect resolved configuration values

use anyhow::{bail, Result};

use super::load_config;
use crate::cli::Context;
use crate::core::config::Settings;

/// Keys understood by `config get`.
const KEYS: [&str; 4] = ["root", "version_file", "path", "lock"];

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let settings = load_config(ctx)?.settings(ctx.file.as_deref(), ctx.no_lock);

    match value_of(&settings, key) {
        Some((value, _)) => {
            println!("{}", value);
            Ok(())
        }
        None => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    }
}

/// List all configuration values with where they came from.
pub fn list(ctx: &Context) -> Result<()> {
    let config = load_config(ctx)?;
    let settings = config.settings(ctx.file.as_deref(), ctx.no_lock);

    for key in KEYS {
        if let Some((value, source)) = value_of(&settings, key) {
            println!("{} = {}  # {}", key, value, source);
        }
    }

    if !ctx.quiet {
        let describe = |path: Option<&std::path::Path>| {
            path.map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        };
        println!();
        println!("global config: {}", describe(config.global_config_loaded_from()));
        println!(
            "workspace config: {}",
            describe(config.workspace_config_loaded_from())
        );
    }

    Ok(())
}

/// Render a setting and its source as strings.
fn value_of(settings: &Settings, key: &str) -> Option<(String, String)> {
    let pair = match key {
        "root" => (
            settings.root.value.display().to_string(),
            settings.root.source.to_string(),
        ),
        "version_file" => (
            settings.version_file.value.display().to_string(),
            settings.version_file.source.to_string(),
        ),
        "path" => (
            settings.version_file_path().display().to_string(),
            format!("root from {}", settings.root.source),
        ),
        "lock" => (
            settings.lock.value.to_string(),
            settings.lock.source.to_string(),
        ),
        _ => return None,
    };
    Some(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Setting, Source};
    use std::path::PathBuf;

    fn settings() -> Settings {
        Settings {
            root: Setting::new(PathBuf::from("/ws"), Source::Environment),
            version_file: Setting::new(PathBuf::from("VERSION"), Source::Workspace),
            lock: Setting::new(true, Source::Default),
        }
    }

    #[test]
    fn known_keys_render() {
        let s = settings();

        assert_eq!(
            value_of(&s, "root"),
            Some(("/ws".to_string(), "environment".to_string()))
        );
        assert_eq!(
            value_of(&s, "lock"),
            Some(("true".to_string(), "default".to_string()))
        );
        assert_eq!(
            value_of(&s, "path").unwrap().0,
            PathBuf::from("/ws/VERSION").display().to_string()
        );
    }

    #[test]
    fn unknown_key() {
        assert!(value_of(&settings(), "trunk").is_none());
    }

    #[test]
    fn every_listed_key_resolves() {
        let s = settings();
        for key in KEYS {
            assert!(value_of(&s, key).is_some(), "key {key} should resolve");
        }
    }
}
