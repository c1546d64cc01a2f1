//! show command - Print the current version

use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::load_config;
use crate::cli::Context;
use crate::core::types::VersionIdentifier;
use crate::core::version_file;

/// JSON shape printed by `show --json`.
#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    path: &'a Path,
    version: VersionIdentifier,
    major: u64,
    minor: u64,
    patch: u64,
}

/// Print the current version.
///
/// The version is the command's result, so it is printed even in quiet
/// mode.
pub fn show(ctx: &Context, json: bool) -> Result<()> {
    let settings = load_config(ctx)?.settings(ctx.file.as_deref(), ctx.no_lock);
    let path = settings.version_file_path();

    let version = version_file::load(&path).context("Failed to read version")?;

    if json {
        let out = ShowOutput {
            path: &path,
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", version);
    }

    Ok(())
}
