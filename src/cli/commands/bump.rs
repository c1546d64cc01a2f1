//! bump command - Increment the patch component of the version file

use anyhow::{Context as _, Result};

use super::load_config;
use crate::cli::Context;
use crate::core::bump::{bump_patch, BumpOptions};
use crate::ui::output::{self, format_field};

/// Increment the patch component and write it back.
///
/// Echoes the components read and the new version so CI logs show what
/// happened.
pub fn bump(ctx: &Context, dry_run: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let settings = load_config(ctx)?.settings(ctx.file.as_deref(), ctx.no_lock);
    let path = settings.version_file_path();

    output::debug(
        format!(
            "version file: {} (root from {})",
            path.display(),
            settings.root.source
        ),
        verbosity,
    );
    output::debug(
        format!("lock: {} ({})", settings.lock.value, settings.lock.source),
        verbosity,
    );

    let options = BumpOptions {
        dry_run,
        lock: settings.lock.value,
    };
    let outcome = bump_patch(&path, options).context("Failed to bump version")?;

    let previous = outcome.previous;
    output::print(format_field("major", previous.major()), verbosity);
    output::print(format_field("minor", previous.minor()), verbosity);
    output::print(format_field("patch", previous.patch()), verbosity);
    output::print(format_field("new version", outcome.current), verbosity);

    if outcome.written {
        output::debug(format!("wrote {}", outcome.path.display()), verbosity);
    } else {
        output::print(
            format!("dry run: {} not modified", outcome.path.display()),
            verbosity,
        );
    }

    Ok(())
}
