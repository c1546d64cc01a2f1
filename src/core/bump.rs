//! core::bump
//!
//! The patch bump: load, increment, store.
//!
//! # Lifecycle
//!
//! 1. Lock `<version_file>.lock` (when enabled)
//! 2. Load and validate the current version
//! 3. Increment the patch component
//! 4. Store the new version (skipped on dry run)
//!
//! Any failure before step 4 leaves the file untouched. Step 4 replaces
//! the file atomically, so there is no partially written state.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::lock::{LockError, VersionLock};
use super::types::{VersionError, VersionIdentifier};
use super::version_file::{self, FileOp, VersionFileError};

/// Errors from a bump.
#[derive(Debug, Error)]
pub enum BumpError {
    #[error(transparent)]
    File(#[from] VersionFileError),

    #[error(transparent)]
    Lock(LockError),

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl From<LockError> for BumpError {
    fn from(err: LockError) -> Self {
        match err {
            // Resolving the file for the lock is the first touch of it
            LockError::OpenFailed { path, source } => {
                BumpError::File(VersionFileError::FileAccess {
                    op: FileOp::Read,
                    path,
                    source,
                })
            }
            other => BumpError::Lock(other),
        }
    }
}

/// Options controlling a bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOptions {
    /// Compute the new version without writing it.
    pub dry_run: bool,
    /// Hold an exclusive lock on the file for the read-modify-write.
    pub lock: bool,
}

impl Default for BumpOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            lock: true,
        }
    }
}

/// Result of a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    /// The version file that was bumped.
    pub path: PathBuf,
    /// Version read from the file.
    pub previous: VersionIdentifier,
    /// Version after incrementing the patch.
    pub current: VersionIdentifier,
    /// Whether `current` was written back.
    pub written: bool,
}

/// Increment the patch component of the version stored at `path`.
///
/// # Errors
///
/// - [`BumpError::File`] if the file is missing, unreadable, unwritable,
///   or malformed
/// - [`BumpError::Lock`] if another process holds the lock
/// - [`BumpError::Version`] if the patch component would overflow
///
/// # Example
///
/// ```no_run
/// use patchbump::core::bump::{bump_patch, BumpOptions};
/// use std::path::Path;
///
/// let outcome = bump_patch(Path::new("version.txt"), BumpOptions::default())?;
/// println!("{} -> {}", outcome.previous, outcome.current);
/// # Ok::<(), patchbump::core::bump::BumpError>(())
/// ```
pub fn bump_patch(path: &Path, options: BumpOptions) -> Result<BumpOutcome, BumpError> {
    let _lock = if options.lock {
        Some(VersionLock::acquire(path)?)
    } else {
        None
    };

    let previous = version_file::load(path)?;
    let current = previous.increment()?;

    if !options.dry_run {
        version_file::store(path, &current)?;
    }

    Ok(BumpOutcome {
        path: path.to_path_buf(),
        previous,
        current,
        written: !options.dry_run,
    })
}
