//! core::lock
//!
//! Exclusive advisory lock guarding a bump of the version file.
//!
//! # Architecture
//!
//! A bump is a read-modify-write of a single file. Two CI jobs bumping the
//! same checkout at once would otherwise both read `1.4.2` and both write
//! `1.4.3`. The lock turns that lost update into an immediate failure for
//! the second job.
//!
//! The lock is held on `<version_file>.lock`, next to the resolved (symlink
//! free) version file. The version file itself cannot carry the lock: every
//! store renames a fresh file over it, and a lock on the old file would be
//! left behind on an unlinked inode.
//!
//! # Storage
//!
//! - `<version_file>.lock` - Lock file with OS-level exclusive lock
//!
//! # Invariants
//!
//! - Lock must be held for the entire read-modify-write
//! - Lock is automatically released on drop (RAII pattern)
//! - Lock acquisition is non-blocking (fails fast if locked)
//! - The lock file is only created once the version file is known to exist
//!
//! # Example
//!
//! ```no_run
//! use patchbump::core::lock::VersionLock;
//! use std::path::Path;
//!
//! let lock = VersionLock::acquire(Path::new("/ci/workspace/version.txt"))?;
//!
//! // Read, increment, and store while holding the lock
//! // ...
//!
//! drop(lock);
//! # Ok::<(), patchbump::core::lock::LockError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use super::paths::VersionPaths;

/// Errors from locking operations.
#[derive(Debug, Error)]
pub enum LockError {
    /// Another process already holds the lock.
    #[error("version file '{0}' is locked by another process")]
    AlreadyLocked(PathBuf),

    /// The version file to guard does not exist or cannot be resolved.
    #[error("failed to open '{path}' for locking: {source}")]
    OpenFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create or open the lock file.
    #[error("failed to create lock file '{path}': {source}")]
    CreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to acquire the OS lock.
    #[error("failed to acquire lock on '{path}': {source}")]
    AcquireFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An exclusive lock guarding one version file.
///
/// The lock is released when this guard is dropped, even if the bump
/// fails partway through.
#[derive(Debug)]
pub struct VersionLock {
    /// The open lock file with the lock held.
    file: File,
}

impl VersionLock {
    /// Attempt to lock the version file at `path`.
    ///
    /// This uses OS-level file locking via `fs2`, which works across
    /// processes. The lock is non-blocking - if another process holds
    /// the lock, this returns `LockError::AlreadyLocked` immediately.
    ///
    /// # Errors
    ///
    /// - [`LockError::OpenFailed`] if the version file does not exist
    /// - [`LockError::CreateFailed`] if the lock file cannot be created
    /// - [`LockError::AlreadyLocked`] if another process holds the lock
    /// - [`LockError::AcquireFailed`] if the OS lock cannot be acquired
    pub fn acquire(path: &Path) -> Result<Self, LockError> {
        // Resolving first doubles as the existence check, so a missing
        // version file never leaves a lock file behind
        let target = fs::canonicalize(path).map_err(|source| LockError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let lock_path = VersionPaths::lock_path_for(&target);

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| LockError::CreateFailed {
                path: lock_path.clone(),
                source,
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file }),
            Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
                Err(LockError::AlreadyLocked(path.to_path_buf()))
            }
            Err(source) => Err(LockError::AcquireFailed {
                path: lock_path,
                source,
            }),
        }
    }
}

impl Drop for VersionLock {
    fn drop(&mut self) {
        // Best-effort release on drop - ignore errors since we're dropping
        let _ = FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::VersionIdentifier;
    use crate::core::version_file;
    use tempfile::TempDir;

    fn version_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("version.txt");
        fs::write(&path, "1.0.0").expect("write version file");
        path
    }

    #[test]
    fn lock_creates_sibling_lock_file() {
        let temp = TempDir::new().unwrap();
        let path = version_file(&temp);

        let _lock = VersionLock::acquire(&path).expect("acquire lock");

        assert!(temp.path().join("version.txt.lock").exists());
    }

    #[test]
    fn lock_missing_file_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");

        let err = VersionLock::acquire(&path).unwrap_err();
        match err {
            LockError::OpenFailed { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected OpenFailed, got {other:?}"),
        }
        assert!(!path.exists());
        assert!(!VersionPaths::lock_path_for(&path).exists());
    }

    #[test]
    fn lock_prevents_second_acquire() {
        let temp = TempDir::new().unwrap();
        let path = version_file(&temp);

        let _lock1 = VersionLock::acquire(&path).expect("first acquire");

        let result = VersionLock::acquire(&path);
        assert!(matches!(result, Err(LockError::AlreadyLocked(_))));
    }

    #[test]
    fn lock_survives_store_replacing_the_file() {
        let temp = TempDir::new().unwrap();
        let path = version_file(&temp);

        let _held = VersionLock::acquire(&path).expect("first acquire");
        version_file::store(&path, &VersionIdentifier::new(1, 0, 1)).unwrap();

        let result = VersionLock::acquire(&path);
        assert!(matches!(result, Err(LockError::AlreadyLocked(_))));
    }

    #[test]
    fn lock_released_on_drop() {
        let temp = TempDir::new().unwrap();
        let path = version_file(&temp);

        {
            let _lock = VersionLock::acquire(&path).expect("first acquire");
        }

        VersionLock::acquire(&path).expect("second acquire");
    }

    #[cfg(unix)]
    #[test]
    fn symlink_and_target_share_lock() {
        let temp = TempDir::new().unwrap();
        let path = version_file(&temp);
        let link = temp.path().join("VERSION");
        std::os::unix::fs::symlink(&path, &link).unwrap();

        let _lock = VersionLock::acquire(&link).expect("acquire through link");

        let result = VersionLock::acquire(&path);
        assert!(matches!(result, Err(LockError::AlreadyLocked(_))));
    }
}
