//! core::version_file
//!
//! Reading and writing the persisted version file.
//!
//! # Format
//!
//! The file holds one `MAJOR.MINOR.PATCH` string. Surrounding whitespace
//! is ignored on read; nothing but the canonical string is written back,
//! with no trailing newline.
//!
//! # Write Semantics
//!
//! [`store`] replaces the whole file. The new content goes to a sibling
//! scratch file which is synced and then renamed over the target, so a
//! failed write leaves the previous content in place.
//!
//! A symlinked version file is resolved first and its target is replaced,
//! so the link itself survives. Permissions carry over to the new file;
//! ownership does not, the new file belongs to the writing user.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::paths::VersionPaths;
use super::types::{VersionError, VersionIdentifier};

/// The file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

impl std::fmt::Display for FileOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOp::Read => f.write_str("read"),
            FileOp::Write => f.write_str("write"),
        }
    }
}

/// Errors from version file operations.
#[derive(Debug, Error)]
pub enum VersionFileError {
    /// The file is missing, unreadable, or unwritable.
    #[error("failed to {op} version file '{path}': {source}")]
    FileAccess {
        op: FileOp,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file content is not a valid version.
    #[error("version file '{path}' is malformed: {source}")]
    Malformed { path: PathBuf, source: VersionError },
}

impl VersionFileError {
    /// Path of the file involved in the failure.
    pub fn path(&self) -> &Path {
        match self {
            VersionFileError::FileAccess { path, .. } => path,
            VersionFileError::Malformed { path, .. } => path,
        }
    }

    fn access(op: FileOp, path: &Path, source: std::io::Error) -> Self {
        VersionFileError::FileAccess {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read and parse the version stored at `path`.
///
/// # Errors
///
/// - [`VersionFileError::FileAccess`] if the file cannot be read
/// - [`VersionFileError::Malformed`] if the content is not `MAJOR.MINOR.PATCH`
pub fn load(path: &Path) -> Result<VersionIdentifier, VersionFileError> {
    let contents =
        fs::read_to_string(path).map_err(|e| VersionFileError::access(FileOp::Read, path, e))?;

    VersionIdentifier::parse(&contents).map_err(|source| VersionFileError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the content of `path` with the canonical form of `version`.
///
/// Permissions of an existing target are carried over to the new file.
/// A symlink at `path` is followed and the file it points to is replaced.
pub fn store(path: &Path, version: &VersionIdentifier) -> Result<(), VersionFileError> {
    let target = resolve_target(path)?;
    let temp_path = VersionPaths::temp_path_for(&target);

    let result = write_replacing(&target, &temp_path, version.to_string().as_bytes());
    if result.is_err() {
        // Best-effort cleanup; the target is untouched at this point
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Real path of the file `store` should replace. A file that does not exist
/// yet is written at `path` as given.
fn resolve_target(path: &Path) -> Result<PathBuf, VersionFileError> {
    match fs::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(VersionFileError::access(FileOp::Write, path, e)),
    }
}

fn write_replacing(path: &Path, temp_path: &Path, contents: &[u8]) -> Result<(), VersionFileError> {
    let write_err = |e: std::io::Error| VersionFileError::access(FileOp::Write, temp_path, e);

    let mut file = fs::File::create(temp_path).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    drop(file);

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_path, metadata.permissions()).map_err(write_err)?;
    }

    fs::rename(temp_path, path).map_err(|e| VersionFileError::access(FileOp::Write, path, e))
}
