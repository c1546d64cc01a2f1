//! core
//!
//! Core domain types and operations for patchbump.
//!
//! # Modules
//!
//! - [`types`] - Strong types: VersionIdentifier
//! - [`version_file`] - Loading and storing the version file
//! - [`bump`] - The patch bump (load, increment, store)
//! - [`lock`] - Advisory lock around the read-modify-write
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Centralized path routing for the version file
//!
//! # Design Principles
//!
//! - Malformed versions cannot be represented
//! - Paths are passed in explicitly; nothing here reads the environment
//!   except config discovery
//! - A failed run never leaves a partially written file

pub mod bump;
pub mod config;
pub mod lock;
pub mod paths;
pub mod types;
pub mod version_file;
