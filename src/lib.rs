//! patchbump - Bump the patch component of a version file
//!
//! patchbump is a single-binary CI helper. It reads a `MAJOR.MINOR.PATCH`
//! string from a file under a workspace root, adds one to the patch
//! component, and writes the result back.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, resolves config)
//! - [`core`] - Version type, version file I/O, locking, configuration
//! - [`ui`] - Console output utilities
//!
//! # Correctness Invariants
//!
//! 1. Only well-formed three-component versions are ever written
//! 2. Major and minor components are never changed by a bump
//! 3. A failed bump leaves the version file untouched
//! 4. A missing version file is never created by a bump

pub mod cli;
pub mod core;
pub mod ui;
