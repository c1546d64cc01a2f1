//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All console output goes through this module so the quiet and debug
//! flags are honored the same way by every command.

pub mod output;
