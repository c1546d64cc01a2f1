//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Regular
//! output goes to stdout so CI logs capture it; warnings, errors, and
//! debug traces go to stderr.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a `key: value` line as used by the diagnostic echoes.
pub fn format_field(key: &str, value: impl Display) -> String {
    format!("{}: {}", key, value)
}

/// Format an error and its chain of causes on one line.
///
/// A cause whose text already appears in the previous message is skipped,
/// since error types here embed their source in their own message.
pub fn format_error_chain(err: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if parts.last().is_some_and(|prev| prev.contains(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        // Quiet wins over debug
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
    }

    #[test]
    fn field_format() {
        assert_eq!(format_field("patch", 2), "patch: 2");
        assert_eq!(format_field("new version", "1.4.3"), "new version: 1.4.3");
    }

    #[test]
    fn error_chain_joins_causes() {
        let err = anyhow::anyhow!("inner").context("outer");
        assert_eq!(format_error_chain(&err), "outer: inner");
    }

    #[test]
    fn error_chain_skips_embedded_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = anyhow::Error::new(crate::core::version_file::VersionFileError::FileAccess {
            op: crate::core::version_file::FileOp::Read,
            path: "version.txt".into(),
            source: io,
        })
        .context("Failed to bump version");

        assert_eq!(
            format_error_chain(&err),
            "Failed to bump version: failed to read version file 'version.txt': not found"
        );
    }
}
