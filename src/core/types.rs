//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`VersionIdentifier`] - Validated `MAJOR.MINOR.PATCH` version
//!
//! # Validation
//!
//! Versions are validated at construction time. A string that does not
//! split into exactly three decimal components cannot be represented, so
//! malformed input is rejected before anything is written back.
//!
//! # Examples
//!
//! ```
//! use patchbump::core::types::VersionIdentifier;
//!
//! let version: VersionIdentifier = "3.12.9".parse().unwrap();
//! assert_eq!(version.increment().unwrap().to_string(), "3.12.10");
//!
//! assert!("1.2".parse::<VersionIdentifier>().is_err());
//! assert!("1.2.x".parse::<VersionIdentifier>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between version components.
pub const COMPONENT_SEPARATOR: char = '.';

/// Errors from version validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version '{input}': expected 3 components, found {found}")]
    ComponentCount { input: String, found: usize },

    #[error("malformed version '{input}': {component} component '{value}' is not a non-negative integer")]
    InvalidComponent {
        input: String,
        component: Component,
        value: String,
    },

    #[error("patch component {0} cannot be incremented without overflow")]
    PatchOverflow(u64),
}

/// Names the three positional components of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    const ORDER: [Component; 3] = [Component::Major, Component::Minor, Component::Patch];

    /// Get the component name as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A three-component numeric version identifier.
///
/// The canonical text form is `"{major}.{minor}.{patch}"` with no
/// surrounding whitespace. Leading zeros are accepted on input and are
/// not preserved on output (`"1.02.3"` reads as `1.2.3`).
///
/// # Example
///
/// ```
/// use patchbump::core::types::VersionIdentifier;
///
/// let version = VersionIdentifier::new(1, 4, 2);
/// assert_eq!(version.to_string(), "1.4.2");
///
/// let parsed: VersionIdentifier = " 1.4.2\n".parse().unwrap();
/// assert_eq!(parsed, version);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionIdentifier {
    major: u64,
    minor: u64,
    patch: u64,
}

impl VersionIdentifier {
    /// Create a version from its components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from text.
    ///
    /// Surrounding whitespace (including a trailing newline) is stripped
    /// before splitting on `.`.
    ///
    /// # Errors
    ///
    /// - [`VersionError::ComponentCount`] unless there are exactly three fields
    /// - [`VersionError::InvalidComponent`] if a field is empty, contains
    ///   anything other than ASCII digits, or does not fit in a `u64`
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let trimmed = input.trim();
        let fields: Vec<&str> = trimmed.split(COMPONENT_SEPARATOR).collect();

        if fields.len() != Component::ORDER.len() {
            return Err(VersionError::ComponentCount {
                input: trimmed.to_string(),
                found: fields.len(),
            });
        }

        let mut values = [0u64; 3];
        for ((slot, field), component) in values.iter_mut().zip(&fields).zip(Component::ORDER) {
            *slot = parse_component(trimmed, component, field)?;
        }

        let [major, minor, patch] = values;
        Ok(Self::new(major, minor, patch))
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Return the next patch version.
    ///
    /// Major and minor are never touched; the patch component grows
    /// without rolling over.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::PatchOverflow`] if the patch is `u64::MAX`.
    pub fn increment(&self) -> Result<Self, VersionError> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or(VersionError::PatchOverflow(self.patch))?;
        Ok(Self { patch, ..*self })
    }
}

/// Parse a single field, accepting only ASCII digits.
///
/// `u64::from_str` alone would accept a leading `+`.
fn parse_component(input: &str, component: Component, field: &str) -> Result<u64, VersionError> {
    let invalid = || VersionError::InvalidComponent {
        input: input.to_string(),
        component,
        value: field.to_string(),
    };

    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    field.parse().map_err(|_| invalid())
}

impl FromStr for VersionIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionIdentifier {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VersionIdentifier> for String {
    fn from(value: VersionIdentifier) -> Self {
        value.to_string()
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.major,
            self.minor,
            self.patch,
            sep = COMPONENT_SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn valid() {
            let v = VersionIdentifier::parse("1.4.2").unwrap();
            assert_eq!((v.major(), v.minor(), v.patch()), (1, 4, 2));
        }

        #[test]
        fn strips_surrounding_whitespace() {
            let v = VersionIdentifier::parse("  1.4.2\n").unwrap();
            assert_eq!(v, VersionIdentifier::new(1, 4, 2));
        }

        #[test]
        fn accepts_leading_zeros() {
            let v = VersionIdentifier::parse("01.002.3").unwrap();
            assert_eq!(v, VersionIdentifier::new(1, 2, 3));
        }

        #[test]
        fn too_few_components() {
            let err = VersionIdentifier::parse("1.2").unwrap_err();
            assert_eq!(
                err,
                VersionError::ComponentCount {
                    input: "1.2".into(),
                    found: 2
                }
            );
        }

        #[test]
        fn too_many_components() {
            let err = VersionIdentifier::parse("1.2.3.4").unwrap_err();
            assert!(matches!(err, VersionError::ComponentCount { found: 4, .. }));
        }

        #[test]
        fn empty_input() {
            let err = VersionIdentifier::parse("").unwrap_err();
            assert!(matches!(err, VersionError::ComponentCount { found: 1, .. }));
        }

        #[test]
        fn non_numeric_patch() {
            let err = VersionIdentifier::parse("1.2.x").unwrap_err();
            assert_eq!(
                err,
                VersionError::InvalidComponent {
                    input: "1.2.x".into(),
                    component: Component::Patch,
                    value: "x".into(),
                }
            );
        }

        #[test]
        fn empty_component() {
            let err = VersionIdentifier::parse("1..3").unwrap_err();
            assert!(matches!(
                err,
                VersionError::InvalidComponent {
                    component: Component::Minor,
                    ..
                }
            ));
        }

        #[test]
        fn rejects_signs_and_inner_whitespace() {
            assert!(VersionIdentifier::parse("+1.2.3").is_err());
            assert!(VersionIdentifier::parse("-1.2.3").is_err());
            assert!(VersionIdentifier::parse("1. 2.3").is_err());
        }

        #[test]
        fn rejects_out_of_range() {
            let err = VersionIdentifier::parse("1.2.99999999999999999999").unwrap_err();
            assert!(matches!(
                err,
                VersionError::InvalidComponent {
                    component: Component::Patch,
                    ..
                }
            ));
        }
    }

    mod increment {
        use super::*;

        #[test]
        fn zero_version() {
            let v = VersionIdentifier::new(0, 0, 0).increment().unwrap();
            assert_eq!(v.to_string(), "0.0.1");
        }

        #[test]
        fn patch_is_numeric_not_textual() {
            let v: VersionIdentifier = "3.12.9".parse().unwrap();
            assert_eq!(v.increment().unwrap().to_string(), "3.12.10");
        }

        #[test]
        fn major_and_minor_unchanged() {
            let v = VersionIdentifier::new(7, 99, 41).increment().unwrap();
            assert_eq!(v, VersionIdentifier::new(7, 99, 42));
        }

        #[test]
        fn overflow_is_an_error() {
            let err = VersionIdentifier::new(1, 0, u64::MAX).increment().unwrap_err();
            assert_eq!(err, VersionError::PatchOverflow(u64::MAX));
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(VersionIdentifier::new(1, 4, 2).to_string(), "1.4.2");
    }

    #[test]
    fn serde_uses_canonical_string() {
        let v = VersionIdentifier::new(2, 0, 11);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"2.0.11\"");

        let back: VersionIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<VersionIdentifier>("\"2.0\"").is_err());
    }

    #[test]
    fn error_display_formatting() {
        let err = VersionIdentifier::parse("1.2").unwrap_err();
        assert!(err.to_string().contains("expected 3 components"));

        let err = VersionIdentifier::parse("1.2.x").unwrap_err();
        assert!(err.to_string().contains("patch component 'x'"));
    }
}
