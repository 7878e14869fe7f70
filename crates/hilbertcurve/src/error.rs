//! Error types returned by curve construction and the distance/point
//! transforms.

use std::result;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = result::Result<T, Error>;

/// Failures reported to callers. Every variant is a validation failure; the
/// bit transforms themselves cannot fail once their inputs are in range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested order or dimension count cannot describe a curve.
    #[error("invalid curve configuration: {0}")]
    InvalidConfig(String),
    /// A distance or point lies outside the domain of the configured curve.
    #[error("{what} {value} is out of range (expected {expected})")]
    OutOfRange {
        /// The quantity that was rejected.
        what: &'static str,
        /// The offending value, rendered for display.
        value: String,
        /// The accepted bound or shape, rendered for display.
        expected: String,
    },
}

impl Error {
    /// Shorthand for building an [`Error::OutOfRange`].
    pub(crate) fn out_of_range(
        what: &'static str,
        value: impl ToString,
        expected: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            what,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}
