//! Error types for parsing colors from text.

use thiserror::Error;

/// Result type alias for colorcast parsing operations.
pub type Result<T> = std::result::Result<T, ParseColorError>;

/// Everything that can go wrong while reading a color from a string.
///
/// Conversions between models never fail, so this only comes out of the
/// [`FromStr`](std::str::FromStr) implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input held nothing but whitespace.
    #[error("empty color string")]
    Empty,

    /// The input had the wrong number of whitespace separated components.
    #[error("expected {expected} components, found {found}")]
    ComponentCount {
        /// Number of components the model takes.
        expected: usize,
        /// Number of components in the input.
        found: usize,
    },

    /// A component could not be read as a number of the required type.
    #[error("invalid component `{0}`")]
    InvalidComponent(String),

    /// A hex color contained something other than hex digits.
    #[error("invalid hex digits in `{0}`")]
    InvalidHex(String),

    /// A hex color had no digits or more than six.
    #[error("hex colors take 1 to 6 digits, found {0}")]
    InvalidHexLength(usize),

    /// The name does not match any supported color space.
    #[error("unknown color space `{0}`")]
    UnknownSpace(String),
}
