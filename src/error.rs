//! Error types for tinct

use thiserror::Error;

/// Result type for tinct operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the strict hex parser. The conversions themselves never
/// fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The hex string does not have 3, 6 or 8 digits after the optional `#`.
    #[error("Invalid hex length: expected 3, 6 or 8 digits, got {0}")]
    HexLength(usize),

    /// The hex string contains something other than a hexadecimal digit.
    #[error("Invalid hex digit {digit:?} at position {position}")]
    HexDigit {
        /// The offending character.
        digit: char,
        /// The position of the character, not counting the `#`.
        position: usize,
    },
}
