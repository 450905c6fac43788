//! Error type for strict colour-string parsing

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned by the strict [`FromStr`](std::str::FromStr)
/// implementation on [`Colour`](super::Colour).
///
/// The lenient [`Colour::from_string`](super::Colour::from_string) never
/// fails and never produces this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColourError {
    /// The string is not exactly 8 hex digits after trimming and stripping
    /// an optional `#`.
    #[error("invalid colour string length (expected 8 hex digits, got {0})")]
    InvalidLength(usize),

    /// A non-hexadecimal character was encountered.
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}
