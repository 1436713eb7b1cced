//! Error types.
//!
//! Invalid tag specs are not errors (they fall back to literal rendering);
//! the only failure here is the string boundary into the closed color set.

use thiserror::Error;

/// Errors that can occur when parsing a color name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The name is not one of the eight palette colors.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}
