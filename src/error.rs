//! Error types for pool filtering, key generation, and the outer shells.

use thiserror::Error;

/// Errors produced by keygen.
///
/// Validation variants carry every offending argument at once so callers see
/// one combined report instead of the first failure.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// An argument could not be read as the expected kind of value.
    #[error(
        "Input argument(s) {} have incorrect type(s). Must be {}.",
        quoted(.arguments),
        .expected
    )]
    InvalidArgumentType {
        arguments: Vec<String>,
        expected: &'static str,
    },

    /// An argument contains strings that are not exactly one character.
    #[error(
        "Input argument(s) {} contain strings that are not exactly one character.",
        quoted(.arguments)
    )]
    InvalidCharacterLength { arguments: Vec<String> },

    /// A required argument was not supplied.
    #[error("Input argument '{0}' is required when not running interactively.")]
    MissingRequiredArgument(&'static str),

    /// An argument had the right type but an unusable value.
    #[error("{0}")]
    InvalidArgumentValue(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeygenError>;

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
