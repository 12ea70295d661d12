//! Crate-level error types.
//!
//! Gesture operations never fail with an error; they report rejection with a
//! `bool` or by leaving the rig untouched. Only preset I/O and loading a
//! saved rig are fallible.

use std::fmt;

/// Errors produced by the camrig crate.
#[derive(Debug)]
pub enum RigError {
    /// Generic I/O failure while reading or writing a preset.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Deserialized camera state that breaks a rig invariant.
    InvalidState(&'static str),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidState(msg) => write!(f, "invalid camera state: {msg}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::InvalidState(_) => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
