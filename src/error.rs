// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors here are configuration errors: bad settings files, unreadable
//! directories, or a selection request the stop list cannot satisfy. None of
//! them require recovery beyond keeping the previous state.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Selection Error: {0}")]
    Selection(#[from] SelectionError),
}

/// Reasons a selection request was refused.
///
/// A refused request never changes the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum SelectionError {
    /// The slider has no stop points, so nothing can be selected.
    #[error("the slider has no values")]
    Empty,

    /// The requested index is past the last stop point.
    #[error("index {index} is out of range for {len} values")]
    OutOfRange { index: usize, len: usize },

    /// No stop point carries the requested value.
    #[error("value is not one of the slider's stop points")]
    UnknownValue,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
