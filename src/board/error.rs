//! Error types for position oracle operations.

use std::fmt;

/// Error type for loading a position from FEN notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation must have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// A field could not be parsed
    Malformed { notation: String, reason: String },
    /// The notation parsed but does not describe a playable position
    IllegalPosition { notation: String, reason: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            NotationError::Malformed { notation, reason } => {
                write!(f, "Malformed FEN '{notation}': {reason}")
            }
            NotationError::IllegalPosition { notation, reason } => {
                write!(f, "Unplayable position '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for applying a move given as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Text is not a move in UCI notation
    Unparseable { notation: String },
    /// Move is not legal in the current position
    Illegal { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Unparseable { notation } => {
                write!(f, "Unparseable move '{notation}'")
            }
            MoveError::Illegal { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}
