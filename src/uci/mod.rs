//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Tokenizing, `position` and `setoption` parsing, and the output lines the
//! engine sends back. The session state machine lives in [`crate::engine`].

use std::fmt;

use crate::board::{Board, NotationError, PositionOracle};

pub mod command;
pub mod options;
pub mod report;

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(NotationError),
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) => Some(e),
            UciError::MissingParts => None,
        }
    }
}

impl From<NotationError> for UciError {
    fn from(e: NotationError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a UCI position command and replace `board` with the result.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". Moves that are not
/// legal when reached are skipped. On error `board` is left untouched.
///
/// # Errors
///
/// Returns [`UciError::MissingParts`] when neither `startpos` nor `fen`
/// follows `position`, and [`UciError::InvalidFen`] when the FEN fields do
/// not describe a playable position.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;
    let Some(kind) = parts.get(i) else {
        return Err(UciError::MissingParts);
    };

    let mut next = Board::new();
    if kind.eq_ignore_ascii_case("startpos") {
        i += 1;
    } else if kind.eq_ignore_ascii_case("fen") {
        let fields: Vec<&str> = parts[i + 1..]
            .iter()
            .take_while(|token| !token.eq_ignore_ascii_case("moves"))
            .copied()
            .collect();
        if fields.is_empty() {
            return Err(UciError::MissingParts);
        }
        next.load_from_notation(&fields.join(" "))?;
        i += 1 + fields.len();
    } else {
        return Err(UciError::MissingParts);
    }

    if parts.get(i).is_some_and(|token| token.eq_ignore_ascii_case("moves")) {
        for mv in &parts[i + 1..] {
            if let Err(e) = next.apply_move(mv) {
                log::debug!("skipping move in position command: {e}");
            }
        }
    }

    *board = next;
    Ok(())
}
