//! Board state: the live position plus the positions it was reached from.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position};

use super::{Color, Grid, MoveError, NotationError, PositionOracle};

/// Half-moves without a capture or pawn move that end the game in a draw.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of the same position that end the game in a draw.
const FIVEFOLD_REPETITION: usize = 5;

/// Number of fields in a complete FEN record.
const FEN_FIELDS: usize = 6;

/// A chess position with make/undo history.
///
/// `history` holds every position played through since the last load, so
/// undo is a pop and repetition detection is a scan.
#[derive(Clone, Debug, Default)]
pub struct Board {
    position: Chess,
    history: Vec<Chess>,
}

impl Board {
    /// Create a board set to the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from a six-field FEN string.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError`] if the FEN is malformed or unplayable.
    pub fn try_from_fen(fen: &str) -> Result<Self, NotationError> {
        let mut board = Board::new();
        board.load_from_notation(fen)?;
        Ok(board)
    }

    /// Full FEN of the current position.
    ///
    /// The en passant square is only reported when an en passant capture is
    /// actually legal, so transposed positions share one key.
    #[must_use]
    pub fn to_fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }

    /// Moves played since the position was last loaded.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    fn is_fivefold_repetition(&self) -> bool {
        // Only positions since the last irreversible move can repeat.
        let window = self.position.halfmoves() as usize;
        let earlier = self
            .history
            .iter()
            .rev()
            .take(window)
            .filter(|p| **p == self.position)
            .count();
        earlier + 1 >= FIVEFOLD_REPETITION
    }
}

impl PositionOracle for Board {
    fn legal_moves(&self) -> Vec<String> {
        self.position
            .legal_moves()
            .iter()
            .map(|m| m.to_uci(CastlingMode::Standard).to_string())
            .collect()
    }

    fn apply_move(&mut self, mv: &str) -> Result<(), MoveError> {
        let uci: UciMove = mv.parse().map_err(|_| MoveError::Unparseable {
            notation: mv.to_string(),
        })?;
        let m = uci
            .to_move(&self.position)
            .map_err(|_| MoveError::Illegal {
                notation: mv.to_string(),
            })?;

        self.history.push(self.position.clone());
        self.position.play_unchecked(m);
        Ok(())
    }

    fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.position = previous;
                true
            }
            None => false,
        }
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate_or_other_draw(&self) -> bool {
        self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
            || self.is_fivefold_repetition()
    }

    fn side_to_move(&self) -> Color {
        self.position.turn().into()
    }

    fn canonical_key(&self) -> String {
        self.to_fen()
    }

    fn board(&self) -> Grid {
        let mut grid: Grid = [[None; 8]; 8];
        for (square, piece) in self.position.board().iter() {
            grid[square.rank().to_usize()][square.file().to_usize()] =
                Some((piece.role.into(), piece.color.into()));
        }
        grid
    }

    fn load_from_notation(&mut self, notation: &str) -> Result<(), NotationError> {
        let found = notation.split_whitespace().count();
        if found != FEN_FIELDS {
            return Err(NotationError::WrongFieldCount { found });
        }

        let fen: Fen = notation.parse().map_err(|err: shakmaty::fen::ParseFenError| {
            NotationError::Malformed {
                notation: notation.to_string(),
                reason: err.to_string(),
            }
        })?;
        let position = fen
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|err| NotationError::IllegalPosition {
                notation: notation.to_string(),
                reason: err.to_string(),
            })?;

        self.position = position;
        self.history.clear();
        Ok(())
    }

    fn load_starting_position(&mut self) {
        self.position = Chess::default();
        self.history.clear();
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
