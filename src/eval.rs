//! Static evaluation.
//!
//! Scores are from White's point of view: positive favors White, negative
//! favors Black. Only material and terminal states are scored.

use crate::board::{Color, Grid, PositionOracle};

/// Score of a delivered checkmate. Larger than any reachable material
/// imbalance, so a mate always outranks winning material.
pub const CHECKMATE_VALUE: i32 = 10_000;

/// Evaluate a position.
///
/// A checkmated side to move scores `-CHECKMATE_VALUE` for White and
/// `+CHECKMATE_VALUE` for Black. Stalemate and other automatic draws score 0.
/// Everything else is the material balance of [`material`].
#[must_use]
pub fn evaluate<P: PositionOracle + ?Sized>(board: &P) -> i32 {
    if board.is_checkmate() {
        return match board.side_to_move() {
            Color::Black => CHECKMATE_VALUE,
            Color::White => -CHECKMATE_VALUE,
        };
    }
    if board.is_stalemate_or_other_draw() {
        return 0;
    }
    material(&board.board())
}

/// Material balance of a board snapshot, in pawns.
#[must_use]
pub fn material(grid: &Grid) -> i32 {
    grid.iter()
        .flatten()
        .flatten()
        .map(|(piece, color)| piece.value() * color.sign())
        .sum()
}
