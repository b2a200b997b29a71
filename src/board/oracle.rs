use super::{Color, Grid, MoveError, NotationError};

/// A mutable game position with make/undo semantics.
///
/// Every successful [`apply_move`](PositionOracle::apply_move) must be
/// paired with exactly one [`undo_last_move`](PositionOracle::undo_last_move)
/// before the caller returns, so that the position is left exactly as it
/// was found.
pub trait PositionOracle {
    /// Legal moves in UCI notation, in generation order.
    fn legal_moves(&self) -> Vec<String>;

    /// Plays `mv` on the current position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if `mv` is not a legal move here; the position
    /// is left untouched.
    fn apply_move(&mut self, mv: &str) -> Result<(), MoveError>;

    /// Takes back the most recent move. Returns `false` when there is
    /// nothing to take back.
    fn undo_last_move(&mut self) -> bool;

    fn is_checkmate(&self) -> bool;

    /// Stalemate or any other automatic draw.
    fn is_stalemate_or_other_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate_or_other_draw()
    }

    fn side_to_move(&self) -> Color;

    /// Complete textual encoding of the position, used as a cache key.
    fn canonical_key(&self) -> String;

    fn board(&self) -> Grid;

    /// Replaces the position with the one described by a six-field FEN.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError`] on malformed or unplayable input; the
    /// position is left untouched.
    fn load_from_notation(&mut self, notation: &str) -> Result<(), NotationError>;

    fn load_starting_position(&mut self);
}
