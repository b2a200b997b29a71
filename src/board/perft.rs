use super::PositionOracle;

/// Counts the leaf nodes `depth` plies below the current position.
///
/// Walks the tree with make/undo only, so it doubles as a check that the
/// oracle restores every position it leaves.
pub fn perft<P: PositionOracle + ?Sized>(board: &mut P, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        if board.apply_move(mv).is_ok() {
            nodes += perft(board, depth - 1);
            board.undo_last_move();
        }
    }

    nodes
}
