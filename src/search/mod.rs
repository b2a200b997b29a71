//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Features:
//! - Plain recursive minimax, White maximizing
//! - Alpha-beta cutoffs in oracle move order (no move ordering)
//! - Position-keyed transposition cache, cleared per root search
//! - Mate-in-one short-circuit at the root

mod stats;

use std::fmt;

use crate::board::{Color, PositionOracle};
use crate::eval::{evaluate, CHECKMATE_VALUE};
use crate::tt::TranspositionCache;

pub use stats::SearchStats;

/// Search window bound. Negating it never overflows.
pub const INFINITY: i32 = i32::MAX;

/// Default search depth in full moves
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;

/// Outcome of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Chosen move in UCI notation
    pub best_move: String,
    /// Score of the chosen move, White's point of view
    pub score: i32,
    /// Whether the move was taken by the mate-in-one short-circuit
    pub mate_in_one: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The root position has no legal moves
    NoLegalMoves,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoLegalMoves => write!(f, "no legal moves"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Search state that outlives a single call: the cache and its counters.
#[derive(Debug, Default)]
pub struct Searcher {
    tt: TranspositionCache,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionCache {
        &self.tt
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Drop every cached result, e.g. when a new game starts.
    pub fn clear(&mut self) {
        self.tt.clear();
    }

    /// Minimax value of the current position searched `depth` plies deep.
    ///
    /// The cache is consulted first and any entry at least `depth` deep is
    /// returned as is. The position is restored before returning.
    pub fn search<P: PositionOracle + ?Sized>(
        &mut self,
        board: &mut P,
        depth: u32,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        let key = board.canonical_key();
        if let Some(score) = self.tt.probe(&key, depth) {
            self.stats.cache_hits += 1;
            return score;
        }

        if depth == 0 || board.is_game_over() {
            self.stats.evaluations += 1;
            let score = evaluate(board);
            self.tt.store(key, depth, score);
            return score;
        }

        let mut best = if is_maximizing { -INFINITY } else { INFINITY };
        for mv in board.legal_moves() {
            if board.apply_move(&mv).is_err() {
                continue;
            }
            let score = self.search(board, depth - 1, !is_maximizing, alpha, beta);
            board.undo_last_move();

            if is_maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.tt.store(key, depth, best);
        best
    }

    /// Pick a move for the side to move, searching `depth` full moves.
    ///
    /// A move that mates immediately is returned without searching the
    /// rest. Otherwise each move is searched with a fresh window and the
    /// best score for the mover wins; the first move generated wins ties.
    /// A depth of zero is treated as one.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoLegalMoves`] if the position has no moves.
    pub fn find_best_move<P: PositionOracle + ?Sized>(
        &mut self,
        board: &mut P,
        depth: u32,
    ) -> Result<SearchResult, SearchError> {
        self.tt.clear();
        self.stats.reset();

        let depth_plies = depth.max(1).saturating_mul(2);
        let mover = board.side_to_move();
        // The child position belongs to the opponent; Black minimizes.
        let child_maximizing = mover == Color::Black;

        let mut best: Option<(String, i32)> = None;
        for mv in board.legal_moves() {
            if board.apply_move(&mv).is_err() {
                continue;
            }

            if board.is_checkmate() {
                board.undo_last_move();
                let score = CHECKMATE_VALUE * mover.sign();
                log::debug!("{mv} mates in one");
                return Ok(SearchResult {
                    best_move: mv,
                    score,
                    mate_in_one: true,
                });
            }

            let score = self.search(board, depth_plies - 1, child_maximizing, -INFINITY, INFINITY);
            board.undo_last_move();

            let improves = match &best {
                None => true,
                Some((_, best_score)) => match mover {
                    Color::White => score > *best_score,
                    Color::Black => score < *best_score,
                },
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let Some((best_move, score)) = best else {
            return Err(SearchError::NoLegalMoves);
        };

        log::debug!(
            "{mover} depth {depth_plies} plies: {best_move} score {score} ({})",
            self.stats
        );
        Ok(SearchResult {
            best_move,
            score,
            mate_in_one: false,
        })
    }
}
