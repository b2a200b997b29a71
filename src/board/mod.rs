//! Position oracle: board state, legal moves and terminal-state detection.
//!
//! The search core only talks to positions through [`PositionOracle`].
//! [`Board`] is the concrete implementation: rules, move generation and
//! FEN handling come from `shakmaty`, with a make/undo history stack on top.
//!
//! # Example
//! ```
//! use minimax_engine::board::{Board, PositionOracle};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves().len(), 20);
//!
//! board.apply_move("e2e4").unwrap();
//! assert!(board.undo_last_move());
//! assert_eq!(board.canonical_key(), minimax_engine::board::STARTING_FEN);
//! ```

mod error;
mod oracle;
mod perft;
mod state;
mod types;


pub use error::{MoveError, NotationError};
pub use oracle::PositionOracle;
pub use perft::perft;
pub use state::Board;
pub use types::{Color, Grid, Piece, STARTING_FEN};
