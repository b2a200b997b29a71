pub mod board;
pub mod engine;
pub mod eval;
pub mod search;
pub mod tt;
pub mod uci;

pub use board::{Board, Color, Piece, PositionOracle};
pub use engine::Session;
pub use search::{SearchResult, Searcher};
pub use tt::TranspositionCache;
