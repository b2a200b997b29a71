//! Lines the engine writes back to the GUI.

use std::fmt;
use std::time::Duration;

pub const ENGINE_NAME: &str = env!("CARGO_PKG_NAME");
pub const ENGINE_AUTHOR: &str = "minimax_engine authors";

/// Move text sent when there is nothing to play
pub const NULL_MOVE: &str = "0000";

/// One line of protocol output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciResponse {
    IdName(String),
    IdAuthor(String),
    /// Pre-formatted `option name ...` line
    Option(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    /// Free text, sent as `info string <text>`
    InfoString(String),
}

impl UciResponse {
    #[must_use]
    pub fn info_string(message: impl Into<String>) -> Self {
        UciResponse::InfoString(message.into())
    }

    #[must_use]
    pub fn perft(depth: usize, nodes: u64, elapsed: Duration) -> Self {
        UciResponse::InfoString(format!(
            "perft depth {depth} nodes {nodes} time_ms {}",
            elapsed.as_millis()
        ))
    }
}

impl fmt::Display for UciResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciResponse::IdName(name) => write!(f, "id name {name}"),
            UciResponse::IdAuthor(author) => write!(f, "id author {author}"),
            UciResponse::Option(line) => write!(f, "{line}"),
            UciResponse::UciOk => write!(f, "uciok"),
            UciResponse::ReadyOk => write!(f, "readyok"),
            UciResponse::BestMove(mv) => write!(f, "bestmove {mv}"),
            UciResponse::InfoString(msg) => write!(f, "info string {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_lines() {
        assert_eq!(
            UciResponse::IdName(ENGINE_NAME.to_string()).to_string(),
            "id name minimax_engine"
        );
        assert_eq!(
            UciResponse::IdAuthor("someone".to_string()).to_string(),
            "id author someone"
        );
        assert_eq!(UciResponse::UciOk.to_string(), "uciok");
        assert_eq!(UciResponse::ReadyOk.to_string(), "readyok");
        assert_eq!(
            UciResponse::BestMove("e2e4".to_string()).to_string(),
            "bestmove e2e4"
        );
        assert_eq!(
            UciResponse::info_string("hello world").to_string(),
            "info string hello world"
        );
    }

    #[test]
    fn test_perft_line() {
        let line = UciResponse::perft(3, 8902, Duration::from_millis(12)).to_string();
        assert_eq!(line, "info string perft depth 3 nodes 8902 time_ms 12");
    }
}
