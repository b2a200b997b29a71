use std::time::Instant;

use crate::board::{perft, Board, PositionOracle};
use crate::search::Searcher;
use crate::uci::command::{parse_uci_command, UciCommand};
use crate::uci::options::{parse_setoption, EngineOptions};
use crate::uci::parse_position_command;
use crate::uci::report::{UciResponse, ENGINE_AUTHOR, ENGINE_NAME, NULL_MOVE};
use crate::uci::UciError;

use super::CommandResult;

/// One engine session: the live position, the search cache and the options.
///
/// Commands are processed one at a time to completion; `go` searches
/// synchronously before returning.
#[derive(Debug)]
pub struct Session {
    board: Board,
    searcher: Searcher,
    options: EngineOptions,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            searcher: Searcher::new(),
            options: EngineOptions::new(),
            running: true,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// `false` once `quit` has been processed
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Process a single command line.
    ///
    /// # Errors
    ///
    /// Returns [`UciError`] when a `position` command cannot be applied.
    /// The session is left as it was.
    pub fn process_command(&mut self, line: &str) -> Result<CommandResult, UciError> {
        match parse_uci_command(line) {
            Some(cmd) => self.handle_command(cmd),
            None => Ok(CommandResult::Ok(Vec::new())),
        }
    }

    fn handle_command(&mut self, cmd: UciCommand) -> Result<CommandResult, UciError> {
        let responses = match cmd {
            UciCommand::Uci => self.identify(),
            UciCommand::IsReady => vec![UciResponse::ReadyOk],
            UciCommand::UciNewGame => {
                self.board = Board::new();
                self.searcher.clear();
                Vec::new()
            }
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut self.board, &parts)?;
                self.searcher.clear();
                Vec::new()
            }
            UciCommand::Go(_) => self.go(),
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = perft(&mut self.board, depth);
                vec![UciResponse::perft(depth, nodes, start.elapsed())]
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_setoption(&parts)
                    .and_then(|(name, value)| self.options.apply_setoption(&name, value.as_deref()))
                    .into_iter()
                    .collect()
            }
            UciCommand::Debug(_) | UciCommand::Stop | UciCommand::PonderHit => Vec::new(),
            UciCommand::Quit => {
                self.running = false;
                return Ok(CommandResult::Quit);
            }
            UciCommand::Unknown(line) => return Ok(CommandResult::Unknown(line)),
        };

        Ok(CommandResult::Ok(responses))
    }

    fn identify(&self) -> Vec<UciResponse> {
        let mut lines = vec![
            UciResponse::IdName(ENGINE_NAME.to_string()),
            UciResponse::IdAuthor(ENGINE_AUTHOR.to_string()),
        ];
        lines.extend(self.options.option_lines());
        lines.push(UciResponse::UciOk);
        lines
    }

    /// Search, play the chosen move on the live position and report it.
    fn go(&mut self) -> Vec<UciResponse> {
        match self
            .searcher
            .find_best_move(&mut self.board, self.options.search_depth)
        {
            Ok(result) => {
                if let Err(e) = self.board.apply_move(&result.best_move) {
                    log::error!("search returned an unplayable move: {e}");
                }
                vec![UciResponse::BestMove(result.best_move)]
            }
            Err(e) => vec![
                UciResponse::info_string(e.to_string()),
                UciResponse::BestMove(NULL_MOVE.to_string()),
            ],
        }
    }
}
