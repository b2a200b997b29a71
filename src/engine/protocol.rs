//! Result type shared by the session and the process driver.

use crate::uci::report::UciResponse;

/// Result of processing a protocol command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command processed successfully, with the lines to send back
    Ok(Vec<UciResponse>),
    /// Engine should quit
    Quit,
    /// Command not recognized
    Unknown(String),
}

impl CommandResult {
    /// Lines to send back; empty unless the command produced output.
    #[must_use]
    pub fn responses(&self) -> &[UciResponse] {
        match self {
            CommandResult::Ok(responses) => responses,
            CommandResult::Quit | CommandResult::Unknown(_) => &[],
        }
    }
}
