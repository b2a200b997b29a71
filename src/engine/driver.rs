use std::fmt;
use std::io::{self, BufRead, Write};

use crate::uci::UciError;

use super::{CommandResult, Session};

/// Reasons the process driver stops before `quit`
#[derive(Debug)]
pub enum DriverError {
    /// Reading commands or writing responses failed
    Io(io::Error),
    /// A command left the session unusable
    Protocol(UciError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io(e) => write!(f, "I/O error: {e}"),
            DriverError::Protocol(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io(e) => Some(e),
            DriverError::Protocol(e) => Some(e),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        DriverError::Io(e)
    }
}

impl From<UciError> for DriverError {
    fn from(e: UciError) -> Self {
        DriverError::Protocol(e)
    }
}

/// Feed `input` to the session line by line, writing responses to `output`.
///
/// Returns once `quit` is processed or the input ends. Output is flushed
/// after every command.
///
/// # Errors
///
/// Returns [`DriverError`] on I/O failure or a `position` command that
/// cannot be applied; no further input is read.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
) -> Result<(), DriverError> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match session.process_command(&line)? {
            CommandResult::Ok(responses) => {
                for response in &responses {
                    writeln!(output, "{response}")?;
                }
                output.flush()?;
            }
            CommandResult::Quit => break,
            CommandResult::Unknown(cmd) => log::debug!("ignoring unknown command '{cmd}'"),
        }
    }

    output.flush()?;
    Ok(())
}
