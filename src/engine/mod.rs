//! Engine session and process driver.
//!
//! The session owns all engine state and turns one protocol line into the
//! lines to send back. The driver pumps a line-oriented reader through a
//! session and writes the replies.

mod driver;
mod protocol;
mod session;

pub use driver::{run_loop, DriverError};
pub use protocol::CommandResult;
pub use session::Session;
