use std::io::{self, Write};
use std::process::ExitCode;

use minimax_engine::engine::{run_loop, Session};

/// Log records go to stderr so they never interleave with protocol output.
fn init_logging() {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Stderr);
    builder.init();
}

fn main() -> ExitCode {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();

    match run_loop(&mut session, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal error: {e}");
            ExitCode::FAILURE
        }
    }
}
