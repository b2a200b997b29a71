use std::io::Write;
use std::process::{Command, Output, Stdio};

use minimax_engine::board::{Board, PositionOracle};
use minimax_engine::uci::parse_position_command;

/// Run the engine binary on `input` and collect everything it wrote.
fn run_engine(input: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_minimax_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write commands");

    child.wait_with_output().expect("failed to read output")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn bestmove(lines: &[String]) -> String {
    let line = lines
        .iter()
        .find(|l| l.starts_with("bestmove "))
        .expect("no bestmove found");
    line["bestmove ".len()..].trim().to_string()
}

fn board_from(command: &str) -> Board {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let mut board = Board::new();
    parse_position_command(&mut board, &parts).expect("valid position command");
    board
}

#[test]
fn uci_handshake() {
    let output = run_engine("uci\nisready\nquit\n");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "id name minimax_engine");
    assert!(lines[1].starts_with("id author "));
    assert!(lines
        .iter()
        .any(|l| l == "option name SearchDepth type spin default 2 min 1 max 4294967295"));

    let uciok = lines.iter().position(|l| l == "uciok").expect("no uciok");
    let readyok = lines.iter().position(|l| l == "readyok").expect("no readyok");
    assert!(uciok < readyok);
}

#[test]
fn startpos_go_returns_legal_move() {
    let output = run_engine("uci\nisready\nposition startpos\ngo\nquit\n");
    assert!(output.status.success());

    let mv = bestmove(&stdout_lines(&output));
    let legal = Board::new().legal_moves();
    assert!(legal.contains(&mv), "bestmove not legal in position: {mv}");
}

#[test]
fn setoption_then_go_after_moves() {
    let position = "position startpos moves e2e4 e7e5";
    let output = run_engine(&format!(
        "setoption name SearchDepth value 1\n{position}\ngo depth 9\nquit\n"
    ));
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "info string SearchDepth set to 1");

    let mv = bestmove(&lines);
    let legal = board_from(position).legal_moves();
    assert!(legal.contains(&mv), "bestmove not legal in position: {mv}");
}

#[test]
fn bad_setoption_value_is_reported() {
    let output = run_engine("setoption name SearchDepth value -3\nquit\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["info string invalid SearchDepth value: -3"]
    );
}

#[test]
fn finds_queen_mate() {
    let output = run_engine("position fen 6k1/8/5Q1K/8/8/8/8/8 w - - 0 1\ngo\nquit\n");
    assert!(output.status.success());

    let mv = bestmove(&stdout_lines(&output));
    let mut board = board_from("position fen 6k1/8/5Q1K/8/8/8/8/8 w - - 0 1");
    board.apply_move(&mv).expect("bestmove is legal");
    assert!(board.is_checkmate(), "{mv} does not mate");
}

#[test]
fn go_applies_move_to_session_position() {
    // After Qg7# Black has nothing to play.
    let output = run_engine("position fen 6k1/8/5Q1K/8/8/8/8/8 w - - 0 1\ngo\ngo\nquit\n");
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["bestmove f6g7", "info string no legal moves", "bestmove 0000"]
    );
}

#[test]
fn illegal_listed_moves_are_skipped() {
    let output = run_engine("position startpos moves e2e4 e2e5 e7e5 zz9\nperft 1\nquit\n");
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let expected = board_from("position startpos moves e2e4 e7e5").legal_moves().len();
    assert!(
        lines[0].starts_with(&format!("info string perft depth 1 nodes {expected} ")),
        "{}",
        lines[0]
    );
}

#[test]
fn perft_from_start() {
    let output = run_engine("perft 3\nquit\n");
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(
        lines[0].starts_with("info string perft depth 3 nodes 8902 time_ms "),
        "{}",
        lines[0]
    );
}

#[test]
fn unknown_and_silent_commands_produce_no_output() {
    let output = run_engine("hello\nstop\nponderhit\ndebug on\n\nisready\nquit\n");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["readyok"]);
}

#[test]
fn commands_after_quit_are_ignored() {
    let output = run_engine("quit\nisready\n");
    assert!(output.status.success());
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn end_of_input_exits_cleanly() {
    let output = run_engine("isready\n");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["readyok"]);
}

#[test]
fn malformed_fen_is_fatal() {
    let output = run_engine("isready\nposition fen rnbqkbnr/pppppppp w KQkq - 0 1\nisready\nquit\n");
    assert!(!output.status.success());
    assert_eq!(stdout_lines(&output), vec!["readyok"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Fatal error"), "{stderr}");
}

#[test]
fn unplayable_fen_is_fatal() {
    // Black is in check with White to move.
    let output = run_engine("position fen 6k1/5Q2/7K/8/8/8/8/8 w - - 0 1\ngo\nquit\n");
    assert!(!output.status.success());
    assert!(stdout_lines(&output).is_empty());
}
