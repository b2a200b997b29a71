//! Engine options settable over the protocol.

use crate::search::DEFAULT_SEARCH_DEPTH;

use super::report::UciResponse;

/// Options the GUI can change with `setoption`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Search depth in full moves
    pub search_depth: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl EngineOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `option` lines advertised in reply to `uci`
    #[must_use]
    pub fn option_lines(&self) -> Vec<UciResponse> {
        vec![UciResponse::Option(format!(
            "option name SearchDepth type spin default {DEFAULT_SEARCH_DEPTH} min 1 max {}",
            u32::MAX
        ))]
    }

    /// Apply one `setoption`, returning the line to report back, if any.
    ///
    /// Option names are matched case-insensitively. A rejected value leaves
    /// the option unchanged.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Option<UciResponse> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "searchdepth" => Some(self.set_search_depth(value)),
            _ => {
                log::warn!("ignoring unknown option '{name}'");
                None
            }
        }
    }

    fn set_search_depth(&mut self, value: Option<&str>) -> UciResponse {
        let Some(raw) = value.map(str::trim) else {
            return UciResponse::info_string("missing SearchDepth value");
        };
        match raw.parse::<u32>() {
            Ok(depth) if depth > 0 => {
                self.search_depth = depth;
                log::debug!("search depth set to {depth} full moves");
                UciResponse::info_string(format!("SearchDepth set to {depth}"))
            }
            _ => UciResponse::info_string(format!("invalid SearchDepth value: {raw}")),
        }
    }
}

/// Split a `setoption` line into its name and optional value.
///
/// Returns `None` if the line is not a `setoption` or names no option.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if !parts.first()?.eq_ignore_ascii_case("setoption") {
        return None;
    }

    #[derive(PartialEq)]
    enum Mode {
        Skip,
        Name,
        Value,
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = Mode::Skip;

    for part in parts.iter().skip(1) {
        if mode != Mode::Value && part.eq_ignore_ascii_case("name") {
            mode = Mode::Name;
        } else if part.eq_ignore_ascii_case("value") {
            mode = Mode::Value;
        } else {
            match mode {
                Mode::Name => name_parts.push(part),
                Mode::Value => value_parts.push(part),
                Mode::Skip => {}
            }
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
