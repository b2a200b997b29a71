//! Transposition cache for search results.
//!
//! Keyed by the position's canonical FEN, so two move orders that reach the
//! same position share an entry. Entries record the remaining depth they were
//! searched to; a probe only answers when that depth covers the request.

use std::collections::HashMap;

/// A cached search result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TTEntry {
    pub depth: u32,
    pub score: i32,
}

/// Position-keyed cache of `(depth, score)` results.
///
/// Scores are stored as returned by the search, with no bound type, so a
/// score produced inside a narrowed window is reused as if it were exact.
#[derive(Clone, Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<String, TTEntry>,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `key` if it was searched at least `depth` plies deep.
    #[must_use]
    pub fn probe(&self, key: &str, depth: u32) -> Option<i32> {
        self.entries
            .get(key)
            .filter(|entry| entry.depth >= depth)
            .map(|entry| entry.score)
    }

    /// Raw entry for `key`, regardless of depth.
    #[must_use]
    pub fn entry(&self, key: &str) -> Option<TTEntry> {
        self.entries.get(key).copied()
    }

    /// Record a result, replacing whatever was stored for `key`.
    pub fn store(&mut self, key: String, depth: u32, score: i32) {
        self.entries.insert(key, TTEntry { depth, score });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
