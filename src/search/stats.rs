use std::fmt;

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the recursive search, cache hits included
    pub nodes: u64,
    pub cache_hits: u64,
    /// Move loops abandoned early because `beta <= alpha`
    pub cutoffs: u64,
    pub evaluations: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} cache_hits {} cutoffs {} evaluations {}",
            self.nodes, self.cache_hits, self.cutoffs, self.evaluations
        )
    }
}
