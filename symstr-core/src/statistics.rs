//! Session statistics.

use std::fmt;

/// Counters collected while building expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Nodes added to the arena
    pub nodes_created: u64,
    /// Node requests answered by the hash-consing table
    pub cache_hits: u64,
    /// Lifted operations evaluated on the host
    pub folds: u64,
    /// Variables allocated (declared and fresh)
    pub vars_created: u64,
    /// Assertions recorded (user and internal)
    pub assertions: u64,
    /// Derived operators introduced through emulation
    pub emulations: u64,
    /// Emulations answered from the memo table
    pub emulation_hits: u64,
    /// Checkpoints rolled back
    pub rollbacks: u64,
}

impl SessionStats {
    /// Fraction of node requests served from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let requests = self.nodes_created + self.cache_hits;
        if requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / requests as f64
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:       {}", self.nodes_created)?;
        writeln!(
            f,
            "cache hits:  {} ({:.1}%)",
            self.cache_hits,
            self.hit_rate() * 100.0
        )?;
        writeln!(f, "folds:       {}", self.folds)?;
        writeln!(f, "variables:   {}", self.vars_created)?;
        writeln!(f, "assertions:  {}", self.assertions)?;
        writeln!(
            f,
            "emulations:  {} ({} reused)",
            self.emulations, self.emulation_hits
        )?;
        write!(f, "rollbacks:   {}", self.rollbacks)
    }
}
