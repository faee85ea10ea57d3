use crate::solver::constants::{TARGET, TOLERANCE};

/// Configuration for the search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub target: f64,
    pub tolerance: f64,
    /// Try `+` and `*` only once per unordered pair of positions. Off by
    /// default, since it drops every `+`/`*` node whose operands appear in
    /// the mirrored order.
    pub prune_commutative: bool,
    /// Spread the top-level pairs over the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: TARGET,
            tolerance: TOLERANCE,
            prune_commutative: false,
            parallel: true,
        }
    }
}
