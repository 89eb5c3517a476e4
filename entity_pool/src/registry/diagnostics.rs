//! Occupancy summary across all pools of a registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-pool entity counts plus their total, computed at call time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Pool name -> number of entities in that pool.
    pub pool_counts: BTreeMap<String, usize>,

    /// Sum of all `pool_counts` values.
    pub total_entities: usize,
}

impl Diagnostics {
    /// Build diagnostics from per-pool counts, deriving the total.
    pub fn from_counts(pool_counts: BTreeMap<String, usize>) -> Self {
        let total_entities = pool_counts.values().sum();
        Self {
            pool_counts,
            total_entities,
        }
    }

    /// Count for a single pool, if it is registered.
    pub fn count(&self, pool: &str) -> Option<usize> {
        self.pool_counts.get(pool).copied()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} entities across {} pools",
            self.total_entities,
            self.pool_counts.len()
        )?;
        if !self.pool_counts.is_empty() {
            let parts: Vec<String> = self
                .pool_counts
                .iter()
                .map(|(name, count)| format!("{}: {}", name, count))
                .collect();
            write!(f, " ({})", parts.join(", "))?;
        }
        Ok(())
    }
}
