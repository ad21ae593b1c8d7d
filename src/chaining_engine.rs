//! Dispatches chaining inserts/searches into the per-slot [`Chain`] selected by the home
//! index, and turns a pool-exhaustion failure into the `PoolExhausted` diagnostic.

use crate::chain::Chain;
use crate::metrics::Metrics;
use crate::node_pool::NodePool;

/// Outcome of [`insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainInsertOutcome {
    Inserted,
    PoolExhausted,
}

/// Inserts `key` into the chain at `index`. On pool exhaustion, storage is left unchanged and
/// `insertions` is not incremented; the caller (the table façade) is expected to log the
/// diagnostic, since this module has no logging dependency of its own.
pub fn insert(
    chains: &mut [Chain],
    key: i64,
    index: usize,
    pool: &mut NodePool,
    metrics: &mut Metrics,
) -> ChainInsertOutcome {
    if chains[index].insert(key, pool, metrics) {
        ChainInsertOutcome::Inserted
    } else {
        ChainInsertOutcome::PoolExhausted
    }
}

/// Searches the chain at `index` for `key`, updating `metrics`.
pub fn search(chains: &[Chain], key: i64, index: usize, pool: &NodePool, metrics: &mut Metrics) -> bool {
    chains[index].search(key, pool, metrics)
}

/// Searches the chain at `index` for `key` without touching `metrics`.
pub fn lookup(chains: &[Chain], key: i64, index: usize, pool: &NodePool) -> bool {
    chains[index].lookup(key, pool)
}
