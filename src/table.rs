//! The `HashTable` façade: owns configuration, storage, and metrics, and dispatches
//! insert/search/lookup to the probing or chaining engine according to the configured
//! strategy.

use crate::chain::Chain;
use crate::chaining_engine::{self, ChainInsertOutcome};
use crate::config::Configuration;
use crate::hash_functions::{division_hash, fibonacci_hash};
use crate::metrics::Metrics;
use crate::node_pool::NodePool;
use crate::probing::{self, InsertOutcome};

/// Either an open-addressing slot array or a chain array backed by a shared node pool.
/// Exactly one variant is populated, selected once at construction by the strategy.
enum Storage {
    OpenAddressing(Vec<Option<i64>>),
    Chained { chains: Vec<Chain>, pool: NodePool },
}

/// The hash table. Single-threaded, synchronous; see the crate-level docs for the
/// concurrency model.
pub struct HashTable {
    config: Configuration,
    storage: Storage,
    metrics: Metrics,
}

impl HashTable {
    /// Builds a table from an already-validated [`Configuration`]. For chaining, also
    /// allocates a [`NodePool`] of `2 * table_size` nodes and one [`Chain`] per slot.
    pub fn new(config: Configuration) -> Self {
        let n = config.table_size() as usize;
        let mut metrics = Metrics::new();
        metrics.set_table_size(config.table_size());

        let storage = if config.strategy().is_chaining() {
            Storage::Chained {
                chains: vec![Chain::new(); n],
                pool: NodePool::with_capacity(2 * n),
            }
        } else {
            Storage::OpenAddressing(vec![None; n])
        };

        HashTable {
            config,
            storage,
            metrics,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn home_index(&self, key: i64) -> usize {
        let n = self.config.table_size();
        match self.config.hash_method() {
            crate::config::HashMethod::Division { modulus } => division_hash(key, modulus, n),
            crate::config::HashMethod::Fibonacci => fibonacci_hash(key, n),
        }
    }

    /// Inserts `key`. `TableFull`/`PoolExhausted` are absorbed: the metrics reflect the work
    /// performed and a `tracing::warn!` diagnostic is emitted, but nothing is returned to the
    /// caller — these are not errors per the core's propagation policy.
    pub fn insert(&mut self, key: i64) {
        let home = self.home_index(key);
        let (c1, c2) = self.config.strategy().probe_constants();
        let quadratic = self.config.strategy().is_quadratic();

        match &mut self.storage {
            Storage::OpenAddressing(slots) => {
                match probing::insert(slots, key, home, quadratic, c1, c2, &mut self.metrics) {
                    InsertOutcome::Inserted { .. } => {}
                    InsertOutcome::TableFull => {
                        tracing::warn!(key, home, "hash table full, insert skipped");
                    }
                }
            }
            Storage::Chained { chains, pool } => {
                match chaining_engine::insert(chains, key, home, pool, &mut self.metrics) {
                    ChainInsertOutcome::Inserted => {}
                    ChainInsertOutcome::PoolExhausted => {
                        tracing::warn!(key, home, "node pool exhausted, insert skipped");
                    }
                }
            }
        }
    }

    /// Searches for `key`, mutating metrics as it walks.
    pub fn search(&mut self, key: i64) -> bool {
        let home = self.home_index(key);
        let (c1, c2) = self.config.strategy().probe_constants();
        let quadratic = self.config.strategy().is_quadratic();

        match &mut self.storage {
            Storage::OpenAddressing(slots) => {
                probing::search(slots, key, home, quadratic, c1, c2, &mut self.metrics)
            }
            Storage::Chained { chains, pool } => {
                chaining_engine::search(chains, key, home, pool, &mut self.metrics)
            }
        }
    }

    /// Identical walk to [`HashTable::search`] but never mutates metrics.
    pub fn lookup(&self, key: i64) -> bool {
        let home = self.home_index(key);
        let (c1, c2) = self.config.strategy().probe_constants();
        let quadratic = self.config.strategy().is_quadratic();

        match &self.storage {
            Storage::OpenAddressing(slots) => probing::lookup(slots, key, home, quadratic, c1, c2),
            Storage::Chained { chains, pool } => chaining_engine::lookup(chains, key, home, pool),
        }
    }

    /// Resets every slot/chain to empty and every metric to zero.
    pub fn clear(&mut self) {
        match &mut self.storage {
            Storage::OpenAddressing(slots) => {
                for slot in slots.iter_mut() {
                    *slot = None;
                }
            }
            Storage::Chained { chains, pool } => {
                for chain in chains.iter_mut() {
                    chain.clear(pool);
                }
            }
        }
        self.metrics.reset_all();
    }

    /// The open-addressing slot array, or `None` if this table uses chaining.
    pub fn raw_open_addressing(&self) -> Option<&[Option<i64>]> {
        match &self.storage {
            Storage::OpenAddressing(slots) => Some(slots),
            Storage::Chained { .. } => None,
        }
    }

    /// The chain array and its backing pool, or `None` if this table uses open addressing.
    pub fn raw_chains(&self) -> Option<(&[Chain], &NodePool)> {
        match &self.storage {
            Storage::Chained { chains, pool } => Some((chains, pool)),
            Storage::OpenAddressing(_) => None,
        }
    }

    /// One display string per slot, in index order: `"None"`/the key for open addressing,
    /// the chain rendering for chaining. Used by the report formatter.
    pub fn cells(&self) -> Vec<String> {
        match &self.storage {
            Storage::OpenAddressing(slots) => slots
                .iter()
                .map(|slot| match slot {
                    Some(k) => k.to_string(),
                    None => "None".to_string(),
                })
                .collect(),
            Storage::Chained { chains, pool } => chains.iter().map(|c| c.render(pool)).collect(),
        }
    }
}
