//! Singly-linked chain backed by a shared [`NodePool`].
//!
//! A `Chain` holds only a head index into the pool's arena — it never owns pool storage
//! itself, matching the spec's "Chains hold weak references to the shared NodePool" rule.

use crate::metrics::Metrics;
use crate::node_pool::NodePool;

/// One bucket's worth of chained keys, head-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    head: Option<usize>,
    len: usize,
}

impl Chain {
    pub fn new() -> Self {
        Chain { head: None, len: 0 }
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the chain (one comparison per node, counted whether or not it matches), then
    /// pops a node from `pool` and links it at the head. Returns `false` without mutating
    /// anything but `metrics.comparisons`/`metrics.total_collisions` if `pool` is exhausted —
    /// the caller is responsible for emitting the `PoolExhausted` diagnostic.
    pub fn insert(&mut self, key: i64, pool: &mut NodePool, metrics: &mut Metrics) -> bool {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            metrics.add_comparison();
            cursor = pool.next_of(idx);
        }

        let was_nonempty = !self.is_empty();
        if was_nonempty {
            metrics.add_collision();
        }

        match pool.pop() {
            Some(node_idx) => {
                pool.set_key_at(node_idx, key);
                pool.set_next_of(node_idx, self.head);
                self.head = Some(node_idx);
                self.len += 1;
                metrics.add_insertion();
                true
            }
            None => false,
        }
    }

    /// Walks the chain, counting one comparison per node visited, returning `true` on the
    /// first match.
    pub fn search(&self, key: i64, pool: &NodePool, metrics: &mut Metrics) -> bool {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            metrics.add_comparison();
            if pool.key_at(idx) == key {
                return true;
            }
            cursor = pool.next_of(idx);
        }
        false
    }

    /// Identical walk to `search`, but never touches `metrics`.
    pub fn lookup(&self, key: i64, pool: &NodePool) -> bool {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if pool.key_at(idx) == key {
                return true;
            }
            cursor = pool.next_of(idx);
        }
        false
    }

    /// Returns every node of this chain to `pool` and empties the chain.
    pub fn clear(&mut self, pool: &mut NodePool) {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let next = pool.next_of(idx);
            pool.push(idx);
            cursor = next;
        }
        self.head = None;
        self.len = 0;
    }

    /// Renders keys head-to-tail (most-recently-inserted first), e.g. `"11 -> 6 -> 1 -> None"`.
    pub fn render(&self, pool: &NodePool) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            parts.push(pool.key_at(idx).to_string());
            cursor = pool.next_of(idx);
        }
        parts.push("None".to_string());
        parts.join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_renders_most_recent_first() {
        let mut pool = NodePool::with_capacity(8);
        let mut metrics = Metrics::new();
        let mut chain = Chain::new();

        chain.insert(1, &mut pool, &mut metrics);
        chain.insert(6, &mut pool, &mut metrics);
        chain.insert(11, &mut pool, &mut metrics);

        assert_eq!(chain.render(&pool), "11 -> 6 -> 1 -> None");
        assert_eq!(chain.size(), 3);
    }

    #[test]
    fn scenario_e_metrics() {
        let mut pool = NodePool::with_capacity(10);
        let mut metrics = Metrics::new();
        let mut chain = Chain::new();

        chain.insert(1, &mut pool, &mut metrics);
        chain.insert(6, &mut pool, &mut metrics);
        chain.insert(11, &mut pool, &mut metrics);

        assert_eq!(metrics.comparisons(), 0 + 1 + 2);
        assert_eq!(metrics.total_collisions(), 2);
        assert_eq!(metrics.insertions(), 3);
        assert_eq!(metrics.probes(), 0);
        assert_eq!(metrics.primary_collisions(), 0);
        assert_eq!(metrics.secondary_collisions(), 0);
    }

    #[test]
    fn search_and_lookup_agree_and_lookup_is_metrics_free() {
        let mut pool = NodePool::with_capacity(8);
        let mut metrics = Metrics::new();
        let mut chain = Chain::new();
        chain.insert(42, &mut pool, &mut metrics);

        let before = metrics.comparisons();
        assert!(chain.lookup(42, &pool));
        assert!(!chain.lookup(7, &pool));
        assert_eq!(metrics.comparisons(), before);

        assert!(chain.search(42, &pool, &mut metrics));
        assert!(metrics.comparisons() > before);
    }

    #[test]
    fn clear_returns_all_nodes_to_pool() {
        let mut pool = NodePool::with_capacity(4);
        let mut metrics = Metrics::new();
        let mut chain = Chain::new();
        chain.insert(1, &mut pool, &mut metrics);
        chain.insert(2, &mut pool, &mut metrics);
        assert_eq!(pool.size(), 2);

        chain.clear(&mut pool);
        assert_eq!(pool.size(), 4);
        assert!(chain.is_empty());
        assert_eq!(chain.render(&pool), "None");
    }

    #[test]
    fn insert_fails_without_mutation_when_pool_exhausted() {
        let mut pool = NodePool::with_capacity(0);
        let mut metrics = Metrics::new();
        let mut chain = Chain::new();

        assert!(!chain.insert(1, &mut pool, &mut metrics));
        assert_eq!(chain.size(), 0);
        assert_eq!(metrics.insertions(), 0);
    }
}
