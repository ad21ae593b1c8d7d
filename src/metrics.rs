//! Per-operation instrumentation.
//!
//! Every insert/search performed through [`crate::table::HashTable`] updates one shared
//! `Metrics` instance. Counters are monotonically non-decreasing between [`Metrics::reset_all`]
//! calls; `lookup` never touches them.

use std::time::Instant;

use crate::error::TimerError;

/// Wall-clock source, seamed so tests can avoid real sleeps.
///
/// Grounded on the "inject a fake clock" pattern used for benchmark timing in the sibling
/// `harness/runner` crate this workspace's CLI binary takes its shape from.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The production clock: a thin wrapper over [`std::time::Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Counters and timing for one hash table's lifetime (reset on `clear()`).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Metrics {
    comparisons: u64,
    primary_collisions: u64,
    secondary_collisions: u64,
    total_collisions: u64,
    probes: u64,
    insertions: u64,
    table_size: i64,

    #[serde(skip)]
    started_at: Option<Instant>,
    elapsed_ns: Option<u128>,
    mem_bytes: Option<u64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics {
            comparisons: 0,
            primary_collisions: 0,
            secondary_collisions: 0,
            total_collisions: 0,
            probes: 0,
            insertions: 0,
            table_size: 0,
            started_at: None,
            elapsed_ns: None,
            mem_bytes: None,
        }
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn add_primary_collision(&mut self) {
        self.primary_collisions += 1;
        self.total_collisions += 1;
    }

    pub fn add_secondary_collision(&mut self) {
        self.secondary_collisions += 1;
        self.total_collisions += 1;
    }

    /// Bumps only the total, used by the chaining engine, which does not decompose
    /// collisions into primary/secondary.
    pub fn add_collision(&mut self) {
        self.total_collisions += 1;
    }

    pub fn add_probe(&mut self) {
        self.probes += 1;
    }

    pub fn add_insertion(&mut self) {
        self.insertions += 1;
    }

    pub fn set_table_size(&mut self, n: i64) {
        self.table_size = n;
    }

    pub fn set_mem_bytes(&mut self, bytes: u64) {
        self.mem_bytes = Some(bytes);
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn primary_collisions(&self) -> u64 {
        self.primary_collisions
    }

    pub fn secondary_collisions(&self) -> u64 {
        self.secondary_collisions
    }

    pub fn total_collisions(&self) -> u64 {
        self.total_collisions
    }

    pub fn probes(&self) -> u64 {
        self.probes
    }

    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    pub fn elapsed_ns(&self) -> Option<u128> {
        self.elapsed_ns
    }

    pub fn mem_bytes(&self) -> Option<u64> {
        self.mem_bytes
    }

    /// `insertions / tableSize`, or `-1.0` if `tableSize <= 0`.
    pub fn load_factor(&self) -> f64 {
        if self.table_size <= 0 {
            -1.0
        } else {
            self.insertions as f64 / self.table_size as f64
        }
    }

    pub fn start_timer(&mut self, clock: &dyn Clock) -> Result<(), TimerError> {
        if self.started_at.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.started_at = Some(clock.now());
        Ok(())
    }

    pub fn stop_timer(&mut self, clock: &dyn Clock) -> Result<(), TimerError> {
        match self.started_at.take() {
            Some(start) => {
                self.elapsed_ns = Some(clock.now().duration_since(start).as_nanos());
                Ok(())
            }
            None => Err(TimerError::NotStarted),
        }
    }

    /// Resets every counter and timing field to its initial value. `table_size` is preserved
    /// (it describes the table's shape, not an accumulated observation).
    pub fn reset_all(&mut self) {
        let table_size = self.table_size;
        *self = Metrics::default();
        self.table_size = table_size;
    }
}
