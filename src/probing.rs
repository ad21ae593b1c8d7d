//! Open-addressing probe engine: linear and quadratic probing over a flat slot array.
//!
//! `storage[i] == None` means the slot is empty; `Some(key)` means occupied. The home index
//! is computed by the caller via [`crate::hash_functions`] and passed in; this module only
//! walks the probe sequence from there.

use crate::metrics::Metrics;

/// Result of [`insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { index: usize },
    TableFull,
}

/// `probeIndex(i)` for attempt `i`, normalized into `0..n` via floored modulo.
///
/// Linear: `(home + i) mod n`. Quadratic: `floor(home + c1*i + c2*i^2) mod n`.
fn probe_index(home: usize, i: usize, n: usize, quadratic: bool, c1: f64, c2: f64) -> usize {
    if !quadratic {
        return (home + i) % n;
    }
    let i_f = i as f64;
    let raw = home as f64 + c1 * i_f + c2 * i_f * i_f;
    let floored = raw.floor() as i64;
    let n_i = n as i64;
    (((floored % n_i) + n_i) % n_i) as usize
}

/// Inserts `key` at `home`, probing up to `n` slots. Every rejected occupied slot bumps
/// `comparisons`, `probes`, and the primary/secondary collision split (attempt 0 is primary,
/// any later attempt is secondary). Returns [`InsertOutcome::TableFull`] after `n` rejected
/// attempts without adding further metrics beyond those `n` comparisons/probes.
pub fn insert(
    storage: &mut [Option<i64>],
    key: i64,
    home: usize,
    quadratic: bool,
    c1: f64,
    c2: f64,
    metrics: &mut Metrics,
) -> InsertOutcome {
    let n = storage.len();
    for i in 0..n {
        metrics.add_comparison();
        let idx = probe_index(home, i, n, quadratic, c1, c2);
        match storage[idx] {
            None => {
                storage[idx] = Some(key);
                metrics.add_insertion();
                return InsertOutcome::Inserted { index: idx };
            }
            Some(_) => {
                if i == 0 {
                    metrics.add_primary_collision();
                } else {
                    metrics.add_secondary_collision();
                }
                metrics.add_probe();
            }
        }
    }
    InsertOutcome::TableFull
}

/// Walks the same probe sequence as [`insert`], counting one comparison per slot inspected.
/// Stops at the first empty slot (the key cannot appear later, since insertion would have
/// stopped there) or at the first matching key. Touches no collision or probe counters.
pub fn search(
    storage: &[Option<i64>],
    key: i64,
    home: usize,
    quadratic: bool,
    c1: f64,
    c2: f64,
    metrics: &mut Metrics,
) -> bool {
    let n = storage.len();
    for i in 0..n {
        metrics.add_comparison();
        let idx = probe_index(home, i, n, quadratic, c1, c2);
        match storage[idx] {
            None => return false,
            Some(k) if k == key => return true,
            Some(_) => continue,
        }
    }
    false
}

/// Identical probe walk to [`search`], but never mutates `metrics`.
pub fn lookup(storage: &[Option<i64>], key: i64, home: usize, quadratic: bool, c1: f64, c2: f64) -> bool {
    let n = storage.len();
    for i in 0..n {
        let idx = probe_index(home, i, n, quadratic, c1, c2);
        match storage[idx] {
            None => return false,
            Some(k) if k == key => return true,
            Some(_) => continue,
        }
    }
    false
}
