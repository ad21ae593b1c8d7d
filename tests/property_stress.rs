//! Randomized stress tests checking invariants that should hold regardless of the exact
//! sequence of keys inserted: bounded insertions, non-negative load factor, and search/lookup
//! agreement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hashlab::config::{Configuration, HashMethod, Strategy};
use hashlab::table::HashTable;

fn random_keys(rng: &mut StdRng, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.gen_range(-10_000..10_000)).collect()
}

#[test]
fn open_addressing_never_inserts_more_than_table_size() {
    let mut rng = StdRng::seed_from_u64(1);
    for table_size in [7, 31, 120] {
        let config = Configuration::try_new(
            table_size,
            1,
            HashMethod::Division { modulus: table_size },
            Strategy::Linear,
        )
        .unwrap();
        let mut table = HashTable::new(config);

        for key in random_keys(&mut rng, table_size as usize * 3) {
            table.insert(key);
        }

        assert!(table.metrics().insertions() <= table_size as u64);
    }
}

#[test]
fn chaining_never_exceeds_pool_capacity() {
    let mut rng = StdRng::seed_from_u64(2);
    let table_size = 50;
    let config =
        Configuration::try_new(table_size, 1, HashMethod::Fibonacci, Strategy::Chaining).unwrap();
    let mut table = HashTable::new(config);

    for key in random_keys(&mut rng, table_size as usize * 5) {
        table.insert(key);
    }

    assert!(table.metrics().insertions() <= 2 * table_size as u64);
}

#[test]
fn every_inserted_key_is_found_until_the_table_fills_up() {
    let mut rng = StdRng::seed_from_u64(3);
    let table_size = 97;
    let config = Configuration::try_new(
        table_size,
        1,
        HashMethod::Division { modulus: table_size },
        Strategy::Quadratic { c1: 0.5, c2: 0.5 },
    )
    .unwrap();
    let mut table = HashTable::new(config);

    let keys = random_keys(&mut rng, 40);
    let mut inserted_before = table.metrics().insertions();
    for &key in &keys {
        table.insert(key);
        let inserted_after = table.metrics().insertions();
        if inserted_after > inserted_before {
            assert!(table.lookup(key));
        }
        inserted_before = inserted_after;
    }
}

#[test]
fn search_and_lookup_always_agree() {
    let mut rng = StdRng::seed_from_u64(4);
    let config = Configuration::try_new(40, 1, HashMethod::Division { modulus: 40 }, Strategy::Chaining).unwrap();
    let mut table = HashTable::new(config);

    for key in random_keys(&mut rng, 100) {
        table.insert(key);
    }

    for key in random_keys(&mut rng, 100) {
        assert_eq!(table.search(key), table.lookup(key));
    }
}

#[test]
fn load_factor_never_exceeds_one_for_open_addressing() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = Configuration::try_new(60, 1, HashMethod::Division { modulus: 60 }, Strategy::Linear).unwrap();
    let mut table = HashTable::new(config);

    for key in random_keys(&mut rng, 300) {
        table.insert(key);
    }

    assert!(table.metrics().load_factor() <= 1.0);
}
