//! Hash Functions
//!
//! Division method and multiplicative (Fibonacci) hashing, each returning a final index
//! already reduced modulo the table size.

/// The 64-bit unsigned approximation of `floor(2^64 / phi)`, fixed per Knuth's
/// multiplicative method so every implementation agrees bit for bit.
pub const FIBONACCI_CONSTANT: u64 = 0x9E3779B97F4A7C15;

/// Division method hash function.
///
/// Corresponds to CLRS Section 11.3.1's `h(k) = k mod m`, extended with a second reduction by
/// the table size `n` (the modulus `m` and the table size `n` may differ — e.g. `m = 113`,
/// `n = 120` — so probing must still address the full table).
///
/// `k` is widened to its absolute value in `u64` before reduction so that `i64::MIN` is
/// handled without overflow.
///
/// # Panics
/// Panics if `m <= 0` or `n <= 0`; callers are expected to have validated these through
/// [`crate::config::Configuration`].
pub fn division_hash(k: i64, m: i64, n: i64) -> usize {
    assert!(m > 0, "division modulus must be positive");
    assert!(n > 0, "table size must be positive");
    let h = k.unsigned_abs() % (m as u64);
    (h % (n as u64)) as usize
}

/// Multiplicative (Fibonacci) hash function.
///
/// Corresponds to Knuth's multiplicative method: multiply the key by a fixed-point
/// approximation of `2^64 / phi` using wrapping 64-bit multiplication, then reduce modulo the
/// table size. The constant is a fixed literal ([`FIBONACCI_CONSTANT`]) rather than a
/// recomputed floating-point golden ratio so that every conforming implementation produces
/// the same index for the same key.
///
/// # Panics
/// Panics if `n <= 0`.
pub fn fibonacci_hash(k: i64, n: i64) -> usize {
    assert!(n > 0, "table size must be positive");
    let hv = k.unsigned_abs().wrapping_mul(FIBONACCI_CONSTANT);
    (hv % (n as u64)) as usize
}
