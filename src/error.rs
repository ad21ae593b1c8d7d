//! Error taxonomy for the hash table core.
//!
//! Only construction-time misconfiguration and timer misuse are surfaced as `Result::Err`.
//! `TableFull` and `PoolExhausted` are not errors in this module's sense — they are absorbed
//! into [`crate::metrics::Metrics`] and reported through `tracing`, per the core's
//! propagation policy.

use thiserror::Error;

/// Construction-time configuration failures.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("bucket size must be 1 or 3, got {0}")]
    InvalidBucketSize(usize),

    #[error("table size must be positive, got {0}")]
    InvalidTableSize(i64),

    #[error("division modulus must be positive, got {0}")]
    InvalidModulus(f64),

    #[error("quadratic probing constant {which} must be finite and non-negative, got {value}")]
    InvalidQuadraticConstant { which: &'static str, value: f64 },

    #[error("unknown scheme id {0}, expected 1..=14")]
    UnknownScheme(u8),
}

/// Timer precondition violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("stopTimer called before startTimer")]
    NotStarted,

    #[error("startTimer called while a timer is already running")]
    AlreadyRunning,
}
