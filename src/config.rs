//! Validated, immutable table configuration, plus the fourteen predefined experiment
//! [`Scheme`]s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which hash function computes the home index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HashMethod {
    /// `h(k) = (|k| mod m) mod N`.
    Division { modulus: i64 },
    /// Knuth's multiplicative method with the fixed Fibonacci constant.
    Fibonacci,
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashMethod::Division { .. } => write!(f, "division"),
            HashMethod::Fibonacci => write!(f, "fibonacci"),
        }
    }
}

/// Collision-resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    Linear,
    Quadratic { c1: f64, c2: f64 },
    Chaining,
}

impl Strategy {
    pub fn is_quadratic(&self) -> bool {
        matches!(self, Strategy::Quadratic { .. })
    }

    pub fn is_chaining(&self) -> bool {
        matches!(self, Strategy::Chaining)
    }

    /// Probe constants to use, with linear probing's ignored `0.5, 0.5` default per the
    /// base spec's dispatch rule.
    pub fn probe_constants(&self) -> (f64, f64) {
        match self {
            Strategy::Quadratic { c1, c2 } => (*c1, *c2),
            Strategy::Linear | Strategy::Chaining => (0.5, 0.5),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Linear => write!(f, "linear"),
            Strategy::Quadratic { .. } => write!(f, "quadratic"),
            Strategy::Chaining => write!(f, "chaining"),
        }
    }
}

/// Immutable, validated table configuration. Built once at construction and never mutated,
/// per the base spec's Data Model invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    table_size: i64,
    bucket_size: usize,
    hash_method: HashMethod,
    strategy: Strategy,
}

impl Configuration {
    /// Validates and builds a `Configuration`. Fails with a [`ConfigError`] rather than
    /// constructing a table that would misbehave.
    pub fn try_new(
        table_size: i64,
        bucket_size: usize,
        hash_method: HashMethod,
        strategy: Strategy,
    ) -> Result<Self, ConfigError> {
        if table_size <= 0 {
            return Err(ConfigError::InvalidTableSize(table_size));
        }
        if bucket_size != 1 && bucket_size != 3 {
            return Err(ConfigError::InvalidBucketSize(bucket_size));
        }
        if let HashMethod::Division { modulus } = hash_method {
            if modulus <= 0 {
                return Err(ConfigError::InvalidModulus(modulus as f64));
            }
        }
        if let Strategy::Quadratic { c1, c2 } = strategy {
            if !c1.is_finite() || c1 < 0.0 {
                return Err(ConfigError::InvalidQuadraticConstant { which: "c1", value: c1 });
            }
            if !c2.is_finite() || c2 < 0.0 {
                return Err(ConfigError::InvalidQuadraticConstant { which: "c2", value: c2 });
            }
        }

        Ok(Configuration {
            table_size,
            bucket_size,
            hash_method,
            strategy,
        })
    }

    pub fn table_size(&self) -> i64 {
        self.table_size
    }

    pub fn bucket_size(&self) -> usize {
        self.bucket_size
    }

    pub fn hash_method(&self) -> HashMethod {
        self.hash_method
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The modulus to report/use, or `None` when the method is Fibonacci (division-only).
    pub fn modulus(&self) -> Option<i64> {
        match self.hash_method {
            HashMethod::Division { modulus } => Some(modulus),
            HashMethod::Fibonacci => None,
        }
    }
}

/// A predefined experiment configuration, identified by an id in `1..=14` (see the base
/// spec's §6.3 table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme(u8);

impl Scheme {
    pub fn id(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Scheme {
    type Error = ConfigError;

    fn try_from(id: u8) -> Result<Self, ConfigError> {
        if (1..=14).contains(&id) {
            Ok(Scheme(id))
        } else {
            Err(ConfigError::UnknownScheme(id))
        }
    }
}

const PREDEFINED_TABLE_SIZE: i64 = 120;

impl From<Scheme> for Configuration {
    fn from(scheme: Scheme) -> Configuration {
        let quadratic = Strategy::Quadratic { c1: 0.5, c2: 0.5 };
        let (hash_method, bucket_size, strategy) = match scheme.id() {
            1 => (HashMethod::Division { modulus: 120 }, 1, Strategy::Linear),
            2 => (HashMethod::Division { modulus: 120 }, 1, quadratic),
            3 => (HashMethod::Division { modulus: 120 }, 1, Strategy::Chaining),
            4 => (HashMethod::Division { modulus: 127 }, 1, Strategy::Linear),
            5 => (HashMethod::Division { modulus: 127 }, 1, quadratic),
            6 => (HashMethod::Division { modulus: 127 }, 1, Strategy::Chaining),
            7 => (HashMethod::Division { modulus: 113 }, 1, Strategy::Linear),
            8 => (HashMethod::Division { modulus: 113 }, 1, quadratic),
            9 => (HashMethod::Division { modulus: 113 }, 1, Strategy::Chaining),
            10 => (HashMethod::Division { modulus: 41 }, 3, Strategy::Linear),
            11 => (HashMethod::Division { modulus: 41 }, 3, quadratic),
            12 => (HashMethod::Fibonacci, 1, Strategy::Linear),
            13 => (HashMethod::Fibonacci, 1, quadratic),
            14 => (HashMethod::Fibonacci, 1, Strategy::Chaining),
            other => unreachable!("Scheme guarantees id in 1..=14, got {other}"),
        };

        Configuration::try_new(PREDEFINED_TABLE_SIZE, bucket_size, hash_method, strategy)
            .expect("predefined schemes are always valid configurations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_bucket_size() {
        let err = Configuration::try_new(120, 2, HashMethod::Fibonacci, Strategy::Linear);
        assert_eq!(err, Err(ConfigError::InvalidBucketSize(2)));
    }

    #[test]
    fn rejects_non_positive_table_size() {
        let err = Configuration::try_new(0, 1, HashMethod::Fibonacci, Strategy::Linear);
        assert_eq!(err, Err(ConfigError::InvalidTableSize(0)));
    }

    #[test]
    fn rejects_non_positive_modulus() {
        let err = Configuration::try_new(
            120,
            1,
            HashMethod::Division { modulus: 0 },
            Strategy::Linear,
        );
        assert_eq!(err, Err(ConfigError::InvalidModulus(0.0)));
    }

    #[test]
    fn rejects_negative_quadratic_constants() {
        let err = Configuration::try_new(
            120,
            1,
            HashMethod::Fibonacci,
            Strategy::Quadratic { c1: -1.0, c2: 0.5 },
        );
        assert!(matches!(err, Err(ConfigError::InvalidQuadraticConstant { which: "c1", .. })));
    }

    #[test]
    fn scheme_out_of_range_is_rejected() {
        assert_eq!(Scheme::try_from(0), Err(ConfigError::UnknownScheme(0)));
        assert_eq!(Scheme::try_from(15), Err(ConfigError::UnknownScheme(15)));
    }

    #[test]
    fn every_predefined_scheme_converts_to_a_valid_configuration() {
        for id in 1..=14u8 {
            let scheme = Scheme::try_from(id).unwrap();
            let config: Configuration = scheme.into();
            assert_eq!(config.table_size(), 120);
        }
    }

    #[test]
    fn scheme_10_matches_bucketed_division_table() {
        let config: Configuration = Scheme::try_from(10).unwrap().into();
        assert_eq!(config.modulus(), Some(41));
        assert_eq!(config.bucket_size(), 3);
        assert_eq!(config.strategy(), Strategy::Linear);
    }

    #[test]
    fn scheme_14_is_chaining_fibonacci() {
        let config: Configuration = Scheme::try_from(14).unwrap().into();
        assert_eq!(config.modulus(), None);
        assert_eq!(config.strategy(), Strategy::Chaining);
        assert_eq!(config.hash_method().to_string(), "fibonacci");
    }
}
