// Sequence generator
// Produces fresh random input sequences of a fixed size

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{ConfigError, SequenceConfig};

/// An ordered list of integers to be sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<i32>);

impl Sequence {
    pub fn new(values: Vec<i32>) -> Self {
        Sequence(values)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Sequence(values)
    }
}

impl AsRef<[i32]> for Sequence {
    fn as_ref(&self) -> &[i32] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Random sequence source
///
/// Each call to [`SequenceGenerator::generate`] returns an independent sequence;
/// previously returned sequences are never touched.
pub struct SequenceGenerator {
    config: SequenceConfig,
    rng: StdRng,
}

impl SequenceGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new(config: SequenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SequenceGenerator {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a generator with a fixed seed (reproducible runs)
    pub fn seeded(config: SequenceConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(SequenceGenerator {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    /// Draw a new sequence with values in [0, max_value)
    pub fn generate(&mut self) -> Sequence {
        let max_value = self.config.max_value;
        let values = (0..self.config.length)
            .map(|_| self.rng.gen_range(0..max_value))
            .collect();
        Sequence(values)
    }
}
