// Sequence configuration
// Length and value range of generated inputs

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the sequence length accepted by the generator.
/// Sequences are visualization inputs, not workloads.
pub const MAX_SEQUENCE_LENGTH: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_value must be positive, got {0}")]
    EmptyValueRange(i32),

    #[error("sequence length {length} exceeds the maximum of {max}")]
    LengthTooLarge { length: usize, max: usize },
}

/// Settings for sequence generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Number of elements per generated sequence
    pub length: usize,

    /// Exclusive upper bound for element values; values are drawn from [0, max_value)
    pub max_value: i32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            length: 10,
            max_value: 100,
        }
    }
}

impl SequenceConfig {
    pub fn new(length: usize, max_value: i32) -> Self {
        SequenceConfig { length, max_value }
    }

    /// Reject configurations the generator cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value <= 0 {
            return Err(ConfigError::EmptyValueRange(self.max_value));
        }
        if self.length > MAX_SEQUENCE_LENGTH {
            return Err(ConfigError::LengthTooLarge {
                length: self.length,
                max: MAX_SEQUENCE_LENGTH,
            });
        }
        Ok(())
    }
}
