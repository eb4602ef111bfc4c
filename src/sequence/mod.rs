// Sequence module
// Random input sequences for sort runs

pub mod config;
pub mod generator;

pub use config::{ConfigError, SequenceConfig, MAX_SEQUENCE_LENGTH};
pub use generator::{Sequence, SequenceGenerator};
