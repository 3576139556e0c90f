//! Configuration type definitions

use jolt_hal::{SamplingRate, StorageKey, MAX_SAMPLES_PER_BATCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::{DEFAULT_MAX_CAPACITY, INITIAL_CAPACITY};

/// Samples delivered per accelerometer callback
pub const DEFAULT_SAMPLES_PER_BATCH: u8 = 25;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Batch size is zero or above what the platform delivers
    InvalidBatchSize(u8),
    /// Initial capacity is zero
    ZeroCapacity,
    /// Initial capacity is above the ceiling
    CapacityAboveCeiling,
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Accelerometer sampling rate, set once at boot
    pub sampling_rate: SamplingRate,
    /// Samples per accelerometer batch
    pub samples_per_batch: u8,
    /// Buffer slots allocated on the first batch
    pub initial_capacity: usize,
    /// Hard ceiling on buffer slots
    pub max_capacity: usize,
    /// Where the high score is persisted
    pub high_score_key: StorageKey,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sampling_rate: SamplingRate::Hz100,
            samples_per_batch: DEFAULT_SAMPLES_PER_BATCH,
            initial_capacity: INITIAL_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
            high_score_key: StorageKey::HighScore,
        }
    }
}

impl SessionConfig {
    /// Check the configuration for values the platform cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let batch = self.samples_per_batch;
        if batch == 0 || batch as usize > MAX_SAMPLES_PER_BATCH {
            return Err(ConfigError::InvalidBatchSize(batch));
        }
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.initial_capacity > self.max_capacity {
            return Err(ConfigError::CapacityAboveCeiling);
        }
        Ok(())
    }
}
