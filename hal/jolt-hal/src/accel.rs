//! Accelerometer abstractions
//!
//! The platform samples the accelerometer at a configured rate and hands
//! the application fixed-size batches of readings while a subscription is
//! active.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest batch the platform delivers per callback
pub const MAX_SAMPLES_PER_BATCH: usize = 25;

/// One 3-axis accelerometer reading
///
/// Each axis is in milli-g, so a device at rest reads roughly 1000 on the
/// axis pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    /// Create a reading from its three axes
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Accelerometer sampling rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SamplingRate {
    Hz10,
    Hz25,
    Hz50,
    #[default]
    Hz100,
}

impl SamplingRate {
    /// Samples per second
    pub const fn hz(self) -> u16 {
        match self {
            SamplingRate::Hz10 => 10,
            SamplingRate::Hz25 => 25,
            SamplingRate::Hz50 => 50,
            SamplingRate::Hz100 => 100,
        }
    }
}

/// Errors from the accelerometer service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelError {
    /// Requested rate is not supported by this device
    UnsupportedRate,
    /// Service is not available right now
    Unavailable,
}

/// Accelerometer data service
///
/// While subscribed, the platform delivers one batch of
/// `samples_per_batch` readings per callback to the application. Delivery
/// happens on the same logical thread as button events, never concurrently.
pub trait AccelService {
    /// Configure the sampling rate
    fn set_sampling_rate(&mut self, rate: SamplingRate) -> Result<(), AccelError>;

    /// Start delivering batches of `samples_per_batch` readings
    ///
    /// `samples_per_batch` is at most [`MAX_SAMPLES_PER_BATCH`].
    fn subscribe(&mut self, samples_per_batch: u8);

    /// Stop delivering batches
    ///
    /// Calling this while not subscribed is harmless.
    fn unsubscribe(&mut self);
}
