//! Platform-to-app event queue
//!
//! Platform callbacks only enqueue; the app drains the queue on its own
//! logical thread. Everything runs on one thread, so the channel uses a
//! no-op mutex.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;
use heapless::Vec;

use jolt_hal::{ButtonEvent, RawSample, MAX_SAMPLES_PER_BATCH};

/// Channel capacity for platform inputs
pub const INPUT_CHANNEL_SIZE: usize = 8;

/// One accelerometer batch
pub type Batch = Vec<RawSample, MAX_SAMPLES_PER_BATCH>;

/// Input delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// Raw click notification
    Button(ButtonEvent),
    /// Accelerometer batch
    Samples(Batch),
}

impl Input {
    /// Build a sample input, keeping at most one full batch
    pub fn samples(samples: &[RawSample]) -> Self {
        let n = samples.len().min(MAX_SAMPLES_PER_BATCH);
        if n < samples.len() {
            warn!("Dropping {} samples past one batch", samples.len() - n);
        }
        let mut batch = Batch::new();
        // `n` never exceeds the batch capacity
        let _ = batch.extend_from_slice(&samples[..n]);
        Input::Samples(batch)
    }
}

impl From<ButtonEvent> for Input {
    fn from(event: ButtonEvent) -> Self {
        Input::Button(event)
    }
}

/// Queue of pending platform inputs
pub type InputChannel = Channel<NoopRawMutex, Input, INPUT_CHANNEL_SIZE>;
