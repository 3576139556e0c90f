//! Mock platform collaborators for host tests

use std::string::String;
use std::vec::Vec;

use jolt_core::traits::{DisplayError, TextDisplay};
use jolt_hal::{
    AccelError, AccelService, PersistentStorage, RawSample, SamplingRate, StorageError, StorageKey,
};

/// Batch of `n` identical readings
pub fn batch(n: usize, x: i16, y: i16, z: i16) -> Vec<RawSample> {
    (0..n).map(|_| RawSample::new(x, y, z)).collect()
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    text: String,
    pub updates: usize,
}

impl MockDisplay {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextDisplay for MockDisplay {
    fn set_text(&mut self, text: &str) -> Result<(), DisplayError> {
        self.text.clear();
        self.text.push_str(text);
        self.updates += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockAccel {
    pub rate: Option<SamplingRate>,
    pub subscribed: Option<u8>,
    pub subscribe_calls: usize,
}

impl AccelService for MockAccel {
    fn set_sampling_rate(&mut self, rate: SamplingRate) -> Result<(), AccelError> {
        self.rate = Some(rate);
        Ok(())
    }

    fn subscribe(&mut self, samples_per_batch: u8) {
        self.subscribed = Some(samples_per_batch);
        self.subscribe_calls += 1;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = None;
    }
}

#[derive(Debug, Default)]
pub struct MockStorage {
    pub value: Option<i32>,
    pub writes: usize,
    pub fail_reads: bool,
    pub fail_writes: Option<StorageError>,
}

impl MockStorage {
    pub fn with_high_score(value: i32) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }
}

impl PersistentStorage for MockStorage {
    fn read_int(&mut self, _key: StorageKey) -> Result<i32, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Storage);
        }
        self.value.ok_or(StorageError::NotFound)
    }

    fn write_int(&mut self, _key: StorageKey, value: i32) -> Result<(), StorageError> {
        if let Some(e) = self.fail_writes {
            return Err(e);
        }
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }

    fn exists(&mut self, _key: StorageKey) -> bool {
        self.value.is_some()
    }

    fn delete(&mut self, _key: StorageKey) -> Result<(), StorageError> {
        self.value.take().map(|_| ()).ok_or(StorageError::NotFound)
    }
}
