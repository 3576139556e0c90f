//! Growable sample buffer
//!
//! Holds the magnitudes recorded during one session. Storage is allocated
//! lazily on the first batch, grows by allocate-copy-swap, and is kept
//! across sessions: starting a new session only rewinds the write index.

use alloc::vec::Vec;

use jolt_hal::RawSample;

use crate::math::magnitude;

/// Slots allocated for the first batch of a fresh buffer
pub const INITIAL_CAPACITY: usize = 100;

/// Default slot ceiling (16 KiB of u16 magnitudes)
pub const DEFAULT_MAX_CAPACITY: usize = 8192;

/// Errors from buffer allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// The allocator refused `requested` slots, or they exceed the ceiling
    OutOfMemory { requested: usize },
}

/// Session sample buffer
///
/// `slots.len()` is the allocated capacity; only the first `len` slots
/// hold samples from the current session.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    slots: Vec<u16>,
    len: usize,
    initial_capacity: usize,
    max_capacity: usize,
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new(INITIAL_CAPACITY, DEFAULT_MAX_CAPACITY)
    }
}

impl SampleBuffer {
    /// Create an unallocated buffer
    ///
    /// - `initial_capacity`: slots allocated on first use
    /// - `max_capacity`: hard ceiling no allocation may exceed
    pub const fn new(initial_capacity: usize, max_capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            initial_capacity,
            max_capacity,
        }
    }

    /// Check if storage has been allocated
    pub fn is_allocated(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Allocated slot count
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot ceiling
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Number of samples recorded this session
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Samples recorded this session
    pub fn as_slice(&self) -> &[u16] {
        &self.slots[..self.len]
    }

    /// Largest magnitude recorded this session, if any
    pub fn max(&self) -> Option<u16> {
        self.as_slice().iter().copied().max()
    }

    /// Forget this session's samples, keeping the storage
    pub fn rearm(&mut self) {
        self.len = 0;
    }

    /// Allocate the initial storage if not done yet
    pub fn allocate(&mut self) -> Result<(), BufferError> {
        if self.is_allocated() {
            return Ok(());
        }
        self.slots = self.try_alloc(self.initial_capacity.max(1))?;
        Ok(())
    }

    /// Make room for `additional` more samples
    ///
    /// Grows to `(capacity + additional) * 2`, clamped to the ceiling. The
    /// new storage is fully populated before it replaces the old one, so on
    /// failure the buffer is left exactly as it was.
    pub fn reserve(&mut self, additional: usize) -> Result<(), BufferError> {
        let needed = self.len.saturating_add(additional);
        if needed <= self.capacity() {
            return Ok(());
        }

        let target = self
            .capacity()
            .saturating_add(additional)
            .saturating_mul(2)
            .min(self.max_capacity);
        if target < needed {
            return Err(BufferError::OutOfMemory { requested: needed });
        }

        let mut grown = self.try_alloc(target)?;
        grown[..self.len].copy_from_slice(&self.slots[..self.len]);
        self.slots = grown;
        Ok(())
    }

    /// Append the magnitudes of a batch of readings
    ///
    /// Either the whole batch is appended or none of it is.
    pub fn extend_from_batch(&mut self, batch: &[RawSample]) -> Result<(), BufferError> {
        self.allocate()?;
        self.reserve(batch.len())?;

        let end = self.len + batch.len();
        for (slot, sample) in self.slots[self.len..end].iter_mut().zip(batch) {
            *slot = magnitude(sample);
        }
        self.len = end;
        Ok(())
    }

    fn try_alloc(&self, slots: usize) -> Result<Vec<u16>, BufferError> {
        let oom = BufferError::OutOfMemory { requested: slots };
        if slots > self.max_capacity {
            return Err(oom);
        }
        let mut storage = Vec::new();
        storage.try_reserve_exact(slots).map_err(|_| oom)?;
        storage.resize(slots, 0);
        Ok(storage)
    }
}
