//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// User asked to begin recording
    Start,
    /// User asked to stop recording, or growth failed with data on hand
    Finish,
    /// Allocation failed before any sample was recorded
    OutOfMemory,
}

impl Event {
    /// Check if this event indicates an error
    pub fn is_error_event(&self) -> bool {
        matches!(self, Event::OutOfMemory)
    }
}
