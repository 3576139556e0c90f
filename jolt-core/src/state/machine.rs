//! State machine definition

use super::events::Event;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Fresh start, nothing recorded yet
    #[default]
    Idle,
    /// A session has finished; its samples must be cleared before the next
    PreRun,
    /// Accelerometer subscribed, samples being collected
    Recording,
    /// Allocation failed with nothing to show; only a restart recovers
    OutOfMemory,
}

impl State {
    /// Check if a start trigger would begin recording
    pub fn is_ready(&self) -> bool {
        matches!(self, State::Idle | State::PreRun)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, State::Recording)
    }

    /// Check if this state ignores every trigger
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::OutOfMemory)
    }

    /// Check if the buffer holds a previous session's samples
    pub fn needs_rearm(&self) -> bool {
        matches!(self, State::PreRun)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        match (self, event) {
            (State::OutOfMemory, _) => State::OutOfMemory,
            (_, Event::OutOfMemory) => State::OutOfMemory,

            (State::Idle | State::PreRun, Event::Start) => State::Recording,
            (State::Recording, Event::Finish) => State::PreRun,

            // Default: stay in current state
            _ => self,
        }
    }
}
