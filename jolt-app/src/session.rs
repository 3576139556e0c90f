//! Recording session controller
//!
//! The session is the only owner of the sample buffer and the high score.
//! It:
//! - Applies start/finish triggers through the state machine
//! - Subscribes and unsubscribes the accelerometer
//! - Appends sample batches, degrading to an early finish when growth fails
//! - Scores finished sessions and persists new high scores
//! - Keeps the display in sync with the current state

use jolt_core::buffer::{BufferError, SampleBuffer};
use jolt_core::config::SessionConfig;
use jolt_core::message::Message;
use jolt_core::state::{Event, State};
use jolt_core::traits::{TextDisplay, TextDisplayExt};
use jolt_hal::{AccelService, PersistentStorage, RawSample, StorageKey};

use crate::wiring::Trigger;

/// Result of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Peak beat the high score, which is now `score`
    NewHighScore { score: u16, previous: u16 },
    /// Peak did not beat the high score
    GoodTry { score: u16, high_score: u16 },
}

impl Outcome {
    /// Peak magnitude of the session
    pub fn score(&self) -> u16 {
        match *self {
            Outcome::NewHighScore { score, .. } | Outcome::GoodTry { score, .. } => score,
        }
    }

    pub fn is_new_high_score(&self) -> bool {
        matches!(self, Outcome::NewHighScore { .. })
    }
}

impl From<Outcome> for Message {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::NewHighScore { score, previous } => Message::NewHighScore { score, previous },
            Outcome::GoodTry { score, high_score } => Message::GoodTry { score, high_score },
        }
    }
}

/// Shake-score session
pub struct Session<D, A, S> {
    config: SessionConfig,
    state: State,
    high_score: u16,
    buffer: SampleBuffer,
    last_outcome: Option<Outcome>,
    display: D,
    accel: A,
    storage: S,
}

impl<D, A, S> Session<D, A, S>
where
    D: TextDisplay,
    A: AccelService,
    S: PersistentStorage,
{
    /// Create a session and load the persisted high score
    pub fn new(config: SessionConfig, display: D, accel: A, mut storage: S) -> Self {
        let high_score = load_high_score(&mut storage, config.high_score_key);
        info!("High score loaded: {}", high_score);

        Self {
            buffer: SampleBuffer::new(config.initial_capacity, config.max_capacity),
            config,
            state: State::Idle,
            high_score,
            last_outcome: None,
            display,
            accel,
            storage,
        }
    }

    /// Configure the accelerometer and show the welcome screen
    pub fn boot(&mut self) {
        if let Err(e) = self.accel.set_sampling_rate(self.config.sampling_rate) {
            warn!("Failed to set sampling rate: {:?}", e);
        }
        self.show(Message::Welcome);
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Best score across all sessions
    pub fn high_score(&self) -> u16 {
        self.high_score
    }

    /// Result of the most recent finished session
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn accel(&self) -> &A {
        &self.accel
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply a user trigger
    ///
    /// Returns the outcome if the trigger finished a session.
    pub fn trigger(&mut self, trigger: Trigger) -> Option<Outcome> {
        match trigger {
            Trigger::Start => {
                self.start();
                None
            }
            Trigger::Finish => self.finish(),
        }
    }

    /// Begin recording
    ///
    /// Returns false if the session was not ready to start.
    pub fn start(&mut self) -> bool {
        if !self.state.is_ready() {
            debug!("Start ignored in {:?}", self.state);
            return false;
        }

        if self.state.needs_rearm() {
            self.buffer.rearm();
        }
        self.transition(Event::Start);
        self.accel.subscribe(self.config.samples_per_batch);
        self.show(Message::Recording);
        true
    }

    /// Stop recording and score the session
    ///
    /// Returns `None` if no session was recording.
    pub fn finish(&mut self) -> Option<Outcome> {
        if !self.state.is_recording() {
            debug!("Finish ignored in {:?}", self.state);
            return None;
        }

        self.transition(Event::Finish);
        self.accel.unsubscribe();

        // An early finish can happen before any sample arrived
        let score = self.buffer.max().unwrap_or(0);
        let outcome = if score > self.high_score {
            let previous = self.high_score;
            self.high_score = score;
            self.persist_high_score();
            Outcome::NewHighScore { score, previous }
        } else {
            Outcome::GoodTry {
                score,
                high_score: self.high_score,
            }
        };

        info!(
            "Session finished: {} samples, score {}",
            self.buffer.len(),
            score
        );
        self.last_outcome = Some(outcome);
        self.show(outcome.into());
        Some(outcome)
    }

    /// Handle one accelerometer batch
    ///
    /// Returns the outcome if a failed growth ended the session early.
    pub fn on_samples(&mut self, batch: &[RawSample]) -> Option<Outcome> {
        if !self.state.is_recording() {
            debug!("Dropping {} samples in {:?}", batch.len(), self.state);
            return None;
        }

        match self.buffer.extend_from_batch(batch) {
            Ok(()) => None,
            Err(e) if self.buffer.is_empty() => {
                self.out_of_memory(e);
                None
            }
            Err(e) => {
                warn!(
                    "Buffer growth failed ({:?}), finishing with {} samples",
                    e,
                    self.buffer.len()
                );
                self.finish()
            }
        }
    }

    fn out_of_memory(&mut self, error: BufferError) {
        warn!("Out of memory with no samples: {:?}", error);
        self.transition(Event::OutOfMemory);
        self.accel.unsubscribe();
        self.show(Message::OutOfMemory);
    }

    fn persist_high_score(&mut self) {
        let key = self.config.high_score_key;
        if let Err(e) = self.storage.write_int(key, i32::from(self.high_score)) {
            warn!("Failed to persist high score: {:?}", e);
        }
    }

    fn transition(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next != self.state {
            if event.is_error_event() {
                warn!("State: {:?} -> {:?} on {:?}", self.state, next, event);
            } else {
                info!("State: {:?} -> {:?} on {:?}", self.state, next, event);
            }
        }
        self.state = next;
    }

    fn show(&mut self, message: Message) {
        if let Err(e) = self.display.show(message) {
            warn!("Display update failed: {:?}", e);
        }
    }
}

/// Read the stored high score, falling back to zero
fn load_high_score<S: PersistentStorage>(storage: &mut S, key: StorageKey) -> u16 {
    match storage.read_int_or_zero(key) {
        Ok(value) => value.clamp(0, i32::from(u16::MAX)) as u16,
        Err(e) => {
            warn!("Failed to read high score: {:?}", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{batch, MockAccel, MockDisplay, MockStorage};
    use jolt_hal::{SamplingRate, StorageError};

    type TestSession = Session<MockDisplay, MockAccel, MockStorage>;

    fn session_with(config: SessionConfig, storage: MockStorage) -> TestSession {
        let mut session = Session::new(config, MockDisplay::default(), MockAccel::default(), storage);
        session.boot();
        session
    }

    fn session() -> TestSession {
        session_with(SessionConfig::default(), MockStorage::default())
    }

    #[test]
    fn test_boot() {
        let session = session();
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.high_score(), 0);
        assert_eq!(session.accel().rate, Some(SamplingRate::Hz100));
        assert_eq!(
            session.display().text(),
            "Welcome! To get started, press any button."
        );
    }

    #[test]
    fn test_high_score_loaded_from_storage() {
        let session = session_with(SessionConfig::default(), MockStorage::with_high_score(1040));
        assert_eq!(session.high_score(), 1040);
    }

    #[test]
    fn test_high_score_out_of_range_is_clamped() {
        let session = session_with(SessionConfig::default(), MockStorage::with_high_score(-5));
        assert_eq!(session.high_score(), 0);

        let session = session_with(SessionConfig::default(), MockStorage::with_high_score(100_000));
        assert_eq!(session.high_score(), u16::MAX);
    }

    #[test]
    fn test_unreadable_storage_defaults_to_zero() {
        let storage = MockStorage {
            fail_reads: true,
            ..MockStorage::with_high_score(1040)
        };
        let session = session_with(SessionConfig::default(), storage);
        assert_eq!(session.high_score(), 0);
    }

    #[test]
    fn test_start_subscribes_and_shows_recording() {
        let mut session = session();
        assert!(session.start());
        assert_eq!(session.state(), State::Recording);
        assert_eq!(session.accel().subscribed, Some(25));
        assert!(session.display().text().starts_with("Recording..."));
    }

    #[test]
    fn test_start_while_recording_is_noop() {
        let mut session = session();
        session.start();
        session.on_samples(&batch(25, 0, 0, 300));
        assert!(!session.start());
        assert_eq!(session.accel().subscribe_calls, 1);
        assert_eq!(session.buffer().len(), 25);
    }

    #[test]
    fn test_new_high_score() {
        let mut session = session();
        session.start();
        session.on_samples(&batch(25, 0, 0, 1040));

        let outcome = session.finish();
        assert_eq!(
            outcome,
            Some(Outcome::NewHighScore {
                score: 1040,
                previous: 0
            })
        );
        assert_eq!(session.state(), State::PreRun);
        assert_eq!(session.high_score(), 1040);
        assert_eq!(session.storage().value, Some(1040));
        assert_eq!(session.accel().subscribed, None);
        assert!(session
            .display()
            .text()
            .starts_with("Congratulations! You have a new high score of 1040."));
    }

    #[test]
    fn test_good_try() {
        let mut session = session_with(SessionConfig::default(), MockStorage::with_high_score(1040));
        session.start();
        session.on_samples(&batch(25, 300, 400, 0));

        let outcome = session.finish();
        assert_eq!(
            outcome,
            Some(Outcome::GoodTry {
                score: 500,
                high_score: 1040
            })
        );
        assert_eq!(session.high_score(), 1040);
        assert_eq!(session.storage().writes, 0);
        assert_eq!(
            session.display().text(),
            "Good try. Your score was 500 and the high score is 1040."
        );
    }

    #[test]
    fn test_finish_when_not_recording_is_noop() {
        let mut session = session_with(SessionConfig::default(), MockStorage::with_high_score(700));
        assert_eq!(session.finish(), None);
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.high_score(), 700);
        assert_eq!(session.storage().writes, 0);
        assert!(!session.buffer().is_allocated());
    }

    #[test]
    fn test_finish_after_scored_session_is_noop() {
        let mut session = session();
        session.start();
        session.on_samples(&batch(25, 0, 0, 1040));
        session.finish();

        let samples = session.buffer().as_slice().to_vec();
        let writes = session.storage().writes;
        let updates = session.display().updates;

        assert_eq!(session.finish(), None);
        assert_eq!(session.state(), State::PreRun);
        assert_eq!(session.buffer().as_slice(), samples.as_slice());
        assert_eq!(session.high_score(), 1040);
        assert_eq!(session.storage().writes, writes);
        assert_eq!(session.display().updates, updates);
    }

    #[test]
    fn test_finish_without_samples() {
        let mut session = session();
        session.start();
        let outcome = session.finish();
        assert_eq!(
            outcome,
            Some(Outcome::GoodTry {
                score: 0,
                high_score: 0
            })
        );
        assert_eq!(session.storage().writes, 0);
    }

    #[test]
    fn test_second_session_clears_previous_samples() {
        let mut session = session();
        session.start();
        session.on_samples(&batch(25, 0, 0, 1040));
        session.finish();

        session.start();
        assert!(session.buffer().is_empty());
        session.on_samples(&batch(25, 0, 0, 500));
        assert_eq!(session.finish().map(|o| o.score()), Some(500));
        assert_eq!(session.high_score(), 1040);
    }

    #[test]
    fn test_samples_outside_recording_are_dropped() {
        let mut session = session();
        assert_eq!(session.on_samples(&batch(25, 0, 0, 2000)), None);
        assert!(!session.buffer().is_allocated());

        session.start();
        session.finish();
        session.on_samples(&batch(25, 0, 0, 2000));
        assert_eq!(session.buffer().len(), 0);
    }

    #[test]
    fn test_out_of_memory_without_samples() {
        // 10 slots, first batch needs 25, ceiling allows 20
        let config = SessionConfig {
            initial_capacity: 10,
            max_capacity: 20,
            ..Default::default()
        };
        let mut session = session_with(config, MockStorage::default());
        session.start();
        assert_eq!(session.on_samples(&batch(25, 0, 0, 1040)), None);

        assert_eq!(session.state(), State::OutOfMemory);
        assert_eq!(session.accel().subscribed, None);
        assert!(session.display().text().starts_with("Out of memory!"));

        assert!(!session.start());
        assert_eq!(session.finish(), None);
        assert_eq!(session.state(), State::OutOfMemory);
        assert_eq!(session.accel().subscribe_calls, 1);
        assert!(session.display().text().starts_with("Out of memory!"));
    }

    #[test]
    fn test_initial_allocation_failure() {
        let config = SessionConfig {
            initial_capacity: 100,
            max_capacity: 10,
            ..Default::default()
        };
        let mut session = session_with(config, MockStorage::default());
        session.start();
        session.on_samples(&batch(25, 0, 0, 1040));
        assert_eq!(session.state(), State::OutOfMemory);
        assert!(!session.buffer().is_allocated());
    }

    #[test]
    fn test_growth_failure_finishes_early() {
        let config = SessionConfig {
            samples_per_batch: 15,
            initial_capacity: 30,
            max_capacity: 40,
            ..Default::default()
        };
        let mut session = session_with(config, MockStorage::default());
        session.start();
        assert_eq!(session.on_samples(&batch(15, 0, 0, 600)), None);
        assert_eq!(session.on_samples(&batch(15, 0, 0, 800)), None);

        let outcome = session.on_samples(&batch(15, 0, 0, 5000));
        assert_eq!(
            outcome,
            Some(Outcome::NewHighScore {
                score: 800,
                previous: 0
            })
        );
        assert_eq!(session.state(), State::PreRun);
        assert_eq!(session.buffer().len(), 30);
        assert_eq!(session.buffer().max(), Some(800));
        assert_eq!(session.last_outcome(), outcome);

        // The retained buffer is reused for the next session
        assert!(session.start());
        session.on_samples(&batch(15, 0, 0, 100));
        assert_eq!(session.buffer().as_slice(), &[100u16; 15][..]);
    }

    #[test]
    fn test_persist_failure_keeps_high_score_in_memory() {
        let storage = MockStorage {
            fail_writes: Some(StorageError::Full),
            ..Default::default()
        };
        let mut session = session_with(SessionConfig::default(), storage);
        session.start();
        session.on_samples(&batch(25, 0, 0, 900));
        assert!(session.finish().unwrap().is_new_high_score());
        assert_eq!(session.high_score(), 900);
        assert_eq!(session.storage().value, None);
    }

    #[test]
    fn test_trigger_dispatch() {
        let mut session = session();
        assert_eq!(session.trigger(Trigger::Start), None);
        assert!(session.state().is_recording());
        session.on_samples(&batch(25, 0, 0, 42));
        assert_eq!(session.trigger(Trigger::Finish).map(|o| o.score()), Some(42));
    }
}
