//! Application event loop
//!
//! Platform callbacks post [`Input`]s; [`App::tick`] takes one pending
//! input and applies it to the session. Inputs are handled strictly one at
//! a time, in arrival order.

use embassy_sync::channel::TrySendError;

use jolt_core::config::{ConfigError, SessionConfig};
use jolt_core::state::State;
use jolt_core::traits::TextDisplay;
use jolt_hal::{AccelService, ButtonEvent, PersistentStorage, RawSample};

use crate::channels::{Input, InputChannel};
use crate::session::{Outcome, Session};
use crate::wiring::{trigger_for, Trigger};

/// Shake-score application
pub struct App<D, A, S> {
    session: Session<D, A, S>,
    inputs: InputChannel,
    /// Set when a press finished a session, so its release does not
    /// immediately start the next one
    hold_release: bool,
}

impl<D, A, S> App<D, A, S>
where
    D: TextDisplay,
    A: AccelService,
    S: PersistentStorage,
{
    /// Create the app, loading the persisted high score
    pub fn new(
        config: SessionConfig,
        display: D,
        accel: A,
        storage: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            session: Session::new(config, display, accel, storage),
            inputs: InputChannel::new(),
            hold_release: false,
        })
    }

    /// Window loaded: configure sampling and show the welcome screen
    pub fn launch(&mut self) {
        info!("Jolt starting");
        self.session.boot();
    }

    pub fn session(&self) -> &Session<D, A, S> {
        &self.session
    }

    pub fn state(&self) -> State {
        self.session.state()
    }

    /// Queue an input from a platform callback
    ///
    /// Hands the input back if the queue is full.
    pub fn post(&self, input: Input) -> Result<(), Input> {
        self.inputs.try_send(input).map_err(|e| match e {
            TrySendError::Full(input) => input,
        })
    }

    /// Queue a click notification
    pub fn post_button(&self, event: ButtonEvent) -> Result<(), Input> {
        self.post(Input::Button(event))
    }

    /// Queue an accelerometer batch
    pub fn post_samples(&self, samples: &[RawSample]) -> Result<(), Input> {
        self.post(Input::samples(samples))
    }

    /// Number of queued inputs
    pub fn pending(&self) -> usize {
        self.inputs.len()
    }

    /// Handle one queued input
    ///
    /// Returns false if nothing was pending.
    pub fn tick(&mut self) -> bool {
        match self.inputs.try_receive() {
            Ok(input) => {
                self.handle(input);
                true
            }
            Err(_) => false,
        }
    }

    /// Handle every queued input, returning how many were handled
    pub fn run_pending(&mut self) -> usize {
        let mut handled = 0;
        while self.tick() {
            handled += 1;
        }
        handled
    }

    /// Apply one input to the session
    ///
    /// Returns the outcome if the input finished a session.
    pub fn handle(&mut self, input: Input) -> Option<Outcome> {
        match input {
            Input::Button(event) => self.handle_button(event),
            Input::Samples(batch) => self.session.on_samples(&batch),
        }
    }

    fn handle_button(&mut self, event: ButtonEvent) -> Option<Outcome> {
        debug!("Button: {:?}", event);
        match trigger_for(event)? {
            Trigger::Finish => {
                let outcome = self.session.finish();
                // Only a release may clear the hold
                if outcome.is_some() {
                    self.hold_release = true;
                }
                outcome
            }
            Trigger::Start => {
                if core::mem::take(&mut self.hold_release) {
                    debug!("Release after finish, keeping score on screen");
                    return None;
                }
                self.session.start();
                None
            }
        }
    }
}
