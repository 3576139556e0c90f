//! Jolt - shake-score application
//!
//! Ties the core logic to the platform collaborators:
//!
//! - [`session::Session`] owns the state machine, the sample buffer, and
//!   the high score, and performs every side effect of a transition
//! - [`wiring`] maps raw button events to start/finish triggers
//! - [`app::App`] queues platform callbacks and feeds them to the session
//!   one per tick

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod app;
pub mod channels;
pub mod session;
pub mod wiring;

pub use app::App;
pub use channels::{Batch, Input};
pub use session::{Outcome, Session};
pub use wiring::Trigger;

#[cfg(test)]
mod testing;
