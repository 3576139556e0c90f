//! State machine for recording sessions
//!
//! Decides what a trigger means in the current state. Side effects
//! (subscribing, scoring, display) belong to the caller.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
