//! Platform abstraction traits owned by the core
//!
//! Accelerometer, storage, and buttons live in `jolt-hal`; the display is
//! defined here because only the core decides what goes on it.

pub mod display;

pub use display::{DisplayError, TextDisplay, TextDisplayExt};
