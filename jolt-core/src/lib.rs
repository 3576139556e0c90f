//! Board-agnostic core logic for the shake-score app
//!
//! This crate contains all application logic that does not depend on
//! the watch platform:
//!
//! - Integer square root and sample magnitude
//! - Growable sample buffer with fallible growth
//! - State machine for recording sessions
//! - Status message formatting
//! - Display trait and session configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod buffer;
pub mod config;
pub mod math;
pub mod message;
pub mod state;
pub mod traits;
