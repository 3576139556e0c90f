//! Configuration types
//!
//! Fixed at build time; the app has no settings screen.

pub mod types;

pub use types::*;
