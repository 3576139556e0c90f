//! Jolt Hardware Abstraction Layer
//!
//! This crate defines the collaborators the watch platform provides to the
//! application. The platform glue implements them; application code only
//! sees the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (jolt-app)                 │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  jolt-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Platform glue (accel, persist, clicks) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`accel::AccelService`] - Accelerometer batch subscription
//! - [`storage::PersistentStorage`] - Persistent integer storage
//!
//! Button notifications are plain values ([`button::ButtonEvent`]) pushed
//! into the application by the platform.

#![no_std]
#![deny(unsafe_code)]

pub mod accel;
pub mod button;
pub mod storage;

// Re-export key types at crate root for convenience
pub use accel::{AccelError, AccelService, RawSample, SamplingRate, MAX_SAMPLES_PER_BATCH};
pub use button::{ButtonEvent, ButtonId};
pub use storage::{PersistentStorage, StorageError, StorageKey};
