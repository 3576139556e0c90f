//! Button wiring
//!
//! Up, Select, and Down all behave the same: pressing finishes a
//! recording, releasing starts one. Back is left to the platform, which
//! uses it to leave the app.

use jolt_hal::{ButtonEvent, ButtonId};

/// Session trigger derived from a button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    Start,
    Finish,
}

/// Check if the app listens to this button
pub fn is_wired(button: ButtonId) -> bool {
    matches!(button, ButtonId::Up | ButtonId::Select | ButtonId::Down)
}

/// Map a button event to a trigger
pub fn trigger_for(event: ButtonEvent) -> Option<Trigger> {
    if !is_wired(event.button()) {
        return None;
    }
    match event {
        ButtonEvent::Pressed(_) => Some(Trigger::Finish),
        ButtonEvent::Released(_) => Some(Trigger::Start),
    }
}
