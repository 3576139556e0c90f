//! Button events from the watch

/// Physical buttons on the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Left side button; the platform uses it to leave the app
    Back,
    Up,
    Select,
    Down,
}

/// Raw click notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button went down
    Pressed(ButtonId),
    /// Button came back up
    Released(ButtonId),
}

impl ButtonEvent {
    /// The button this event belongs to
    pub fn button(&self) -> ButtonId {
        match self {
            ButtonEvent::Pressed(id) | ButtonEvent::Released(id) => *id,
        }
    }

    /// Returns true for a press
    pub fn is_press(&self) -> bool {
        matches!(self, ButtonEvent::Pressed(_))
    }

    /// Returns true for a release
    pub fn is_release(&self) -> bool {
        matches!(self, ButtonEvent::Released(_))
    }
}
