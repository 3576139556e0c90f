//! Display trait for the watch face

use crate::message::{Message, MessageText};

/// Errors that can occur when updating the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Text does not fit the display's buffer
    BufferOverflow,
    /// Display layer not created yet or already torn down
    Unavailable,
}

/// Single text area covering the window
///
/// Each call replaces whatever was shown before. Implementations copy the
/// text; the borrow ends when the call returns.
pub trait TextDisplay {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper for showing status messages
pub trait TextDisplayExt: TextDisplay {
    /// Render and show a message, returning the rendered text
    fn show(&mut self, message: Message) -> Result<MessageText, DisplayError> {
        let text = message.render();
        self.set_text(&text)?;
        Ok(text)
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> TextDisplayExt for T {}
