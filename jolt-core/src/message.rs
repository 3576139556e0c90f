//! Status messages shown on the watch face
//!
//! Every message is formatted into a fixed-size buffer sized for the
//! longest text with two five-digit scores.

use core::fmt::Write;

use heapless::String;

/// Capacity of a rendered message in bytes
pub const MESSAGE_CAPACITY: usize = 96;

/// Rendered message text
pub type MessageText = String<MESSAGE_CAPACITY>;

const WELCOME: &str = "Welcome! To get started, press any button.";
const RECORDING: &str = "Recording...\n\nShake, shake, shake!\n\n(press any button to finish)";
const OUT_OF_MEMORY: &str = "Out of memory!\n\nPlease restart the app.";

/// Message to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Message {
    /// Shown once at launch
    Welcome,
    /// Shown while samples are collected
    Recording,
    /// Session beat the stored high score
    NewHighScore { score: u16, previous: u16 },
    /// Session did not beat the stored high score
    GoodTry { score: u16, high_score: u16 },
    /// Fatal allocation failure
    OutOfMemory,
}

impl Message {
    /// Format the message text
    pub fn render(&self) -> MessageText {
        let mut text = MessageText::new();
        // Capacity covers the worst case, so these writes cannot fail
        let _ = match *self {
            Message::Welcome => text.write_str(WELCOME),
            Message::Recording => text.write_str(RECORDING),
            Message::OutOfMemory => text.write_str(OUT_OF_MEMORY),
            Message::NewHighScore { score, previous } => write!(
                text,
                "Congratulations! You have a new high score of {}.\n\nThe old high score was {}.",
                score, previous
            ),
            Message::GoodTry { score, high_score } => write!(
                text,
                "Good try. Your score was {} and the high score is {}.",
                score, high_score
            ),
        };
        text
    }
}
