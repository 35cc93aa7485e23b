//! Inbound text protocol
//!
//! One message is one event:
//!
//! - `flash:<seconds>`, e.g. `flash:4.48975`
//! - `localPlayer:<health>`, e.g. `localPlayer:93`
//!
//! Anything else is ignored. Parsing never fails; unknown or malformed
//! text becomes [`GameEvent::Unrecognized`].

use core::fmt;

use heapless::String;

use crate::channel::{Channel, Receiver, Sender, TrySendError};

const FLASH_PREFIX: &str = "flash:";
const HEALTH_PREFIX: &str = "localPlayer:";

/// Longest message the queue accepts, in bytes.
pub const MESSAGE_CAPACITY: usize = 64;

/// A raw text frame from the transport
pub type InboundMessage = String<MESSAGE_CAPACITY>;

/// Type alias for the message channel
pub type MessageChannel<const SIZE: usize> = Channel<InboundMessage, SIZE>;

/// Type alias for message sender
pub type MessageSender<'a, const SIZE: usize> = Sender<'a, InboundMessage, SIZE>;

/// Type alias for message receiver
pub type MessageReceiver<'a, const SIZE: usize> = Receiver<'a, InboundMessage, SIZE>;

/// Typed game event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Flash for the given number of seconds
    Flash(f32),
    /// New local player health, not yet range checked
    HealthUpdate(i32),
    /// Anything else
    Unrecognized,
}

impl GameEvent {
    /// Parse a single message
    ///
    /// The payload after the prefix must be a complete number; surrounding
    /// ASCII whitespace is allowed.
    pub fn parse(message: &str) -> Self {
        if let Some(payload) = message.strip_prefix(FLASH_PREFIX) {
            return payload
                .trim()
                .parse::<f32>()
                .map_or(Self::Unrecognized, Self::Flash);
        }
        if let Some(payload) = message.strip_prefix(HEALTH_PREFIX) {
            return payload
                .trim()
                .parse::<i32>()
                .map_or(Self::Unrecognized, Self::HealthUpdate);
        }
        Self::Unrecognized
    }
}

/// Error returned by [`Sender::send_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendTextError {
    /// The text does not fit into an [`InboundMessage`]
    TooLong,
    /// The channel is full
    Full,
}

impl fmt::Display for SendTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "message longer than {MESSAGE_CAPACITY} bytes"),
            Self::Full => f.write_str("message channel is full"),
        }
    }
}

impl<T> From<TrySendError<T>> for SendTextError {
    fn from(_: TrySendError<T>) -> Self {
        Self::Full
    }
}

impl<const SIZE: usize> Sender<'_, InboundMessage, SIZE> {
    /// Copy `text` into a message and queue it
    pub fn send_text(&self, text: &str) -> Result<(), SendTextError> {
        let mut message = InboundMessage::new();
        message
            .push_str(text)
            .map_err(|()| SendTextError::TooLong)?;
        self.try_send(message)?;
        Ok(())
    }
}
