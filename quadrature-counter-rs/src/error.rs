//! Error types for the quadrature counter.

use core::fmt;

use crate::state::Channel;

/// Errors raised while servicing an encoder channel.
///
/// The counter itself cannot fail; only the interrupt line or input pin
/// behind a channel can.
#[derive(Debug)]
pub enum EncoderError<E> {
    /// Arming, masking or waiting on the channel's line failed.
    Line(Channel, E),
}

impl<E> EncoderError<E> {
    /// Channel whose line reported the error.
    pub fn channel(&self) -> Channel {
        match self {
            EncoderError::Line(channel, _) => *channel,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Line(channel, e) => {
                write!(f, "channel {:?} interrupt line error: {:?}", channel, e)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Line(channel, e) => {
                defmt::write!(f, "channel {} interrupt line error: {}", channel, e)
            }
        }
    }
}
