//! Error types for the RGB LED driver.

use core::fmt;

/// One of the three LED channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

/// Errors that can occur when driving the LED.
#[derive(Debug)]
pub enum LedError<E> {
    /// The PWM output for the given channel rejected the duty cycle.
    Pwm(ColorChannel, E),
}

impl<E: fmt::Debug> fmt::Display for LedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedError::Pwm(channel, e) => write!(f, "{:?} PWM error: {:?}", channel, e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for LedError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LedError::Pwm(channel, e) => defmt::write!(f, "{} PWM error: {}", channel, e),
        }
    }
}
