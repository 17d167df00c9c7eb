//! Error types for the seven-segment display driver.

use core::fmt;

/// Errors that can occur while talking to the display.
///
/// Generic over the I2C bus error type `E`.
#[derive(Debug)]
pub enum DisplayError<E> {
    /// I2C bus error (NAK, arbitration loss, etc.).
    I2c(E),
}

impl<E> From<E> for DisplayError<E> {
    fn from(e: E) -> Self {
        DisplayError::I2c(e)
    }
}

impl<E: fmt::Debug> fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayError::I2c(e) => write!(f, "I2C error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DisplayError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DisplayError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
        }
    }
}
