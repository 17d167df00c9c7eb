//! Command bytes for the serial seven-segment display.
//!
//! Every I2C write to the module is either a command byte followed by its
//! single data byte, or raw characters that are shown at the cursor.

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Clear all digits and return the cursor to the leftmost position.
pub const CMD_CLEAR: u8 = 0x76;

/// Set the decimal/colon/apostrophe mask. One data byte.
pub const CMD_DECIMALS: u8 = 0x77;

/// Set display brightness, 0 (dimmest) to 255 (brightest). One data byte.
pub const CMD_BRIGHTNESS: u8 = 0x7A;

/// Set the UART baud rate code. One data byte.
pub const CMD_BAUD_RATE: u8 = 0x7F;

// ---------------------------------------------------------------------------
// Module constants
// ---------------------------------------------------------------------------

/// Factory default 7-bit I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x71;

/// Number of character positions.
pub const DIGIT_COUNT: usize = 4;

/// Brightness the driver assumes the module starts at.
pub const INITIAL_BRIGHTNESS: u8 = 254;

/// Byte used to pad short strings.
pub const BLANK: u8 = b' ';
