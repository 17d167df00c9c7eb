//! Async driver for a four-digit serial seven-segment display over I2C.
//!
//! This crate provides [`SegmentDisplay`], which speaks the module's
//! single-byte command set: clear, brightness, decimal/colon mask, baud rate
//! and raw characters. Brightness and decimal mask are cached so repeating a
//! setting generates no bus traffic.
//!
//! # Quick Start
//!
//! ```ignore
//! use serial_7seg::{Decimals, SegmentDisplay, DEFAULT_ADDRESS};
//!
//! let mut display = SegmentDisplay::new(i2c, DEFAULT_ADDRESS);
//! display.clear_display().await?;
//! display.set_decimals(Decimals::COLON).await?;
//!
//! loop {
//!     display.send_number(counter.count()).await?;
//!     Timer::after_millis(50).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`](https://docs.rs/defmt).

#![cfg_attr(not(test), no_std)]

pub mod driver;
pub mod error;
pub mod frame;
pub mod registers;
pub mod settings;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use driver::SegmentDisplay;
pub use error::DisplayError;
pub use frame::{number_frame, text_frame, Frame};
pub use registers::DEFAULT_ADDRESS;
pub use settings::{BaudRate, Decimals};
