//! PWM driver for a three-channel RGB LED.
//!
//! [`RgbLed`] owns three [`embedded_hal::pwm::SetDutyCycle`] outputs and maps
//! colors onto them:
//!
//! - components are clamped to `0..=255`,
//! - duties are inverted for [`Polarity::CommonAnode`] wiring,
//! - a channel is only written when its duty actually changes.
//!
//! [`RgbLed::cycle_color`] walks the hue wheel with a fixed cosine/sine
//! rotation of pure red (see [`hue_to_rgb`]), which is handy for mapping an
//! encoder position or a timer onto a color.
//!
//! # Crate Features
//!
//! - **`defmt`** — [`defmt::Format`] on public types and `trace`-level
//!   logging of every duty write.

#![cfg_attr(not(test), no_std)]

pub mod color;
mod error;
mod led;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use color::{clamp_channel, hue_to_rgb, Polarity, FULL_BRIGHTNESS, MAX_CHANNEL_VALUE};
pub use error::{ColorChannel, LedError};
pub use led::RgbLed;
pub use rgb::RGB8;
