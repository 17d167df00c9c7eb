//! Interrupt-driven pulse counter for two-channel quadrature encoders.
//!
//! Each channel of the encoder is watched for one edge at a time. When the
//! edge arrives the channel flips its latched level, decides the rotation
//! direction from the other channel's latched level, adjusts a shared signed
//! count by exactly one, and re-arms for the opposite edge.
//!
//! # Architecture
//!
//! - **[`QuadratureCounter`]** — the shared count and the two signal latches,
//!   guarded by a [`critical_section`] mutex. Usually a `static`.
//! - **[`EncoderChannel`] / [`QuadratureEncoder`]** — interrupt handler
//!   bodies for bare-metal targets, driving an [`InterruptLine`] the
//!   application implements for its HAL.
//! - **[`watch_channel`]** — the same state machine for async executors,
//!   awaiting edges through [`embedded_hal_async::digital::Wait`].
//!
//! # Direction convention
//!
//! Channel A leading channel B is forward rotation and counts **down**;
//! B leading A counts up. A full forward cycle (A↑ B↑ A↓ B↓) moves the count
//! by −4.
//!
//! # Limitations
//!
//! Edges arriving faster than the target can take interrupts are dropped.
//! That is a hardware limit; the count simply misses those pulses.
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] on the public types and `trace`-level
//!   logging of every counted edge.

#![cfg_attr(not(test), no_std)]

pub use counter::QuadratureCounter;
pub use encoder::{EncoderChannel, InterruptLine, QuadratureEncoder};
pub use error::EncoderError;
pub use state::{Channel, Direction, Edge, Level};
pub use watch::watch_channel;

mod counter;
mod encoder;
mod error;
pub mod state;
mod watch;
