//! Fixed-width character frames.
//!
//! The module always receives exactly [`DIGIT_COUNT`] characters per string
//! write. This module turns arbitrary text and numbers into such frames
//! without heap allocation.

use core::fmt::Write;

use heapless::String;

use crate::registers::{BLANK, DIGIT_COUNT};

/// Characters for one full display write.
pub type Frame = [u8; DIGIT_COUNT];

/// Shown when a number does not fit in four characters.
pub const OVERFLOW_FRAME: Frame = *b"----";

/// Smallest value [`number_frame`] can show.
pub const MIN_NUMBER: i32 = -999;

/// Largest value [`number_frame`] can show.
pub const MAX_NUMBER: i32 = 9999;

/// First four bytes of `text`, padded with blanks when shorter.
///
/// Works on bytes; non-ASCII characters are sent as their raw UTF-8 bytes,
/// which the module will not render meaningfully.
pub fn text_frame(text: &str) -> Frame {
    let mut frame = [BLANK; DIGIT_COUNT];
    for (slot, byte) in frame.iter_mut().zip(text.bytes()) {
        *slot = byte;
    }
    frame
}

/// `value` right-aligned in four characters.
///
/// Values outside [`MIN_NUMBER`]..=[`MAX_NUMBER`] give [`OVERFLOW_FRAME`].
pub fn number_frame(value: i32) -> Frame {
    if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
        return OVERFLOW_FRAME;
    }

    let mut text: String<DIGIT_COUNT> = String::new();
    if write!(text, "{:>4}", value).is_err() {
        return OVERFLOW_FRAME;
    }
    text_frame(&text)
}
