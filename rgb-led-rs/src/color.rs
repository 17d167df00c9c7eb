//! Pure color math: clamping, polarity and hue rotation.
//!
//! Nothing here touches hardware, so all of it is tested on the host.

use libm::{cosf, sinf};

/// Largest duty value a channel accepts.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Brightness that maps the hue wheel onto the full channel range.
pub const FULL_BRIGHTNESS: u8 = 255;

/// √(1/3), the green/blue sine weight of the hue rotation.
const SQRT_ONE_THIRD: f32 = 0.577_350_26;

/// LED wiring polarity.
///
/// Has no `Default`; the wiring must be stated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Shared cathode; a higher duty is brighter.
    CommonCathode,
    /// Shared anode; the channel sinks current, so duty is inverted.
    CommonAnode,
}

impl Polarity {
    /// Map a logical channel value to the duty that produces it.
    pub const fn apply(self, value: u8) -> u8 {
        match self {
            Polarity::CommonCathode => value,
            Polarity::CommonAnode => MAX_CHANNEL_VALUE - value,
        }
    }
}

/// Clamp an arbitrary request into `0..=255`.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL_VALUE as i32) as u8
}

/// Rotate pure red by `angle_degrees` around the hue wheel.
///
/// With `x` the angle in radians and `k = 1.5 · brightness`:
///
/// ```text
/// red   = (cos x + (1 − cos x) / 3)        · k
/// green = ((1 − cos x) / 3 + √(1/3) sin x) · k
/// blue  = ((1 − cos x) / 3 − √(1/3) sin x) · k
/// ```
///
/// Results are truncated toward zero and **not** clamped; they overshoot
/// 255 and dip below 0 on parts of the wheel.
pub fn hue_to_rgb(angle_degrees: i32, brightness: u8) -> [i32; 3] {
    let x = angle_degrees as f32 * (core::f32::consts::PI / 180.0);
    let (sin, cos) = (sinf(x), cosf(x));

    let scale = 1.5 * brightness as f32;
    let base = (1.0 - cos) / 3.0;

    let red = (cos + base) * scale;
    let green = (base + SQRT_ONE_THIRD * sin) * scale;
    let blue = (base - SQRT_ONE_THIRD * sin) * scale;

    [red as i32, green as i32, blue as i32]
}
