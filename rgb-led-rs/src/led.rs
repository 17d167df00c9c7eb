//! Three-channel PWM driver with per-channel write suppression.

use embedded_hal::pwm::SetDutyCycle;
use rgb::RGB8;

use crate::color::{clamp_channel, hue_to_rgb, Polarity, MAX_CHANNEL_VALUE};
use crate::error::{ColorChannel, LedError};

/// An RGB LED on three PWM outputs.
///
/// Remembers the duty last written to each channel and skips the write when
/// a new request resolves to the same duty, so repeated calls with an
/// unchanged color cause no PWM traffic.
///
/// # Example
///
/// ```ignore
/// use rgb_led::{Polarity, RgbLed};
///
/// // `red`, `green`, `blue` implement `embedded_hal::pwm::SetDutyCycle`.
/// let mut led = RgbLed::new(red, green, blue, Polarity::CommonAnode);
///
/// led.set_color(255, 64, 0)?;
///
/// for angle in (0..360).step_by(5) {
///     led.cycle_color(angle, 128)?;
/// }
/// ```
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    polarity: Polarity,
    /// Duty last written per channel, after polarity.
    applied: [u8; 3],
}

impl<R, G, B> RgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle<Error = R::Error>,
    B: SetDutyCycle<Error = R::Error>,
{
    /// Take ownership of the three PWM outputs. No duty is written yet; the
    /// cache starts at zero on every channel.
    pub fn new(red: R, green: G, blue: B, polarity: Polarity) -> Self {
        Self {
            red,
            green,
            blue,
            polarity,
            applied: [0; 3],
        }
    }

    /// Show the color `(red, green, blue)`.
    ///
    /// Each component is clamped to `0..=255` and inverted for common-anode
    /// wiring. Only channels whose resulting duty differs from the cached one
    /// are written.
    ///
    /// # Errors
    ///
    /// [`LedError::Pwm`] for the first channel that fails. Channels written
    /// before it keep their new duty; the failed channel keeps its old cache
    /// entry, so the next call retries it.
    pub fn set_color(&mut self, red: i32, green: i32, blue: i32) -> Result<(), LedError<R::Error>> {
        let polarity = self.polarity;
        let [r, g, b] = [red, green, blue].map(|v| polarity.apply(clamp_channel(v)));

        write_channel(&mut self.red, ColorChannel::Red, &mut self.applied[0], r)?;
        write_channel(&mut self.green, ColorChannel::Green, &mut self.applied[1], g)?;
        write_channel(&mut self.blue, ColorChannel::Blue, &mut self.applied[2], b)?;

        Ok(())
    }

    /// [`set_color`](Self::set_color) for an [`RGB8`].
    pub fn set_rgb(&mut self, color: RGB8) -> Result<(), LedError<R::Error>> {
        self.set_color(color.r.into(), color.g.into(), color.b.into())
    }

    /// Show the hue `angle_degrees` around the color wheel at `brightness`.
    ///
    /// 0° is red, 120° green, 240° blue. See
    /// [`hue_to_rgb`](crate::hue_to_rgb) for the transform.
    pub fn cycle_color(&mut self, angle_degrees: i32, brightness: u8) -> Result<(), LedError<R::Error>> {
        let [r, g, b] = hue_to_rgb(angle_degrees, brightness);
        self.set_color(r, g, b)
    }

    /// Turn all channels off.
    pub fn off(&mut self) -> Result<(), LedError<R::Error>> {
        self.set_color(0, 0, 0)
    }

    /// Duty currently held by each channel, after polarity, as `[r, g, b]`.
    pub fn applied(&self) -> [u8; 3] {
        self.applied
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Consume the driver and return the PWM outputs.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

/// Write `duty` to `pwm` unless `cached` already holds it.
fn write_channel<P: SetDutyCycle>(
    pwm: &mut P,
    channel: ColorChannel,
    cached: &mut u8,
    duty: u8,
) -> Result<(), LedError<P::Error>> {
    if *cached == duty {
        return Ok(());
    }

    pwm.set_duty_cycle_fraction(duty.into(), MAX_CHANNEL_VALUE.into())
        .map_err(|e| LedError::Pwm(channel, e))?;
    *cached = duty;

    #[cfg(feature = "defmt")]
    defmt::trace!("{} duty -> {}", channel, duty);

    Ok(())
}
