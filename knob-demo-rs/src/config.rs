//! Board wiring and timing for the knob demo.
//!
//! | Signal     | Pico 2 Pin | Notes                         |
//! |------------|------------|-------------------------------|
//! | ENC_A      | GP2        | pull-up, switch to GND        |
//! | ENC_B      | GP3        | pull-up, switch to GND        |
//! | LED_RED    | GP6        | PWM slice 3 A                 |
//! | LED_GREEN  | GP8        | PWM slice 4 A                 |
//! | LED_BLUE   | GP10       | PWM slice 5 A                 |
//! | I2C0 SDA   | GP20       | shared by nothing else        |
//! | I2C0 SCL   | GP21       |                               |
//!
//! Pins themselves are taken from `embassy_rp::Peripherals` in `main`; keep
//! the table in sync when rewiring.

use rgb_led::Polarity;

/// The LED on the demo board is common anode.
pub const LED_POLARITY: Polarity = Polarity::CommonAnode;

/// PWM counter wrap value. One duty step per channel value.
pub const PWM_TOP: u16 = 255;

/// Hue brightness handed to `cycle_color`.
pub const LED_BRIGHTNESS: u8 = 170;

/// Hue degrees per encoder count.
pub const DEGREES_PER_COUNT: i32 = 5;

/// 7-bit I2C address of the display module.
pub const DISPLAY_ADDRESS: u8 = serial_7seg::DEFAULT_ADDRESS;

/// Display brightness set once at start-up.
pub const DISPLAY_BRIGHTNESS: u8 = 200;

/// How often the LED follows the count.
pub const LED_PERIOD_MS: u64 = 10;

/// How often the display is refreshed when the count has changed.
pub const DISPLAY_PERIOD_MS: u64 = 50;
