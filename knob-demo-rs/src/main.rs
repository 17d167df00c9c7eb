//! knob-demo
//!
//! Rotary encoder → RGB LED + seven-segment display firmware for the
//! Raspberry Pi Pico 2. Wires the three library crates into a live loop:
//!
//! 1. The knob is turned.
//! 2. One task per encoder channel awaits the edge that channel is armed
//!    for and updates the shared [`QuadratureCounter`].
//! 3. The LED task rotates the hue by the count on every tick; unchanged
//!    channels cost no PWM writes.
//! 4. The display task shows the count whenever it changed.
//!
//! The count lives in a plain `static`; every access to it takes a critical
//! section inside the counter.

#![no_std]
#![no_main]

mod config;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use quadrature_counter::{watch_channel, Channel, Level, QuadratureCounter};
use rgb_led::RgbLed;
use serial_7seg::{Decimals, SegmentDisplay};

use crate::config::*;

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// Wire the I2C0 peripheral interrupt to Embassy's async handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Encoder position, written by the channel tasks and read by everyone else.
static COUNTER: QuadratureCounter = QuadratureCounter::new();

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

type Led = RgbLed<Pwm<'static>, Pwm<'static>, Pwm<'static>>;
type Display = SegmentDisplay<I2c<'static, I2C0, i2c::Async>>;

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Edge loop for one encoder channel. Only returns if the pin fails.
#[embassy_executor::task(pool_size = 2)]
async fn channel_task(mut pin: Input<'static>, channel: Channel) {
    info!("Channel {} task started", channel);

    if let Err(e) = watch_channel(&mut pin, channel, &COUNTER).await {
        error!("Encoder watch stopped: {}", Debug2Format(&e));
    }
}

/// Rotates the LED hue with the knob.
#[embassy_executor::task]
async fn led_task(mut led: Led) {
    info!("LED task started");

    loop {
        let angle = COUNTER.count().wrapping_mul(DEGREES_PER_COUNT).rem_euclid(360);

        if let Err(e) = led.cycle_color(angle, LED_BRIGHTNESS) {
            warn!("LED update failed: {}", Debug2Format(&e));
        }

        Timer::after(Duration::from_millis(LED_PERIOD_MS)).await;
    }
}

/// Shows the count on the display.
///
/// A failed send leaves `shown` untouched, so the next tick retries it.
#[embassy_executor::task]
async fn display_task(mut display: Display) {
    info!("Display task started");

    if let Err(e) = display.clear_display().await {
        warn!("Display clear failed: {}", e);
    }
    if let Err(e) = display.set_brightness(DISPLAY_BRIGHTNESS).await {
        warn!("Display brightness failed: {}", e);
    }

    let mut shown: Option<i32> = None;

    loop {
        let count = COUNTER.count();

        if shown != Some(count) {
            // Apostrophe marks a negative position, which `----` would hide.
            let decimals = if count < 0 {
                Decimals::APOSTROPHE
            } else {
                Decimals::NONE
            };

            let result = match display.set_decimals(decimals).await {
                Ok(()) => display.send_number(count).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(()) => {
                    debug!("Display shows {}", count);
                    shown = Some(count);
                }
                Err(e) => warn!("Display update failed: {}", e),
            }
        }

        Timer::after(Duration::from_millis(DISPLAY_PERIOD_MS)).await;
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("knob-demo starting");

    // —— Encoder ————————————————————————————————————————————————————————————

    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);

    // Pull-ups idle high; latch the real levels before the first edge.
    COUNTER.sync_levels(Level::from(pin_a.is_high()), Level::from(pin_b.is_high()));

    // —— LED ————————————————————————————————————————————————————————————————

    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;

    let red = Pwm::new_output_a(p.PWM_SLICE3, p.PIN_6, pwm_config.clone());
    let green = Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, pwm_config.clone());
    let blue = Pwm::new_output_a(p.PWM_SLICE5, p.PIN_10, pwm_config);

    let mut led = RgbLed::new(red, green, blue, LED_POLARITY);

    // Common anode: "off" is full duty, which the zeroed cache does not hold.
    if let Err(e) = led.off() {
        warn!("LED init failed: {}", Debug2Format(&e));
    }

    // —— Display ————————————————————————————————————————————————————————————

    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );
    let display = SegmentDisplay::new(i2c, DISPLAY_ADDRESS);

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(channel_task(pin_a, Channel::A)).unwrap();
    spawner.spawn(channel_task(pin_b, Channel::B)).unwrap();
    spawner.spawn(led_task(led)).unwrap();
    spawner.spawn(display_task(display)).unwrap();

    info!("All tasks spawned");
}
