//! Count-up example
//!
//! Standalone hardware demonstration that exercises [`SegmentDisplay`]
//! directly. Counts from -20 upwards once every 100 ms, blinks the colon on
//! every tenth step and steps the brightness, so every command byte the
//! driver knows is seen on real hardware. Past 9999 the display shows `----`.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                    |
//! |-----------|------------|--------------------------|
//! | I2C0 SDA  | GP20       |                          |
//! | I2C0 SCL  | GP21       |                          |
//! | 7seg VCC  | 3V3        |                          |
//! | 7seg GND  | GND        | module at address 0x71   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use serial_7seg::{Decimals, SegmentDisplay, DEFAULT_ADDRESS};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Brightness levels stepped through, one per hundred counts.
const BRIGHTNESS_STEPS: [u8; 4] = [32, 96, 160, 254];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Count-up example starting");

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    let mut display = SegmentDisplay::new(i2c, DEFAULT_ADDRESS);
    if let Err(e) = display.clear_display().await {
        warn!("clear failed: {}", e);
    }

    let mut value: i32 = -20;

    loop {
        let colon = if value.rem_euclid(20) < 10 {
            Decimals::COLON
        } else {
            Decimals::NONE
        };
        let step = (value.rem_euclid(400) / 100) as usize;

        // Repeated settings are filtered by the driver; only changes hit the bus.
        if let Err(e) = display.set_decimals(colon).await {
            warn!("decimals failed: {}", e);
        }
        if let Err(e) = display.set_brightness(BRIGHTNESS_STEPS[step]).await {
            warn!("brightness failed: {}", e);
        }
        if let Err(e) = display.send_number(value).await {
            warn!("send failed: {}", e);
        }

        value = value.wrapping_add(1);
        Timer::after(Duration::from_millis(100)).await;
    }
}
