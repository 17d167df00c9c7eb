//! Simple encoder example
//!
//! Counts pulses from a mechanical quadrature encoder on the Raspberry Pi
//! Pico 2 and logs the count via defmt whenever it changes.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | ENC A     | GP2        | Pull-up enabled              |
//! | ENC B     | GP3        | Pull-up enabled              |
//! | ENC COM   | GND        |                              |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use quadrature_counter::{watch_channel, Channel, Level, QuadratureCounter};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

static COUNTER: QuadratureCounter = QuadratureCounter::new();

/// One instance per encoder channel.
#[embassy_executor::task(pool_size = 2)]
async fn channel_task(mut pin: Input<'static>, channel: Channel) {
    if let Err(e) = watch_channel(&mut pin, channel, &COUNTER).await {
        error!("Encoder watch stopped: {}", Debug2Format(&e));
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder phases (GP2 = A, GP3 = B) ---
    let pin_a = Input::new(p.PIN_2, Pull::Up);
    let pin_b = Input::new(p.PIN_3, Pull::Up);

    // The encoder may rest on a detent with either phase high.
    COUNTER.sync_levels(Level::from(pin_a.is_high()), Level::from(pin_b.is_high()));

    spawner.spawn(channel_task(pin_a, Channel::A)).unwrap();
    spawner.spawn(channel_task(pin_b, Channel::B)).unwrap();

    info!("Encoder example started, rotate the knob to see the count");

    // Main loop: poll the shared count and log changes.
    let mut last = COUNTER.count();
    loop {
        Timer::after(Duration::from_millis(100)).await;

        let count = COUNTER.count();
        if count != last {
            info!("Count: {} (delta {})", count, count - last);
            last = count;
        }
    }
}
