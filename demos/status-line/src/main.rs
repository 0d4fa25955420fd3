//! Status line example
//!
//! Standalone hardware demonstration for [`Ssd1306`] on a 128×32 panel.
//! Initialises the display, writes a fixed status line on page 0, then
//! rewrites an uptime counter on page 2 once a second.
//!
//! Any driver error is treated as a wiring or hardware fault: it is logged,
//! the on-board LED is latched on, and the core parks.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |
//! | Fault LED | GP25       | on-board LED    |

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use ssd1306_page_driver::{DisplayConfig, DisplayHeight, OledError, Ssd1306, DEFAULT_ADDRESS};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Page holding the uptime counter. Characters are 6 px wide, so a page
/// fits 21 of them.
const COUNTER_PAGE: u8 = 2;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Status line example starting");

    let mut led = Output::new(p.PIN_25, Level::Low);

    let mut config = i2c::Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, config);

    let mut oled = Ssd1306::new(
        i2c,
        DisplayConfig::new(DEFAULT_ADDRESS, DisplayHeight::Rows32),
    );

    if let Err(e) = oled.init() {
        fault(&mut led, e);
    }
    info!("OLED initialised");

    if let Err(e) = oled.write_string("Temperature 29 C") {
        fault(&mut led, e);
    }

    let mut seconds: u32 = 0;
    let mut line: String<21> = String::new();

    loop {
        line.clear();
        // Fits: "Uptime " plus at most 10 digits and "s".
        let _ = write!(line, "Uptime {}s", seconds);

        let result = oled
            .set_cursor_position(COUNTER_PAGE, 0)
            .and_then(|_| oled.write_string(&line));
        if let Err(e) = result {
            fault(&mut led, e);
        }

        seconds = seconds.wrapping_add(1);
        Timer::after(Duration::from_secs(1)).await;
    }
}

/// Log the error, latch the fault LED and stop.
fn fault(led: &mut Output<'_>, error: OledError<i2c::Error>) -> ! {
    error!("Display fault: {}", error);
    led.set_high();
    loop {
        cortex_m::asm::wfi();
    }
}
