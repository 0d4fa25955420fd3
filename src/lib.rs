//! Blocking page-mode text driver for SSD1306 OLED controllers over I2C.
//!
//! This crate drives 128×32 and 128×64 SSD1306 panels without a
//! framebuffer: text is blitted glyph by glyph straight into display RAM
//! using the controller's page addressing mode.
//!
//! # Architecture
//!
//! The crate is split into two layers:
//!
//! - **`driver`** (crate-private) — the command channel. Frames bytes with
//!   the `0x00` (command) or `0x40` (data) control byte and issues one I2C
//!   write per call.
//! - **[`Ssd1306`]** (public) — configuration commands, the power-up
//!   sequence, screen clearing, cursor positioning and text output. Tracks
//!   the controller's page/column registers in a [`Cursor`].
//!
//! # Quick start
//!
//! ```no_run
//! use ssd1306_page_driver::{DisplayConfig, DisplayHeight, Ssd1306};
//!
//! # fn example<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), ssd1306_page_driver::OledError<I::Error>> {
//! // Construct with any `embedded-hal` 1.0 blocking I2C implementation
//! let mut oled = Ssd1306::new(i2c, DisplayConfig::new(0x3C, DisplayHeight::Rows32));
//!
//! oled.init()?;
//! oled.write_string("OK")?;
//! # Ok(())
//! # }
//! ```
//!
//! Every operation returns a [`Result`]; a bus failure is reported as
//! [`OledError::Transport`] and the caller decides whether to halt, retry
//! or report it.
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public types
//!   and debug/error logging inside the driver.

#![no_std]

pub mod commands;
pub mod config;
mod display;
mod driver;
mod error;
pub mod font;

pub use config::{
    ChargePump, ComScanDirection, DisplayConfig, DisplayHeight, EntireDisplay, Polarity,
    SegmentRemap, ALTERNATE_ADDRESS, DEFAULT_ADDRESS, WIDTH,
};
pub use display::{Cursor, Ssd1306};
pub use driver::MAX_BURST_LEN;
pub use error::OledError;
