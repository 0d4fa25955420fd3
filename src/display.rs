//! Page-mode SSD1306 display controller.
//!
//! [`Ssd1306`] sequences command-channel writes for initialisation, screen
//! clearing, cursor positioning and text output. It keeps no framebuffer:
//! every pixel byte goes straight to display RAM at the controller's
//! current page/column, which the driver mirrors in a [`Cursor`].

use embedded_hal::i2c::I2c;

use crate::commands::{self, COLUMN_MASK, NIBBLE_MASK, PAGE_MASK, START_LINE_MASK};
use crate::config::{
    ChargePump, ComScanDirection, DisplayConfig, DisplayHeight, EntireDisplay, Polarity,
    SegmentRemap, WIDTH,
};
use crate::driver::{CommandChannel, MAX_BURST_LEN};
use crate::error::OledError;
use crate::font;

/// Driver-side mirror of the controller's page and column registers.
///
/// The controller cannot be read back over I2C, so this is what the driver
/// believes the registers hold. It is updated by every addressing command
/// and advanced by every data byte written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Current page, `0..pages`.
    pub page: u8,
    /// Current column, `0..128`.
    pub column: u8,
}

impl Cursor {
    /// Column auto-increments per data byte and wraps at [`WIDTH`]. The page
    /// never advances on its own.
    fn advance(&mut self, bytes: usize) {
        let column = (usize::from(self.column) + bytes) % usize::from(WIDTH);
        self.column = column as u8;
    }
}

/// Blocking driver for an SSD1306 controller in page addressing mode.
///
/// # Lifecycle
///
/// 1. [`Ssd1306::new()`] — stores the configuration, no I2C traffic.
/// 2. [`Ssd1306::init()`] — sends the power-up sequence and blanks the
///    panel. Call once before anything else.
/// 3. [`set_cursor_position()`](Self::set_cursor_position) and
///    [`write_string()`](Self::write_string) to put text on screen.
///
/// The transport can be owned or borrowed: `embedded-hal` implements
/// [`I2c`] for `&mut T`, so passing `&mut bus` leaves ownership with the
/// caller.
///
/// # Example
///
/// ```no_run
/// use ssd1306_page_driver::{DisplayConfig, DisplayHeight, Ssd1306};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = Ssd1306::new(i2c, DisplayConfig::new(0x3C, DisplayHeight::Rows32));
/// oled.init().unwrap();
/// oled.set_cursor_position(1, 0).unwrap();
/// oled.write_string("Temperature 29 C").unwrap();
/// # }
/// ```
pub struct Ssd1306<I2C> {
    channel: CommandChannel<I2C>,
    height: DisplayHeight,
    cursor: Cursor,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before any other operation.
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        Self {
            channel: CommandChannel::new(i2c, config.address),
            height: config.height,
            cursor: Cursor::default(),
        }
    }

    pub fn height(&self) -> DisplayHeight {
        self.height
    }

    /// 7-bit I2C address of the controller.
    pub fn address(&self) -> u8 {
        self.channel.address()
    }

    /// Where the next data byte will land, as far as the driver knows.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Consume the driver and hand back the transport.
    pub fn release(self) -> I2C {
        self.channel.release()
    }

    // ── Initialisation ───────────────────────────────────────────────────

    /// Send the power-up sequence, blank display RAM and switch the panel on.
    ///
    /// The order is fixed: multiplexing, charge pump and scan configuration
    /// are set with the panel off, RAM is cleared before the panel is turned
    /// on, and the addressing registers are left at page 0 / column 0.
    ///
    /// # Errors
    ///
    /// Stops at the first failed transaction and returns
    /// [`OledError::Transport`]. The controller is then in an unknown,
    /// partially configured state; re-run `init()` after fixing the bus.
    pub fn init(&mut self) -> Result<(), OledError<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SSD1306 init at {=u8:#x}, {=u8} rows",
            self.address(),
            self.height.rows()
        );

        let height = self.height;

        self.set_display_off()?;
        self.set_clock_divide(commands::INIT_CLOCK_DIVIDE)?;
        self.set_multiplex_ratio(height.multiplex_ratio())?;
        self.set_display_offset(0)?;
        self.set_display_start_line(0)?;
        self.set_charge_pump(ChargePump::Enable)?;
        self.set_segment_remap(SegmentRemap::Flipped)?;
        self.set_com_scan_direction(ComScanDirection::Remapped)?;
        self.set_com_pins_config(height.com_pins_config())?;
        self.set_contrast(commands::INIT_CONTRAST)?;
        self.set_precharge_period(commands::INIT_PRECHARGE_PERIOD)?;
        self.set_vcomh_deselect_level(commands::INIT_VCOMH_DESELECT_LEVEL)?;
        self.set_entire_display_on(EntireDisplay::FollowRam)?;
        self.set_polarity(Polarity::Normal)?;
        self.clear_screen(0x00)?;
        self.set_display_on()?;

        self.set_page_address(0)?;
        self.set_lower_column_address(0)?;
        self.set_higher_column_address(0)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 initialised");

        Ok(())
    }

    // ── Fundamental commands ─────────────────────────────────────────────

    /// Contrast level, 0–255 (reset 0x7F).
    pub fn set_contrast(&mut self, level: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_CONTRAST, level)
    }

    pub fn set_entire_display_on(
        &mut self,
        mode: EntireDisplay,
    ) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(mode.opcode())
    }

    pub fn set_polarity(&mut self, polarity: Polarity) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(polarity.opcode())
    }

    pub fn set_display_on(&mut self) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(commands::SET_DISPLAY_ON)
    }

    /// Put the panel to sleep. Display RAM and configuration are retained.
    pub fn set_display_off(&mut self) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(commands::SET_DISPLAY_OFF)
    }

    // ── Addressing commands ──────────────────────────────────────────────

    /// Low nibble of the column start address (0–15).
    pub fn set_lower_column_address(&mut self, nibble: u8) -> Result<(), OledError<I2C::Error>> {
        let nibble = nibble & NIBBLE_MASK;
        self.channel
            .send_command(commands::SET_LOWER_COLUMN | nibble)?;
        self.cursor.column = (self.cursor.column & !NIBBLE_MASK) | nibble;
        Ok(())
    }

    /// High nibble of the column start address (0–7 on a 128-column panel).
    pub fn set_higher_column_address(&mut self, nibble: u8) -> Result<(), OledError<I2C::Error>> {
        let nibble = nibble & NIBBLE_MASK;
        self.channel
            .send_command(commands::SET_HIGHER_COLUMN | nibble)?;
        self.cursor.column = ((nibble << 4) | (self.cursor.column & NIBBLE_MASK)) & COLUMN_MASK;
        Ok(())
    }

    /// Page start address, `0..pages` (3 max on 32-row panels, 7 on 64-row).
    pub fn set_page_address(&mut self, page: u8) -> Result<(), OledError<I2C::Error>> {
        let page = page & PAGE_MASK;
        self.channel.send_command(commands::SET_PAGE_ADDRESS | page)?;
        self.cursor.page = page;
        Ok(())
    }

    // ── Hardware configuration commands ──────────────────────────────────

    /// RAM row mapped to the top of the panel, 0–63.
    pub fn set_display_start_line(&mut self, line: u8) -> Result<(), OledError<I2C::Error>> {
        self.channel
            .send_command(commands::SET_DISPLAY_START_LINE | (line & START_LINE_MASK))
    }

    pub fn set_segment_remap(&mut self, remap: SegmentRemap) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(remap.opcode())
    }

    /// Number of driven rows minus one.
    pub fn set_multiplex_ratio(&mut self, ratio: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_MULTIPLEX_RATIO, ratio)
    }

    pub fn set_com_scan_direction(
        &mut self,
        direction: ComScanDirection,
    ) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(direction.opcode())
    }

    /// Vertical shift by COM, 0–63.
    pub fn set_display_offset(&mut self, offset: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_DISPLAY_OFFSET, offset)
    }

    /// COM pins layout byte; see [`DisplayHeight::com_pins_config`].
    pub fn set_com_pins_config(&mut self, config: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_COM_PINS_CONFIG, config)
    }

    // ── Timing and driving scheme commands ───────────────────────────────

    /// Clock divide ratio (low nibble) and oscillator frequency (high nibble).
    pub fn set_clock_divide(&mut self, value: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_CLOCK_DIVIDE, value)
    }

    /// Phase 1 (low nibble) and phase 2 (high nibble) pre-charge periods.
    pub fn set_precharge_period(&mut self, value: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_PRECHARGE_PERIOD, value)
    }

    pub fn set_vcomh_deselect_level(&mut self, level: u8) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_VCOMH_DESELECT_LEVEL, level)
    }

    pub fn set_charge_pump(&mut self, pump: ChargePump) -> Result<(), OledError<I2C::Error>> {
        self.command_with_parameter(commands::SET_CHARGE_PUMP, pump.parameter())
    }

    // ── Clear, cursor, text ──────────────────────────────────────────────

    /// Fill every page of display RAM with `fill`.
    ///
    /// Writes `128 * pages` data bytes, one transaction each. Page mode never
    /// carries a write over to the next page, so each page is addressed
    /// explicitly. Leaves the controller at page 0 / column 0.
    pub fn clear_screen(&mut self, fill: u8) -> Result<(), OledError<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Clearing {=u8} pages with {=u8:#x}", self.height.pages(), fill);

        self.set_cursor_position(0, 0)?;
        for page in 0..self.height.pages() {
            if page > 0 {
                self.set_page_address(page)?;
            }
            // Column wraps back to 0 after the last byte of the page.
            for _ in 0..WIDTH {
                self.channel.send_data(fill)?;
                self.cursor.advance(1);
            }
        }
        self.set_page_address(0)
    }

    /// Move the write position to `page` (0..pages) and `column` (0–127).
    ///
    /// Sends the page, low nibble and high nibble commands in that order,
    /// one transaction each.
    pub fn set_cursor_position(&mut self, page: u8, column: u8) -> Result<(), OledError<I2C::Error>> {
        self.set_page_address(page)?;
        self.set_lower_column_address(column & NIBBLE_MASK)?;
        self.set_higher_column_address((column & 0xF0) >> 4)
    }

    /// Draw one character at the cursor as a single 6-byte data burst.
    ///
    /// Only `' '..='\x7F'` have glyphs; anything else draws a space. The
    /// column advances by six and wraps to the start of the same page.
    pub fn write_char(&mut self, c: char) -> Result<(), OledError<I2C::Error>> {
        self.write_glyph(font::glyph(c))
    }

    /// Draw `s` left to right from the cursor.
    ///
    /// There is no line wrap: past column 127 the controller wraps to column
    /// 0 of the same page and overwrites what is there.
    pub fn write_string(&mut self, s: &str) -> Result<(), OledError<I2C::Error>> {
        for c in s.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    /// Write raw column bytes (bit 0 = top row of the page) at the cursor in
    /// one burst, e.g. a custom glyph or icon.
    ///
    /// # Errors
    ///
    /// [`OledError::BurstTooLong`] if `columns` is longer than
    /// [`MAX_BURST_LEN`]; nothing is sent in that case.
    pub fn write_glyph(&mut self, columns: &[u8]) -> Result<(), OledError<I2C::Error>> {
        self.write_data(columns)
    }

    fn write_data(&mut self, bytes: &[u8]) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_multiple_data(bytes)?;
        self.cursor.advance(bytes.len());
        Ok(())
    }

    fn command_with_parameter(
        &mut self,
        opcode: u8,
        parameter: u8,
    ) -> Result<(), OledError<I2C::Error>> {
        self.channel.send_command(opcode)?;
        self.channel.send_command(parameter)
    }
}
