//! Panel configuration and typed command arguments.
//!
//! [`DisplayConfig`] is fixed at construction; everything that depends on
//! the panel's row count (page count, multiplex ratio, COM pin layout) is
//! derived from its [`DisplayHeight`].

use crate::commands;

/// Default 7-bit I2C address (SA0 low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 high).
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Display width in columns. Also the column register wrap point.
pub const WIDTH: u8 = 128;

/// Vertical resolution of the attached panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayHeight {
    /// 128×32 panel, 4 pages.
    Rows32,
    /// 128×64 panel, 8 pages.
    Rows64,
}

impl DisplayHeight {
    /// Number of driven rows.
    pub const fn rows(self) -> u8 {
        match self {
            DisplayHeight::Rows32 => 32,
            DisplayHeight::Rows64 => 64,
        }
    }

    /// Number of 8-row pages.
    pub const fn pages(self) -> u8 {
        self.rows() / 8
    }

    /// Multiplex ratio parameter (`rows - 1`).
    pub const fn multiplex_ratio(self) -> u8 {
        match self {
            DisplayHeight::Rows32 => 0x1F,
            DisplayHeight::Rows64 => 0x3F,
        }
    }

    /// COM pins hardware configuration parameter.
    ///
    /// 32-row panels are wired sequential; 64-row panels use the
    /// alternative (interleaved) layout.
    pub const fn com_pins_config(self) -> u8 {
        match self {
            DisplayHeight::Rows32 => 0x02,
            DisplayHeight::Rows64 => 0x12,
        }
    }
}

/// Construction-time configuration for [`Ssd1306`](crate::Ssd1306).
///
/// [`DisplayConfig::default()`] targets the common 128×64 module at
/// [`DEFAULT_ADDRESS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address, usually `0x3C` or `0x3D`.
    pub address: u8,
    /// Panel height; never changes after construction.
    pub height: DisplayHeight,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            height: DisplayHeight::Rows64,
        }
    }
}

impl DisplayConfig {
    pub const fn new(address: u8, height: DisplayHeight) -> Self {
        Self { address, height }
    }
}

// ── Typed command arguments ──────────────────────────────────────────────

/// Entire-display-on override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntireDisplay {
    /// Show display RAM contents (reset).
    FollowRam,
    /// Force every pixel on regardless of RAM.
    IgnoreRam,
}

/// Pixel polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// RAM bit 1 lights the pixel (reset).
    Normal,
    /// RAM bit 0 lights the pixel.
    Inverse,
}

/// Column-to-segment mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentRemap {
    /// Column 0 drives SEG0 (reset).
    Normal,
    /// Column 127 drives SEG0.
    Flipped,
}

/// COM output scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComScanDirection {
    /// COM0 to COM[N-1] (reset).
    Normal,
    /// COM[N-1] to COM0.
    Remapped,
}

/// Internal charge pump regulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargePump {
    Disable,
    Enable,
}

impl EntireDisplay {
    pub(crate) const fn opcode(self) -> u8 {
        match self {
            EntireDisplay::FollowRam => commands::ENTIRE_DISPLAY_ON_FOLLOW_RAM,
            EntireDisplay::IgnoreRam => commands::ENTIRE_DISPLAY_ON_IGNORE_RAM,
        }
    }
}

impl Polarity {
    pub(crate) const fn opcode(self) -> u8 {
        match self {
            Polarity::Normal => commands::SET_NORMAL_DISPLAY,
            Polarity::Inverse => commands::SET_INVERSE_DISPLAY,
        }
    }
}

impl SegmentRemap {
    pub(crate) const fn opcode(self) -> u8 {
        match self {
            SegmentRemap::Normal => commands::SET_SEGMENT_REMAP_NORMAL,
            SegmentRemap::Flipped => commands::SET_SEGMENT_REMAP_FLIPPED,
        }
    }
}

impl ComScanDirection {
    pub(crate) const fn opcode(self) -> u8 {
        match self {
            ComScanDirection::Normal => commands::SET_COM_SCAN_NORMAL,
            ComScanDirection::Remapped => commands::SET_COM_SCAN_REMAPPED,
        }
    }
}

impl ChargePump {
    pub(crate) const fn parameter(self) -> u8 {
        match self {
            ChargePump::Disable => commands::CHARGE_PUMP_DISABLE,
            ChargePump::Enable => commands::CHARGE_PUMP_ENABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_variants_derive_panel_constants() {
        assert_eq!(DisplayHeight::Rows32.pages(), 4);
        assert_eq!(DisplayHeight::Rows32.multiplex_ratio(), 0x1F);
        assert_eq!(DisplayHeight::Rows32.com_pins_config(), 0x02);

        assert_eq!(DisplayHeight::Rows64.pages(), 8);
        assert_eq!(DisplayHeight::Rows64.multiplex_ratio(), 0x3F);
        assert_eq!(DisplayHeight::Rows64.com_pins_config(), 0x12);
    }

    #[test]
    fn multiplex_ratio_is_rows_minus_one() {
        for height in [DisplayHeight::Rows32, DisplayHeight::Rows64] {
            assert_eq!(height.multiplex_ratio(), height.rows() - 1);
        }
    }

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.address, 0x3C);
        assert_eq!(c.height, DisplayHeight::Rows64);
    }

    #[test]
    fn argument_opcodes_match_datasheet() {
        assert_eq!(EntireDisplay::FollowRam.opcode(), 0xA4);
        assert_eq!(EntireDisplay::IgnoreRam.opcode(), 0xA5);
        assert_eq!(Polarity::Normal.opcode(), 0xA6);
        assert_eq!(Polarity::Inverse.opcode(), 0xA7);
        assert_eq!(SegmentRemap::Normal.opcode(), 0xA0);
        assert_eq!(SegmentRemap::Flipped.opcode(), 0xA1);
        assert_eq!(ComScanDirection::Normal.opcode(), 0xC0);
        assert_eq!(ComScanDirection::Remapped.opcode(), 0xC8);
        assert_eq!(ChargePump::Disable.parameter(), 0x10);
        assert_eq!(ChargePump::Enable.parameter(), 0x14);
    }
}
