//! SSD1306 control bytes and command opcodes.
//!
//! Every I2C transaction to the controller starts with a control byte that
//! tags the following byte as either a command or display RAM data.
//! Single-byte commands carry their argument in the low bits of the opcode
//! (`BASE + value`); two-byte commands are an opcode followed by a
//! parameter byte sent as a second command.

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Control byte prefixing a command byte.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefixing a display RAM data byte.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Contrast control, followed by the level (reset 0x7F).
pub const SET_CONTRAST: u8 = 0x81;
pub const ENTIRE_DISPLAY_ON_FOLLOW_RAM: u8 = 0xA4;
pub const ENTIRE_DISPLAY_ON_IGNORE_RAM: u8 = 0xA5;
pub const SET_NORMAL_DISPLAY: u8 = 0xA6;
pub const SET_INVERSE_DISPLAY: u8 = 0xA7;
pub const SET_DISPLAY_OFF: u8 = 0xAE;
pub const SET_DISPLAY_ON: u8 = 0xAF;

// ---------------------------------------------------------------------------
// Addressing commands (page addressing mode)
// ---------------------------------------------------------------------------

/// Lower column start nibble: `SET_LOWER_COLUMN | (column & 0x0F)`.
pub const SET_LOWER_COLUMN: u8 = 0x00;

/// Higher column start nibble: `SET_HIGHER_COLUMN | (column >> 4)`.
pub const SET_HIGHER_COLUMN: u8 = 0x10;

/// Page start address: `SET_PAGE_ADDRESS | page`.
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

// ---------------------------------------------------------------------------
// Hardware configuration commands
// ---------------------------------------------------------------------------

/// Display start line: `SET_DISPLAY_START_LINE | line` (0–63).
pub const SET_DISPLAY_START_LINE: u8 = 0x40;
pub const SET_SEGMENT_REMAP_NORMAL: u8 = 0xA0;
pub const SET_SEGMENT_REMAP_FLIPPED: u8 = 0xA1;
/// Multiplex ratio, followed by `rows - 1`.
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
pub const SET_COM_SCAN_NORMAL: u8 = 0xC0;
pub const SET_COM_SCAN_REMAPPED: u8 = 0xC8;
/// Vertical display offset, followed by 0–63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
/// COM pins hardware configuration, followed by the pin layout byte.
pub const SET_COM_PINS_CONFIG: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving scheme commands
// ---------------------------------------------------------------------------

pub const SET_CLOCK_DIVIDE: u8 = 0xD5;
pub const SET_PRECHARGE_PERIOD: u8 = 0xD9;
pub const SET_VCOMH_DESELECT_LEVEL: u8 = 0xDB;

// ---------------------------------------------------------------------------
// Charge pump
// ---------------------------------------------------------------------------

pub const SET_CHARGE_PUMP: u8 = 0x8D;
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

// ---------------------------------------------------------------------------
// Field masks
// ---------------------------------------------------------------------------

/// Column nibble field of the column address commands.
pub const NIBBLE_MASK: u8 = 0x0F;

/// Column addresses on a 128-column panel.
pub const COLUMN_MASK: u8 = 0x7F;

/// Page field of the page address command.
pub const PAGE_MASK: u8 = 0x07;

/// Line field of the start line command.
pub const START_LINE_MASK: u8 = 0x3F;

// ---------------------------------------------------------------------------
// Power-up defaults used by the initialization sequence
// ---------------------------------------------------------------------------

pub const INIT_CLOCK_DIVIDE: u8 = 0x80;
pub const INIT_CONTRAST: u8 = 0xCF;
pub const INIT_PRECHARGE_PERIOD: u8 = 0xF1;
pub const INIT_VCOMH_DESELECT_LEVEL: u8 = 0x40;
