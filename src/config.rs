//! Application-wide constants and compile-time configuration.
//!
//! Menu geometry, display delimiters, timing parameters and the firmware
//! pin map live here so they can be tuned in one place.

// Menu engine

/// Maximum menu depth. The root menu occupies the first level.
pub const MENU_STACK_SIZE: usize = 4;

/// Displayed length of a menu header label.
pub const HEADER_LABEL_SIZE: usize = 16;

/// Displayed length of a menu item label.
pub const ITEM_LABEL_SIZE: usize = 9;

/// Displayed length of an input field label.
pub const INPUT_LABEL_SIZE: usize = 9;

/// Capacity (bytes) of every line handed to the display.
/// Anything longer is dropped at the end of the line.
pub const TEXT_CAPACITY: usize = 32;

/// Increment applied by INC/DEC unless the navigation input asks for more.
pub const DEFAULT_INC_DELTA: u16 = 1;

/// Largest supported number of fixed-point decimals (10^9 still fits an i32).
pub const MAX_DECIMALS: u8 = 9;

/// Largest pick list; the selected index travels as a `u8`.
pub const MAX_LIST_ENTRIES: usize = u8::MAX as usize + 1;

// Display delimiters

/// Opening delimiter around a menu item on line 1.
pub const MENU_DELIM_L: char = '<';
/// Closing delimiter around a menu item on line 1.
pub const MENU_DELIM_R: char = '>';
/// Separator between a field label and its value.
pub const FIELD_PROMPT: char = ':';
/// Opening delimiter around a value under edit.
pub const FIELD_DELIM_L: char = '[';
/// Closing delimiter around a value under edit.
pub const FIELD_DELIM_R: char = ']';
/// Text shown for a `true` boolean.
pub const BOOL_TRUE: &str = "Y";
/// Text shown for a `false` boolean.
pub const BOOL_FALSE: &str = "N";
/// Shown instead of a number that does not fit its field.
pub const NUMERIC_OVERFLOW: char = '#';
/// Separates whole and fractional parts of a fixed-point value.
pub const DECIMAL_POINT: char = '.';
/// Separates entries of a pick list definition string.
pub const LIST_SEPARATOR: char = '|';

// Firmware timing

/// Menu engine tick period (ms).
pub const TICK_INTERVAL_MS: u64 = 20;

/// Menu inactivity timeout used by the firmware (ms). 0 disables it.
pub const MENU_TIMEOUT_MS: u32 = 30_000;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Holding INC/DEC longer than this starts auto-repeat with a larger step (ms).
pub const BUTTON_REPEAT_DELAY_MS: u64 = 600;

/// Period of auto-repeat events once repeating (ms).
pub const BUTTON_REPEAT_INTERVAL_MS: u64 = 150;

/// Step applied per auto-repeat event while a button is held.
pub const BUTTON_REPEAT_DELTA: u16 = 10;

/// Button events buffered between the button tasks and the menu loop.
pub const BUTTON_QUEUE_DEPTH: usize = 8;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*` pins are
// picked in `main.rs`. Adjust for your custom PCB.
//
//   Button INC     → P0.11
//   Button DEC     → P0.12
//   Button SELECT  → P0.24
//   Button ESCAPE  → P0.25
//   Button HELP    → P0.02
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
