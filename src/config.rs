//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and menu geometry
//! live here so they can be tuned in one place.

// Menu geometry

/// Number of entries in the root list.
pub const ROOT_ITEM_COUNT: usize = 5;

/// Number of entries in a child list, including the reserved "Return"
/// entry at the last index.
pub const CHILD_ITEM_COUNT: usize = 4;

// Timing

/// Minimum time between accepted button presses (ms).
///
/// The select button is level-triggered with a cooldown: holding it down
/// re-fires once per window. See `input::button`.
pub const BUTTON_DEBOUNCE_MS: u64 = 300;

/// Polling tick period (ms). One tick samples all inputs once and
/// services the display. Must stay short relative to the encoder step
/// rate or turns are dropped.
pub const TICK_PERIOD_MS: u64 = 20;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A      → P0.03
//   Encoder B      → P0.04
//   Button SELECT  → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
