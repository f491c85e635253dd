//! Host-testable library interface for knobmenu.
//!
//! The decoder, button filter and menu navigation are pure logic and run
//! anywhere; everything hardware-facing (Embassy, GPIO, the OLED) sits
//! behind the `embedded` cargo feature and only builds for the target.
//!
//! Usage: `cargo test` (unit tests below plus `tests/integration.rs`).
//!
//! The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod menu;

#[cfg(feature = "embedded")]
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
