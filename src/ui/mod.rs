//! User interface subsystem - OLED list rendering.
//!
//! Consumes the navigator's state to draw the active list with its
//! highlight marker on the SSD1306. Rendering is driven by navigation
//! events: the firmware redraws only on the tick that produced one.

pub mod display;
