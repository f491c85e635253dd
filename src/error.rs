//! Error type for knobmenu.
//!
//! The taxonomy is narrow: the core is a pure input-to-event transform,
//! and transient signal noise is absorbed by the decoder and button
//! filter rather than reported. What remains is misconfiguration, which
//! is fatal at construction time - the firmware refuses to start rather
//! than run with undefined wraparound arithmetic.

/// Invalid menu geometry, detected when the model is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The root list must hold at least one entry.
    NoRootItems,
    /// A child list must hold at least one real entry plus "Return".
    ChildListTooShort,
}
