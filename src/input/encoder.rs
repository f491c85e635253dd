//! Quadrature encoder decoding.
//!
//! Single-edge decode on the A channel only: a step fires when A changes
//! level, and B's level at that instant gives the direction. This relies
//! on the encoder's mechanical detents producing clean edges; it is
//! simpler and faster than full four-state Gray-code decoding but can
//! miscount on electrically noisy transitions.

use super::Step;

/// Tracks the previously sampled A-channel level between polls.
pub struct QuadratureDecoder {
    last_a: bool,
}

impl QuadratureDecoder {
    /// Create a decoder from the A channel's level at startup, so the
    /// first poll does not register a phantom edge.
    pub const fn new(initial_a: bool) -> Self {
        Self { last_a: initial_a }
    }

    /// Feed one pair of pin samples; returns the decoded step.
    ///
    /// The stored A level is updated on every call, edge or not.
    pub fn update(&mut self, a: bool, b: bool) -> Step {
        let step = if a != self.last_a {
            if b != a {
                Step::Cw
            } else {
                Step::Ccw
            }
        } else {
            Step::None
        };

        self.last_a = a;
        step
    }
}
