// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer payloads at the collaborator boundary.

use kurbo::{Point, Vec2};

/// One pan recognizer update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    /// Absolute translation since pan-start, with multi-touch averaging
    /// already applied by the recognizer.
    pub translation: Vec2,
    /// Number of touch points currently down.
    pub pointers: u32,
}

impl PanEvent {
    /// Creates a pan update payload.
    #[must_use]
    pub fn new(translation: Vec2, pointers: u32) -> Self {
        Self {
            translation,
            pointers,
        }
    }
}

/// One pinch recognizer begin/change event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    /// Focal coordinate of the pinch, in container coordinates.
    pub focal: Point,
    /// Multiplicative scale change reported for this event.
    pub scale_factor: f64,
    /// Number of touch points currently down.
    pub pointers: u32,
}

impl PinchEvent {
    /// Creates a pinch event payload.
    #[must_use]
    pub fn new(focal: Point, scale_factor: f64, pointers: u32) -> Self {
        Self {
            focal,
            scale_factor,
            pointers,
        }
    }

    /// Returns the scale factor if it is usable, `None` otherwise.
    ///
    /// Non-finite and non-positive factors come from degenerate touch
    /// geometry (for example two pointers reported at the same coordinate)
    /// and must not reach the scale state; callers skip the scale update
    /// when this returns `None`.
    #[must_use]
    pub fn effective_scale_factor(&self) -> Option<f64> {
        (self.scale_factor.is_finite() && self.scale_factor > 0.0).then_some(self.scale_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_positive_factor_is_effective() {
        let event = PinchEvent::new(Point::ZERO, 1.5, 2);
        assert_eq!(event.effective_scale_factor(), Some(1.5));
    }

    #[test]
    fn non_finite_factors_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let event = PinchEvent::new(Point::ZERO, bad, 2);
            assert_eq!(event.effective_scale_factor(), None);
        }
    }

    #[test]
    fn non_positive_factors_are_rejected() {
        for bad in [0.0, -1.0] {
            let event = PinchEvent::new(Point::ZERO, bad, 2);
            assert_eq!(event.effective_scale_factor(), None);
        }
    }
}
