// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legal displacement ranges for keeping scaled content in view.

use kurbo::{Size, Vec2};

/// An inclusive `[min, max]` range of legal displacement along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Smallest legal displacement.
    pub min: f64,
    /// Largest legal displacement.
    pub max: f64,
}

impl AxisRange {
    /// Builds the range between `point` and zero, whichever order they fall
    /// in. `min <= max` holds by construction.
    #[must_use]
    pub fn spanning_zero(point: f64) -> Self {
        Self {
            min: point.min(0.0),
            max: point.max(0.0),
        }
    }

    /// Returns the range shifted by `amount` on both ends.
    #[must_use]
    pub fn shifted_by(self, amount: f64) -> Self {
        Self {
            min: self.min + amount,
            max: self.max + amount,
        }
    }

    /// Clamps `value` into this range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The legal cumulative-displacement ranges per axis.
///
/// Where the scaled content overflows the container, the range is
/// `[-(overflow), 0]`: the content may be dragged within the overflow but
/// never far enough to open a gap. Where the content fits inside the
/// container, the range is `[0, slack]`: the content may sit anywhere that
/// keeps it fully visible. Zero-sized content or container degenerate to
/// ranges containing only positions with no visible gap, never to an error —
/// the formulas are division-free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edges {
    /// Legal displacement along x.
    pub x: AxisRange,
    /// Legal displacement along y.
    pub y: AxisRange,
}

impl Edges {
    /// Computes the legal ranges for `layout` rendered at `scale` inside
    /// `container`.
    #[must_use]
    pub fn compute(layout: Size, scale: f64, container: Size) -> Self {
        let point_x = -(layout.width * scale - container.width);
        let point_y = -(layout.height * scale - container.height);
        Self {
            x: AxisRange::spanning_zero(point_x),
            y: AxisRange::spanning_zero(point_y),
        }
    }

    /// Clamps an in-flight `translation` so that the cumulative displacement
    /// (`offset + translation`) stays within these edges.
    #[must_use]
    pub fn clamp_translation(&self, translation: Vec2, offset: Vec2) -> Vec2 {
        Vec2::new(
            self.x.shifted_by(-offset.x).clamp(translation.x),
            self.y.shifted_by(-offset.y).clamp(translation.y),
        )
    }
}
