// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composing the rendered transform from committed state.

use kurbo::{Affine, Rect, Size, Vec2};

/// The four-component transform applied to the content each frame.
///
/// Hosts that take per-component transforms apply a uniform `scale`
/// (x-scale = y-scale) and the `translation` (x/y translate); hosts that
/// take a matrix use [`TransformParts::affine`].
///
/// The composition follows the center-pivot recipe — translate the content
/// so its center sits at the origin, scale uniformly, translate back, then
/// apply the net displacement. For a host whose transform origin is the
/// content center (the convention this engine targets), the pivot terms
/// cancel against the host origin and the net placement anchors at the
/// content's minimum corner: a content-local point `p` lands at
/// `scale * p + translation`. The edge model in [`crate::Edges`] is exact
/// for that placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformParts {
    /// Uniform render scale.
    pub scale: f64,
    /// Net displacement (committed offset plus in-flight translation).
    pub translation: Vec2,
}

impl TransformParts {
    /// Returns the transform as an affine matrix mapping content-local
    /// coordinates into container coordinates.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Returns the rectangle the content occupies in container coordinates.
    #[must_use]
    pub fn content_frame(&self, layout: Size) -> Rect {
        Rect::from_origin_size(self.translation.to_point(), layout * self.scale)
    }
}
