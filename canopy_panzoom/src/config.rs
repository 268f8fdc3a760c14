// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Configuration for a [`PanPinchView`](crate::PanPinchView).
///
/// All fields have defaults; dimensions default to zero and are typically
/// supplied once layout is known (and updated through
/// [`PanPinchView::set_container_dimensions`](crate::PanPinchView::set_container_dimensions) /
/// [`PanPinchView::set_content_dimensions`](crate::PanPinchView::set_content_dimensions)
/// afterwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanPinchConfig {
    /// Dimensions of the container the content is rendered into.
    pub container: Size,
    /// Dimensions of the pannable/zoomable content.
    pub content: Size,
    /// Minimum scale, enforced live during a pinch.
    pub min_scale: f64,
    /// Maximum scale, enforced when a pinch finalizes.
    pub max_scale: f64,
    /// Scale at construction and after a reset.
    pub initial_scale: f64,
    /// Anchor pinch scaling to the touch focal point.
    pub adjust_focal: bool,
}

impl Default for PanPinchConfig {
    fn default() -> Self {
        Self {
            container: Size::ZERO,
            content: Size::ZERO,
            min_scale: 0.5,
            max_scale: 4.0,
            initial_scale: 1.0,
            adjust_focal: false,
        }
    }
}

impl PanPinchConfig {
    /// Creates a configuration for the given container and content sizes,
    /// with default scale limits.
    #[must_use]
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            container,
            content,
            ..Self::default()
        }
    }

    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets the scale used at construction and after a reset.
    #[must_use]
    pub fn with_initial_scale(mut self, initial_scale: f64) -> Self {
        self.initial_scale = initial_scale;
        self
    }

    /// Enables or disables focal-anchored pinch scaling.
    #[must_use]
    pub fn with_focal_adjustment(mut self, adjust_focal: bool) -> Self {
        self.adjust_focal = adjust_focal;
        self
    }
}
