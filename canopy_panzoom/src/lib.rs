// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Pan/Zoom: a bounded pan/pinch transform engine.
//!
//! This crate provides a small, headless model of a content region rendered
//! inside a fixed-size container that a user can drag and pinch-zoom with
//! natural bounded behavior. It combines the two racing gesture streams into
//! a single consistent transform, keeps pinch scaling anchored to the touch
//! focal point, and reactively eases the displacement back inside legal
//! bounds once a gesture settles.
//!
//! It does **not** own touch recognition, rendering, or interpolation.
//! Callers are expected to:
//! - Run their own pan/pinch recognizers and translate callbacks into
//!   [`PanEvent`](canopy_gesture::PanEvent) /
//!   [`PinchEvent`](canopy_gesture::PinchEvent) payloads.
//! - Read the rendered transform each frame via [`PanPinchView::parts`] or
//!   [`PanPinchView::transform`].
//! - Drain eased writes via [`PanPinchView::drain_transitions`] and drive
//!   them with their own tweening service; the engine's logical state always
//!   reflects the write targets.
//!
//! ## Minimal example
//!
//! ```rust
//! use canopy_gesture::{PanEvent, PinchEvent};
//! use canopy_panzoom::{PanPinchConfig, PanPinchView};
//! use kurbo::{Point, Size, Vec2};
//!
//! let config = PanPinchConfig::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0));
//! let mut view = PanPinchView::new(config);
//!
//! // Drag the content 50 device units left.
//! view.begin_pan();
//! view.update_pan(&PanEvent::new(Vec2::new(-50.0, 0.0), 1));
//! view.end_pan();
//!
//! // Pinch-zoom in; the upper scale bound settles at finalize.
//! view.begin_pinch(&PinchEvent::new(Point::new(100.0, 100.0), 1.0, 2));
//! view.update_pinch(&PinchEvent::new(Point::new(100.0, 100.0), 1.5, 2));
//! view.finalize_pinch();
//!
//! // Apply the transform to the content.
//! let parts = view.parts();
//! assert_eq!(parts.scale, 1.5);
//!
//! // Feed corrective/settling writes to the host's animation service.
//! for transition in view.drain_transitions() {
//!     // tween(transition);
//!     let _ = transition;
//! }
//! ```
//!
//! ## Design notes
//!
//! - Bound enforcement is reactive and eventual, not a hard constraint
//!   during the gesture: panning may overshoot instantaneously and the
//!   engine answers the commit with an eased corrective write, producing an
//!   elastic-edge feel.
//! - The lower scale bound is enforced live during a pinch; the upper bound
//!   only when the pinch finalizes, so zoom-in feels unclamped in progress.
//! - Changing the container or content dimensions resets the whole state to
//!   its initial configuration with eased writes.
//! - All state is owned by one [`PanPinchView`] per content region and
//!   mutated through `&mut self`; gesture callbacks and boundary reactions
//!   are serialized on one update timeline.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod config;
mod transform;
mod view;

pub use bounds::{AxisRange, Edges};
pub use config::PanPinchConfig;
pub use transform::TransformParts;
pub use view::{CellTransition, PanPinchDebugInfo, PanPinchView};
