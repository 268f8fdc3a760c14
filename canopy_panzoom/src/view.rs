// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bounded pan/pinch view engine.

use canopy_cells::{
    CellChannel, ChannelMask, Observation, ScalarCell, Transition, VectorCell, Watched, Watcher,
};
use canopy_gesture::{GesturePhase, PanEvent, PhaseTracker, PinchEvent};
use kurbo::{Affine, Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::bounds::Edges;
use crate::config::PanPinchConfig;
use crate::transform::TransformParts;

const TRANSLATION: CellChannel = CellChannel::new(0);
const SCALE: CellChannel = CellChannel::new(1);
const OFFSET: CellChannel = CellChannel::new(2);
const PINCHING: CellChannel = CellChannel::new(3);
const RESETTING: CellChannel = CellChannel::new(4);

/// The cells the boundary reaction watches, captured at each commit.
#[derive(Clone, Copy, Debug)]
struct BoundsSnapshot {
    translation: Vec2,
    scale: f64,
    offset: Vec2,
    pinching: bool,
    resetting: bool,
}

impl Watched for BoundsSnapshot {
    fn changed(&self, previous: &Self) -> ChannelMask {
        let mut mask = ChannelMask::empty();
        if self.translation != previous.translation {
            mask.insert(TRANSLATION);
        }
        if self.scale != previous.scale {
            mask.insert(SCALE);
        }
        if self.offset != previous.offset {
            mask.insert(OFFSET);
        }
        if self.pinching != previous.pinching {
            mask.insert(PINCHING);
        }
        if self.resetting != previous.resetting {
            mask.insert(RESETTING);
        }
        mask
    }
}

/// One eased write issued by the engine, tagged by the cell it targets.
///
/// Drained by the embedding host once per frame (see
/// [`PanPinchView::drain_transitions`]) and fed to its tweening service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellTransition {
    /// The render scale is settling (post-pinch clamp or reset).
    Scale(Transition<f64>),
    /// The gesture-boundary scale snapshot is settling (reset only).
    LastScale(Transition<f64>),
    /// The in-flight translation is settling (boundary correction or reset).
    Translation(Transition<Vec2>),
    /// The committed offset is settling (reset only).
    Offset(Transition<Vec2>),
    /// The adjusted focal point is settling (reset only).
    AdjustedFocal(Transition<Vec2>),
    /// The pinch origin is settling (reset only).
    Origin(Transition<Vec2>),
}

/// Snapshot of the full engine state for debugging and inspection.
#[derive(Clone, Copy, Debug)]
pub struct PanPinchDebugInfo {
    /// Current render scale (logical value).
    pub scale: f64,
    /// Scale captured at the last gesture boundary.
    pub last_scale: f64,
    /// In-flight displacement of the current gesture.
    pub translation: Vec2,
    /// Committed cumulative displacement of completed gestures.
    pub offset: Vec2,
    /// Adjusted focal point of the current/last pinch.
    pub adjusted_focal: Vec2,
    /// Focal anchor captured at pinch begin.
    pub origin: Vec2,
    /// Content layout the transform is composed against.
    pub layout: Size,
    /// Current gesture phase.
    pub phase: GesturePhase,
    /// `true` while a two-pointer pinch owns the transform.
    pub is_pinching: bool,
    /// `true` between a reset and its consumption by the boundary reaction.
    pub is_resetting: bool,
    /// Legal displacement ranges at the current scale.
    pub edges: Edges,
}

/// Bounded pan/pinch transform engine.
///
/// `PanPinchView` owns the state of one pannable, pinch-zoomable content
/// region inside a fixed container. The embedding host feeds it recognizer
/// events ([`begin_pan`](Self::begin_pan) / [`update_pan`](Self::update_pan)
/// / [`begin_pinch`](Self::begin_pinch) / ...), reads the rendered transform
/// via [`parts`](Self::parts) or [`transform`](Self::transform), and drains
/// eased writes via [`drain_transitions`](Self::drain_transitions) to drive
/// its own tweening engine.
///
/// Bound enforcement is reactive and eventual: a pan may overshoot the legal
/// range instantaneously, and the engine answers each commit with an eased
/// corrective write that pulls the displacement back inside, producing an
/// elastic-edge feel. While a pinch owns the transform the correction is
/// suspended, and scale may transiently exceed the configured maximum; both
/// are settled when the pinch finalizes.
///
/// ```rust
/// use canopy_gesture::PanEvent;
/// use canopy_panzoom::{PanPinchConfig, PanPinchView};
/// use kurbo::{Size, Vec2};
///
/// let config = PanPinchConfig::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0));
/// let mut view = PanPinchView::new(config);
///
/// view.begin_pan();
/// view.update_pan(&PanEvent::new(Vec2::new(-50.0, 0.0), 1));
/// view.end_pan();
///
/// let parts = view.parts();
/// assert_eq!(parts.translation, Vec2::new(-50.0, 0.0));
///
/// // Feed eased writes (boundary corrections, resets) to the host's tweener.
/// let _ = view.drain_transitions();
/// ```
#[derive(Clone, Debug)]
pub struct PanPinchView {
    config: PanPinchConfig,
    scale: ScalarCell,
    last_scale: ScalarCell,
    translation: VectorCell,
    offset: VectorCell,
    adjusted_focal: VectorCell,
    origin: VectorCell,
    layout: Size,
    phases: PhaseTracker,
    is_resetting: bool,
    watcher: Watcher<BoundsSnapshot>,
}

impl PanPinchView {
    /// Creates an engine in its initial state for the given configuration.
    ///
    /// Scale limits are normalized so that `min_scale <= max_scale`. The
    /// layout starts equal to the configured content dimensions and every
    /// displacement cell starts at zero.
    #[must_use]
    pub fn new(mut config: PanPinchConfig) -> Self {
        if config.min_scale > config.max_scale {
            core::mem::swap(&mut config.min_scale, &mut config.max_scale);
        }
        let mut view = Self {
            scale: ScalarCell::new(config.initial_scale),
            last_scale: ScalarCell::new(config.initial_scale),
            translation: VectorCell::new(Vec2::ZERO),
            offset: VectorCell::new(Vec2::ZERO),
            adjusted_focal: VectorCell::new(Vec2::ZERO),
            origin: VectorCell::new(Vec2::ZERO),
            layout: config.content,
            phases: PhaseTracker::new(),
            is_resetting: false,
            watcher: Watcher::new(),
            config,
        };
        // Prime the watcher so the first real commit has a comparison base.
        view.commit();
        view
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &PanPinchConfig {
        &self.config
    }

    /// Returns the current render scale (logical value).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    /// Returns the in-flight displacement of the current gesture.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation.get()
    }

    /// Returns the committed displacement of completed gestures.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset.get()
    }

    /// Returns the content layout the transform is composed against.
    #[must_use]
    pub fn layout(&self) -> Size {
        self.layout
    }

    /// Returns `true` while a two-pointer pinch owns the transform.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.phases.is_pinching()
    }

    /// Returns `true` between a reset and its consumption by the boundary
    /// reaction.
    #[must_use]
    pub fn is_resetting(&self) -> bool {
        self.is_resetting
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phases.phase()
    }

    /// Returns the four-component transform to apply to the content.
    #[must_use]
    pub fn parts(&self) -> TransformParts {
        TransformParts {
            scale: self.scale.get(),
            translation: self.offset.get() + self.translation.get(),
        }
    }

    /// Returns the rendered transform as an affine matrix.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.parts().affine()
    }

    /// Returns the rectangle the content occupies in container coordinates.
    #[must_use]
    pub fn content_frame(&self) -> Rect {
        self.parts().content_frame(self.layout)
    }

    /// Returns the legal displacement ranges at the current scale.
    #[must_use]
    pub fn edges(&self) -> Edges {
        Edges::compute(self.layout, self.scale.get(), self.config.container)
    }

    /// Snapshot of the full engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanPinchDebugInfo {
        PanPinchDebugInfo {
            scale: self.scale.get(),
            last_scale: self.last_scale.get(),
            translation: self.translation.get(),
            offset: self.offset.get(),
            adjusted_focal: self.adjusted_focal.get(),
            origin: self.origin.get(),
            layout: self.layout,
            phase: self.phases.phase(),
            is_pinching: self.phases.is_pinching(),
            is_resetting: self.is_resetting,
            edges: self.edges(),
        }
    }

    /// Updates the container dimensions, resetting the view if they changed.
    pub fn set_container_dimensions(&mut self, container: Size) {
        if self.config.container == container {
            return;
        }
        self.config.container = container;
        self.reset();
    }

    /// Updates the content dimensions, resetting the view if they changed.
    pub fn set_content_dimensions(&mut self, content: Size) {
        if self.config.content == content {
            return;
        }
        self.config.content = content;
        self.reset();
    }

    /// A pan gesture started.
    pub fn begin_pan(&mut self) {
        self.phases.pan_began();
        self.fold_translation();
        self.commit();
    }

    /// A pan gesture delivered an update.
    ///
    /// The update drives translation only when exactly one pointer is down
    /// and no pinch owns the transform; otherwise it is ignored.
    pub fn update_pan(&mut self, event: &PanEvent) {
        if self.phases.allows_pan(event.pointers) {
            self.translation.set(event.translation);
        }
        self.commit();
    }

    /// The pan gesture ended. Cancellation is handled identically.
    pub fn end_pan(&mut self) {
        self.phases.pan_ended();
        self.commit();
    }

    /// A pinch gesture began (possibly still one pointer down).
    ///
    /// Folds the in-flight translation into the committed offset, captures
    /// the focal anchor when focal adjustment is enabled, and snapshots the
    /// current scale as the reference for focal-relative deltas.
    pub fn begin_pinch(&mut self, event: &PinchEvent) {
        self.phases.pinch_began();
        self.fold_translation();

        if self.config.adjust_focal {
            self.set_adjusted_focal(event.focal);
            self.origin.set(self.adjusted_focal.get());
        }
        self.last_scale.set(self.scale.get());
        self.commit();
    }

    /// A pinch gesture delivered a change event.
    ///
    /// Ignored below two pointers. Applies the scale factor with the lower
    /// bound enforced live (the upper bound is deferred to finalize so
    /// zoom-in feels unclamped while in progress), and when focal adjustment
    /// is enabled recomputes the translation that keeps the focal anchor
    /// stationary as scale changes.
    pub fn update_pinch(&mut self, event: &PinchEvent) {
        if !self.phases.pinch_update(event.pointers) {
            self.commit();
            return;
        }

        if let Some(factor) = event.effective_scale_factor() {
            let next = (self.scale.get() * factor).max(self.config.min_scale);
            self.scale.set(next);
        }

        if self.config.adjust_focal {
            self.set_adjusted_focal(event.focal);
            let ratio = -self.scale.get() / self.last_scale.get();
            self.translation
                .set(self.adjusted_focal.get() + self.origin.get() * ratio);
        }
        self.commit();
    }

    /// The pinch gesture finalized.
    ///
    /// If a two-pointer pinch was in progress, releases the transform,
    /// recaptures the boundary scale, and — only now — settles scale into
    /// the configured range with an eased write if it escaped during the
    /// pinch.
    pub fn finalize_pinch(&mut self) {
        if self.phases.pinch_ended() {
            self.last_scale.set(self.scale.get());

            let last = self.last_scale.get();
            if last > self.config.max_scale || last < self.config.min_scale {
                let bounded = self
                    .scale
                    .get()
                    .clamp(self.config.min_scale, self.config.max_scale);
                self.scale.ease_to(bounded);
            }
        }
        self.commit();
    }

    /// The pinch gesture was canceled mid-stream (for example, touch lost).
    ///
    /// Treated identically to [`finalize_pinch`](Self::finalize_pinch) so
    /// committed state stays consistent.
    pub fn cancel_pinch(&mut self) {
        self.finalize_pinch();
    }

    /// Animates the whole state back to its initial configuration.
    ///
    /// Every scale-like cell eases toward `initial_scale` and every vector
    /// cell toward zero; the layout snaps (not eased) to the content
    /// dimensions. Resets are idempotent, and one issued while another is in
    /// flight simply supersedes it.
    pub fn reset(&mut self) {
        self.is_resetting = true;

        self.scale.ease_to(self.config.initial_scale);
        self.last_scale.ease_to(self.config.initial_scale);
        self.translation.ease_to(Vec2::ZERO);
        self.offset.ease_to(Vec2::ZERO);
        self.adjusted_focal.ease_to(Vec2::ZERO);
        self.origin.ease_to(Vec2::ZERO);

        self.layout = self.config.content;
        self.phases.interrupt();
        self.commit();
    }

    /// Drains the eased writes issued since the last drain.
    ///
    /// The host feeds each record to its tweening service; the engine's
    /// logical state already reflects the targets.
    pub fn drain_transitions(&mut self) -> SmallVec<[CellTransition; 6]> {
        let mut out = SmallVec::new();
        if let Some(t) = self.scale.take_transition() {
            out.push(CellTransition::Scale(t));
        }
        if let Some(t) = self.last_scale.take_transition() {
            out.push(CellTransition::LastScale(t));
        }
        if let Some(t) = self.translation.take_transition() {
            out.push(CellTransition::Translation(t));
        }
        if let Some(t) = self.offset.take_transition() {
            out.push(CellTransition::Offset(t));
        }
        if let Some(t) = self.adjusted_focal.take_transition() {
            out.push(CellTransition::AdjustedFocal(t));
        }
        if let Some(t) = self.origin.take_transition() {
            out.push(CellTransition::Origin(t));
        }
        out
    }

    /// Folds the in-flight translation into the committed offset so that
    /// translation always represents only the gesture currently in flight.
    fn fold_translation(&mut self) {
        self.offset.set(self.offset.get() + self.translation.get());
        self.translation.set(Vec2::ZERO);
    }

    /// Recomputes the focal point relative to the content center, accounting
    /// for the committed offset.
    fn set_adjusted_focal(&mut self, focal: Point) {
        let center = self.layout.to_vec2() * 0.5;
        self.adjusted_focal
            .set(focal.to_vec2() - (center + self.offset.get()));
    }

    fn bounds_snapshot(&self) -> BoundsSnapshot {
        BoundsSnapshot {
            translation: self.translation.get(),
            scale: self.scale.get(),
            offset: self.offset.get(),
            pinching: self.phases.is_pinching(),
            resetting: self.is_resetting,
        }
    }

    /// Ends a mutation batch: observes the watched cells and runs the
    /// boundary reaction until the state is stable.
    ///
    /// While a pinch owns the transform the reaction does nothing (the
    /// content may legally escape the strict bounds until finalize). A
    /// pending reset consumes its flag and skips one evaluation so the
    /// reaction does not fight the reset animation. Otherwise the in-flight
    /// translation is eased back inside the legal edges.
    fn commit(&mut self) {
        loop {
            let snapshot = self.bounds_snapshot();
            match self.watcher.observe(snapshot) {
                Observation::First | Observation::Unchanged => break,
                Observation::Changed { .. } => {
                    if self.phases.is_pinching() {
                        break;
                    }
                    if self.is_resetting {
                        self.is_resetting = false;
                        continue;
                    }
                    let bounded = self
                        .edges()
                        .clamp_translation(self.translation.get(), self.offset.get());
                    if bounded == self.translation.get() {
                        break;
                    }
                    self.translation.ease_to(bounded);
                    // Re-observe so the corrective write becomes the new base.
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overflow_view() -> PanPinchView {
        PanPinchView::new(PanPinchConfig::new(
            Size::new(200.0, 200.0),
            Size::new(400.0, 400.0),
        ))
    }

    fn assert_near(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn initial_state_renders_at_initial_scale() {
        let view = PanPinchView::new(
            PanPinchConfig::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0))
                .with_initial_scale(2.0),
        );
        let parts = view.parts();
        assert_eq!(parts.scale, 2.0);
        assert_eq!(parts.translation, Vec2::ZERO);
        assert!(!view.is_pinching());
        assert!(!view.is_resetting());
    }

    #[test]
    fn pan_within_overflow_sticks_without_correction() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-50.0, -40.0), 1));
        view.end_pan();

        assert_eq!(view.translation(), Vec2::new(-50.0, -40.0));
        assert!(view.drain_transitions().is_empty());
    }

    #[test]
    fn pan_overshoot_settles_back_to_edge() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(50.0, 0.0), 1));

        // The legal range along x is [-200, 0]; the overshoot settles to 0
        // with an eased write the host tweens through.
        assert_eq!(view.translation(), Vec2::ZERO);
        assert_eq!(view.offset(), Vec2::ZERO);
        let transitions = view.drain_transitions();
        assert_eq!(
            transitions.as_slice(),
            [CellTransition::Translation(Transition {
                from: Vec2::new(50.0, 0.0),
                to: Vec2::ZERO,
            })]
        );
    }

    #[test]
    fn multi_pointer_pan_updates_are_ignored() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-30.0, 0.0), 2));
        assert_eq!(view.translation(), Vec2::ZERO);
    }

    #[test]
    fn gesture_start_folds_translation_into_offset() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-50.0, -40.0), 1));
        view.end_pan();

        view.begin_pan();
        assert_eq!(view.offset(), Vec2::new(-50.0, -40.0));
        assert_eq!(view.translation(), Vec2::ZERO);
        // Net displacement is unchanged by the fold.
        assert_eq!(view.parts().translation, Vec2::new(-50.0, -40.0));
    }

    #[test]
    fn pan_is_suppressed_while_pinching() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 1.5, 2));
        assert!(view.is_pinching());

        view.update_pan(&PanEvent::new(Vec2::new(-30.0, 0.0), 1));
        assert_eq!(view.translation(), Vec2::ZERO);

        // Once the pinch finalizes, single-pointer pan updates flow again.
        view.finalize_pinch();
        view.update_pan(&PanEvent::new(Vec2::new(-30.0, 0.0), 1));
        assert_eq!(view.translation(), Vec2::new(-30.0, 0.0));
    }

    #[test]
    fn pinch_within_bounds_keeps_final_scale() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 1.5, 2));
        assert_near(view.scale(), 1.5);
        view.update_pinch(&PinchEvent::new(Point::ZERO, 1.2, 2));
        assert_near(view.scale(), 1.8);

        view.finalize_pinch();
        assert!(!view.is_pinching());
        assert_near(view.scale(), 1.8);
        assert_near(view.debug_info().last_scale, 1.8);
        assert!(view.drain_transitions().is_empty());
    }

    #[test]
    fn pinch_overshoot_settles_to_max_scale_at_finalize() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 5.0, 2));
        // The upper bound is not enforced while the pinch is in flight.
        assert_near(view.scale(), 5.0);

        view.finalize_pinch();
        assert_near(view.scale(), 4.0);
        // The boundary snapshot keeps the escaped value until the next
        // pinch begin recaptures it.
        assert_near(view.debug_info().last_scale, 5.0);

        let transitions = view.drain_transitions();
        assert_eq!(
            transitions.as_slice(),
            [CellTransition::Scale(Transition { from: 5.0, to: 4.0 })]
        );
    }

    #[test]
    fn pinch_lower_bound_is_enforced_live() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 0.1, 2));
        assert_near(view.scale(), 0.5);
    }

    #[test]
    fn single_pointer_pinch_updates_are_ignored() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 1.5, 1));
        assert!(!view.is_pinching());
        assert_near(view.scale(), 1.0);
    }

    #[test]
    fn pinch_end_without_activation_changes_nothing() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 1));
        view.finalize_pinch();
        assert_near(view.scale(), 1.0);
        assert!(view.drain_transitions().is_empty());
    }

    #[test]
    fn non_finite_scale_factor_is_a_no_op_scale_update() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, f64::NAN, 2));
        assert!(view.is_pinching());
        assert_near(view.scale(), 1.0);

        view.update_pinch(&PinchEvent::new(Point::ZERO, 0.0, 2));
        assert_near(view.scale(), 1.0);

        view.finalize_pinch();
        assert!(view.drain_transitions().is_empty());
    }

    #[test]
    fn cancel_mid_pinch_behaves_like_finalize() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 5.0, 2));
        view.cancel_pinch();

        assert!(!view.is_pinching());
        assert_near(view.scale(), 4.0);
    }

    #[test]
    fn stationary_focal_point_anchors_the_zoom() {
        let mut view = PanPinchView::new(
            PanPinchConfig::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0))
                .with_focal_adjustment(true),
        );
        let focal = Point::new(120.0, 80.0);
        // The anchor the focal math holds stationary, in container space.
        let anchor = Point::new(
            focal.x - view.layout().width / 2.0,
            focal.y - view.layout().height / 2.0,
        );

        view.begin_pinch(&PinchEvent::new(focal, 1.0, 2));
        let before = view.transform() * anchor;

        view.update_pinch(&PinchEvent::new(focal, 1.5, 2));
        let mid = view.transform() * anchor;
        assert_near(mid.x, before.x);
        assert_near(mid.y, before.y);

        view.update_pinch(&PinchEvent::new(focal, 1.2, 2));
        let after = view.transform() * anchor;
        assert_near(after.x, before.x);
        assert_near(after.y, before.y);
    }

    #[test]
    fn focal_translation_matches_anchor_formula() {
        let mut view = PanPinchView::new(
            PanPinchConfig::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0))
                .with_focal_adjustment(true),
        );
        let focal = Point::new(120.0, 80.0);
        view.begin_pinch(&PinchEvent::new(focal, 1.0, 2));
        // adjusted focal = focal - (layout/2 + offset) = (-80, -120)
        assert_eq!(view.debug_info().origin, Vec2::new(-80.0, -120.0));

        view.update_pinch(&PinchEvent::new(focal, 1.5, 2));
        // translation = focal' + (-scale/last_scale) * origin
        assert_eq!(view.translation(), Vec2::new(40.0, 60.0));
    }

    #[test]
    fn overflow_containment_holds_after_settling() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-300.0, -250.0), 1));
        view.end_pan();

        assert_eq!(view.translation(), Vec2::new(-200.0, -200.0));
        let frame = view.content_frame();
        let container = view.config().container;
        assert!(frame.x0 <= 0.0 && frame.x1 >= container.width);
        assert!(frame.y0 <= 0.0 && frame.y1 >= container.height);
    }

    #[test]
    fn undersized_content_stays_fully_visible() {
        let mut view = PanPinchView::new(PanPinchConfig::new(
            Size::new(200.0, 200.0),
            Size::new(100.0, 100.0),
        ));
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-30.0, 40.0), 1));
        view.end_pan();

        // Dragging out the left edge is corrected; sliding within the slack
        // is legal.
        assert_eq!(view.translation(), Vec2::new(0.0, 40.0));
        let frame = view.content_frame();
        assert!(frame.x0 >= 0.0 && frame.x1 <= 200.0);
        assert!(frame.y0 >= 0.0 && frame.y1 <= 200.0);
    }

    #[test]
    fn dimension_change_resets_everything() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-50.0, -40.0), 1));
        view.end_pan();
        let _ = view.drain_transitions();

        view.set_content_dimensions(Size::new(300.0, 300.0));

        let info = view.debug_info();
        assert_eq!(info.layout, Size::new(300.0, 300.0));
        assert_eq!(info.translation, Vec2::ZERO);
        assert_eq!(info.offset, Vec2::ZERO);
        assert_near(info.scale, 1.0);
        assert_near(info.last_scale, 1.0);
        assert!(!info.is_pinching);
        assert!(!info.is_resetting);

        // Every animated cell issued an eased write toward its initial value.
        assert_eq!(view.drain_transitions().len(), 6);
    }

    #[test]
    fn reset_is_idempotent_across_rapid_dimension_changes() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-120.0, 0.0), 1));
        view.end_pan();

        view.set_container_dimensions(Size::new(100.0, 100.0));
        view.set_container_dimensions(Size::new(150.0, 150.0));

        let info = view.debug_info();
        assert_eq!(info.translation, Vec2::ZERO);
        assert_eq!(info.offset, Vec2::ZERO);
        assert_near(info.scale, 1.0);
        assert!(!info.is_resetting);
    }

    #[test]
    fn unchanged_dimensions_do_not_reset() {
        let mut view = overflow_view();
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(-50.0, 0.0), 1));
        view.end_pan();

        view.set_container_dimensions(Size::new(200.0, 200.0));
        view.set_content_dimensions(Size::new(400.0, 400.0));
        assert_eq!(view.translation(), Vec2::new(-50.0, 0.0));
        assert!(view.drain_transitions().is_empty());
    }

    #[test]
    fn reset_mid_pinch_releases_the_claim() {
        let mut view = overflow_view();
        view.begin_pinch(&PinchEvent::new(Point::ZERO, 1.0, 2));
        view.update_pinch(&PinchEvent::new(Point::ZERO, 2.0, 2));
        assert!(view.is_pinching());

        view.set_content_dimensions(Size::new(500.0, 500.0));
        assert!(!view.is_pinching());
        assert_near(view.scale(), 1.0);
    }

    #[test]
    fn zero_dimensions_degrade_to_pinned_content() {
        let mut view = PanPinchView::new(PanPinchConfig::default());
        view.begin_pan();
        view.update_pan(&PanEvent::new(Vec2::new(10.0, 5.0), 1));
        view.end_pan();
        assert_eq!(view.translation(), Vec2::ZERO);
    }

    #[test]
    fn reversed_scale_limits_are_normalized() {
        let view = PanPinchView::new(
            PanPinchConfig::new(Size::new(200.0, 200.0), Size::new(400.0, 400.0))
                .with_scale_limits(4.0, 0.5),
        );
        assert_eq!(view.config().min_scale, 0.5);
        assert_eq!(view.config().max_scale, 4.0);
    }
}
