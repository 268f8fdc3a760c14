// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State cells with snap and eased write modes.

use kurbo::Vec2;

/// The record of one eased write, consumed by the host's tweening service.
///
/// A transition is fire-and-forget: the issuing cell does not track its
/// progress, and a newer write to the same cell supersedes it. The host is
/// expected to interpolate from `from` to `to` with its own default duration
/// and curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition<T> {
    /// Logical value of the cell at the moment the eased write was issued.
    pub from: T,
    /// Write target; also the cell's logical value from this point on.
    pub to: T,
}

/// A single state slot with snap and eased write modes.
///
/// The cell's *logical* value — what [`AnimatedCell::get`] returns — is always
/// the most recent write target, never an in-flight interpolated value.
/// Interpolation is the render layer's concern; see [`Transition`].
#[derive(Clone, Copy, Debug)]
pub struct AnimatedCell<T> {
    value: T,
    transition: Option<Transition<T>>,
}

/// A scalar state cell.
pub type ScalarCell = AnimatedCell<f64>;

/// A 2D vector state cell.
pub type VectorCell = AnimatedCell<Vec2>;

impl<T: Copy> AnimatedCell<T> {
    /// Creates a cell holding `value`, with no transition pending.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            transition: None,
        }
    }

    /// Returns the cell's logical value (the latest write target).
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }

    /// Writes `value` immediately, canceling any in-flight transition.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.transition = None;
    }

    /// Writes `target` as an eased write.
    ///
    /// The logical value becomes `target` at once; a [`Transition`] from the
    /// previous logical value is recorded for the host to drain. Any earlier
    /// pending transition is superseded.
    pub fn ease_to(&mut self, target: T) {
        self.transition = Some(Transition {
            from: self.value,
            to: target,
        });
        self.value = target;
    }

    /// Returns the pending transition, if any, without consuming it.
    #[must_use]
    pub fn transition(&self) -> Option<Transition<T>> {
        self.transition
    }

    /// Consumes and returns the pending transition, if any.
    pub fn take_transition(&mut self) -> Option<Transition<T>> {
        self.transition.take()
    }

    /// Returns `true` while an eased write has not yet been drained.
    #[must_use]
    pub fn is_easing(&self) -> bool {
        self.transition.is_some()
    }
}
