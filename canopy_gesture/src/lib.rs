// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Gesture: pan/pinch event contract and gesture phase tracking.
//!
//! This crate defines the boundary between an embedding host's gesture
//! recognizers and Canopy's transform engine. It does **not** perform touch
//! capture or gesture recognition. Instead, the host translates its
//! recognizer callbacks into [`PanEvent`] / [`PinchEvent`] payloads and the
//! engine consumes them, using [`PhaseTracker`] to arbitrate which stream
//! currently owns the transform.
//!
//! ## Event contract
//!
//! - Pan updates carry the *absolute* translation since pan-start (not an
//!   incremental delta) plus the active pointer count. Multi-touch averaging
//!   is the recognizer's responsibility.
//! - Pinch events carry the focal coordinate, the per-event scale factor,
//!   and the pointer count. [`PinchEvent::effective_scale_factor`] sanitizes
//!   non-finite or non-positive factors so a misbehaving source degrades to
//!   a no-op scale update rather than corrupting state.
//!
//! ## Race semantics
//!
//! Both streams stay subscribed for the whole touch sequence; exclusivity is
//! claimed at the *move* granularity. A pinch claims the transform the moment
//! a change event with two pointers arrives, and pan updates are suppressed —
//! not canceled — until the pinch finalizes:
//!
//! ```rust
//! use canopy_gesture::PhaseTracker;
//!
//! let mut phases = PhaseTracker::new();
//! phases.pan_began();
//! assert!(phases.allows_pan(1));
//!
//! // A second finger lands; the pinch stream claims the transform.
//! phases.pinch_began();
//! assert!(phases.pinch_update(2));
//! assert!(!phases.allows_pan(1));
//!
//! // The pinch ends; single-pointer pan updates flow again.
//! assert!(phases.pinch_ended());
//! assert!(phases.allows_pan(1));
//! ```
//!
//! Recognizer cancellation carries no special semantics: route cancel into
//! the same end/finalize paths.
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod phase;

pub use event::{PanEvent, PinchEvent};
pub use phase::{GesturePhase, PhaseTracker};
