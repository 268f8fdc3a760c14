// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot watching: explicit previous/current change observation.
//!
//! [`Watcher`] is the explicit-dispatch replacement for a reactive
//! framework's implicit dependency tracking. The owning view calls
//! [`Watcher::observe`] with a fresh snapshot at the end of every mutation
//! batch; the watcher compares it against the previous snapshot and reports
//! which channels changed. The very first observation has no prior snapshot
//! to compare against and only primes the watcher.

use crate::channel::ChannelMask;

/// A snapshot of watched cell values that can report its own diff.
pub trait Watched: Copy {
    /// Returns the mask of channels whose value differs from `previous`.
    fn changed(&self, previous: &Self) -> ChannelMask;
}

/// The outcome of one [`Watcher::observe`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation<S> {
    /// First observation; the snapshot was primed and nothing fired.
    First,
    /// The snapshot is identical to the previous one.
    Unchanged,
    /// At least one watched channel changed since the previous snapshot.
    Changed {
        /// The snapshot from the previous observation.
        previous: S,
        /// The channels whose value changed.
        channels: ChannelMask,
    },
}

/// Compares successive snapshots of watched state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Watcher<S> {
    previous: Option<S>,
}

impl<S: Watched> Watcher<S> {
    /// Creates a watcher with no primed snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Records `current` and reports how it differs from the last observation.
    pub fn observe(&mut self, current: S) -> Observation<S> {
        let outcome = match self.previous {
            None => Observation::First,
            Some(previous) => {
                let channels = current.changed(&previous);
                if channels.is_empty() {
                    Observation::Unchanged
                } else {
                    Observation::Changed { previous, channels }
                }
            }
        };
        self.previous = Some(current);
        outcome
    }
}
