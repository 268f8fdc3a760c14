// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Cells: animated state cells, change channels, and snapshot watching.
//!
//! This crate provides the state substrate for Canopy's gesture-driven view
//! engine. It models three small concerns:
//!
//! - [`AnimatedCell`]: a single state slot whose writes are either immediate
//!   (*snap*) or eased (*ease*). The cell's logical value is always the most
//!   recent write target; an eased write additionally records a fire-and-forget
//!   [`Transition`] for the embedding host's tweening service.
//! - [`CellChannel`] / [`ChannelMask`]: lightweight handles identifying which
//!   state slots changed during a mutation batch, collected into a compact
//!   bitset.
//! - [`Watcher`]: a previous/current snapshot comparator that re-evaluates
//!   observers after each commit, with the first observation priming the
//!   snapshot rather than firing.
//!
//! ## Target-value semantics
//!
//! Cells deliberately never interpolate. Business logic reasons in terms of
//! *target* state: the moment an eased write is issued, every subsequent read
//! observes the target, while the render layer alone consumes the recorded
//! [`Transition`] and drives the in-flight visual value with its own timing
//! engine. Starting a new write to a cell supersedes any in-flight transition.
//!
//! ```rust
//! use canopy_cells::ScalarCell;
//!
//! let mut scale = ScalarCell::new(1.0);
//! scale.ease_to(4.0);
//!
//! // Logic reads the target immediately.
//! assert_eq!(scale.get(), 4.0);
//!
//! // The render host drains the transition record exactly once.
//! let t = scale.take_transition().unwrap();
//! assert_eq!((t.from, t.to), (1.0, 4.0));
//! assert!(scale.take_transition().is_none());
//! ```
//!
//! ## Watching commits
//!
//! [`Watcher`] reproduces reactive-framework watcher semantics as an explicit
//! mechanism: the owner calls [`Watcher::observe`] with a fresh snapshot at
//! the end of each mutation batch and receives which [`ChannelMask`] of cells
//! changed, together with the previous snapshot.
//!
//! ```rust
//! use canopy_cells::{CellChannel, ChannelMask, Observation, Watched, Watcher};
//!
//! const SCALE: CellChannel = CellChannel::new(0);
//!
//! #[derive(Clone, Copy)]
//! struct Snap {
//!     scale: f64,
//! }
//!
//! impl Watched for Snap {
//!     fn changed(&self, previous: &Self) -> ChannelMask {
//!         let mut mask = ChannelMask::empty();
//!         if self.scale != previous.scale {
//!             mask.insert(SCALE);
//!         }
//!         mask
//!     }
//! }
//!
//! let mut watcher = Watcher::new();
//!
//! // The first observation only primes the snapshot.
//! assert!(matches!(watcher.observe(Snap { scale: 1.0 }), Observation::First));
//!
//! // Later observations report what changed.
//! match watcher.observe(Snap { scale: 2.0 }) {
//!     Observation::Changed { channels, .. } => assert!(channels.contains(SCALE)),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cell;
mod channel;
mod watch;

pub use cell::{AnimatedCell, ScalarCell, Transition, VectorCell};
pub use channel::{CellChannel, ChannelMask, ChannelMaskIter};
pub use watch::{Observation, Watched, Watcher};
