// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tileboard Layout: drag constraint solving and resize cascade resolution.
//!
//! This crate is the write side of the engine. The host feeds it one call
//! per UI event and it mutates the caller-owned [`TileArena`] and
//! [`CanvasBounds`] to a collision-free layout:
//!
//! - [`resolve_drag_step`] — one pointer-move step of a dragged tile.
//!   Snaps the proposed position against the first colliding obstacle,
//!   clamps to the canvas, and reverts the step entirely if a collision
//!   survives. Repositions immediately; no transition task is produced.
//! - [`resolve_resize`] — a size-level change. A growth runs the cascade:
//!   colliding neighbors are pushed diagonally outward pass by pass until
//!   the layout settles, growing the canvas as tiles spill past its edges.
//!   Returns the [`TransitionTask`]s the host should animate.
//!
//! Both solvers are synchronous and single-threaded; they run to completion
//! inside the call and assume exclusive access to the tile set (the host
//! serializes its event queue). Stale [`TileId`]s are skipped, never fatal.
//! The one genuine failure mode is a cascade that fails to settle within
//! [`cascade::MAX_CASCADE_PASSES`], surfaced as
//! [`LayoutError::CascadeUnresolved`].
//!
//! ## Guarantees
//!
//! After any completed solver call, no two collidable tile boxes intersect.
//! Canvas width and height never decrease. A drag step either lands
//! collision-free or returns the exact position the tile held before the
//! step.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`TileArena`]: tileboard_arena::TileArena
//! [`CanvasBounds`]: tileboard_canvas::CanvasBounds
//! [`TileId`]: tileboard_arena::TileId

#![no_std]

extern crate alloc;

pub mod cascade;
pub mod drag;
pub mod transition;

pub use cascade::{LayoutError, SizePreset, resolve_resize, resolve_resize_preset};
pub use drag::resolve_drag_step;
pub use transition::{Easing, TRANSITION_DURATION, TransitionChange, TransitionTask};
