// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tileboard Arena: the tile working set and collision index.
//!
//! The arena owns the live set of tiles for the duration of a layout solve.
//! Tiles are addressed through generational [`TileId`] handles: removing a
//! tile frees its slot and bumps the slot's generation, so handles held by
//! the host after a removal read as stale instead of aliasing a newer tile.
//!
//! - [`Tile`]: position, size level, variant kind, and flags. The bounding
//!   box is always a square of side `100 * size` ([`TILE_UNIT`]).
//! - [`TileArena`]: slot storage with insert/remove/liveness, plus the
//!   collision queries ([`TileArena::colliding`],
//!   [`TileArena::colliding_at`], [`TileArena::first_colliding_at`]).
//!
//! ## Collision semantics
//!
//! Queries are deterministic linear scans in slot order; at soundboard scale
//! (tens of tiles) no acceleration structure pays for itself. Overlap is
//! strict: boxes that merely share an edge do **not** collide, so tiles can
//! sit flush against each other — the layout solvers place them exactly
//! edge-to-edge.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod types;

pub use arena::{CollisionList, TileArena};
pub use types::{LONG_PRESS, TILE_UNIT, Tile, TileFlags, TileId, TileKind, TileMode, boxes_collide};
