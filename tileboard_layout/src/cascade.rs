// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resize cascade resolver: push neighbors apart after a size increase.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Point;
use tileboard_arena::{TILE_UNIT, TileArena, TileFlags, TileId};
use tileboard_canvas::CanvasBounds;

use crate::transition::TransitionTask;

/// Hard cap on cascade passes.
///
/// A pass either displaces at least one tile (which then leaves the working
/// set for good) or ends the loop, so a set of `n` tiles settles in at most
/// `n + 1` passes. Reaching the cap therefore means a broken layout
/// invariant, and the resolver reports it instead of spinning.
pub const MAX_CASCADE_PASSES: usize = 256;

/// Errors surfaced by the layout solvers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LayoutError {
    /// The resize cascade did not settle within [`MAX_CASCADE_PASSES`].
    CascadeUnresolved {
        /// Number of passes run before giving up.
        passes: usize,
    },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CascadeUnresolved { passes } => {
                write!(f, "layout unresolved: cascade did not settle within {passes} passes")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// The three size levels hosts expose in a tile's size menu.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SizePreset {
    /// Size level 1 (100x100 box).
    Small,
    /// Size level 2 (200x200 box).
    Medium,
    /// Size level 3 (300x300 box).
    Large,
}

impl SizePreset {
    /// The size level this preset resolves to.
    pub const fn level(self) -> f64 {
        match self {
            Self::Small => 1.0,
            Self::Medium => 2.0,
            Self::Large => 3.0,
        }
    }
}

/// Resolve a size-level change on `id`, cascading neighbors apart on growth.
///
/// A growth from `prev` to `new_size` pushes every transitively colliding
/// neighbor by the diagonal vector `(+dist, +dist)` where
/// `dist = 100 * (new_size - prev)` — both axes regardless of which axis
/// actually overlaps; this is the layout's characteristic outward drift and
/// axis-aware pushing would change results. Positions are applied
/// immediately so collision tests within a pass see the updated layout, and
/// the canvas grows to fit any tile pushed past its right or bottom edge.
///
/// Per pass, tiles that currently collide with nothing are left untouched
/// but stay in the working set (a later displacement can introduce a new
/// collision); displaced tiles leave the working set permanently. The loop
/// ends on the first pass that displaces nothing.
///
/// Returns one move task per displaced tile plus a size task for `id`
/// itself. A shrink applies the size and emits only the size task; a
/// same-size request emits nothing. Stale handles are a no-op.
pub fn resolve_resize(
    arena: &mut TileArena,
    canvas: &mut CanvasBounds,
    id: TileId,
    new_size: f64,
) -> Result<Vec<TransitionTask>, LayoutError> {
    debug_assert!(new_size >= 1.0, "size levels start at 1");
    let Some(tile) = arena.get_mut(id) else {
        return Ok(Vec::new());
    };
    let prev = tile.size;
    if new_size == prev {
        return Ok(Vec::new());
    }
    tile.size = new_size;

    let mut tasks = Vec::new();
    if new_size > prev {
        let dist = TILE_UNIT * (new_size - prev);
        cascade(arena, canvas, id, dist, &mut tasks)?;
    }
    tasks.push(TransitionTask::resized(id, prev, new_size));
    Ok(tasks)
}

/// [`resolve_resize`] with a [`SizePreset`] level.
pub fn resolve_resize_preset(
    arena: &mut TileArena,
    canvas: &mut CanvasBounds,
    id: TileId,
    preset: SizePreset,
) -> Result<Vec<TransitionTask>, LayoutError> {
    resolve_resize(arena, canvas, id, preset.level())
}

fn cascade(
    arena: &mut TileArena,
    canvas: &mut CanvasBounds,
    resized: TileId,
    dist: f64,
    tasks: &mut Vec<TransitionTask>,
) -> Result<(), LayoutError> {
    // Snapshot of the collidable working set, in slot order for
    // deterministic displacement.
    let mut working: Vec<TileId> = arena
        .iter()
        .filter(|&(tid, tile)| tid != resized && tile.flags.contains(TileFlags::COLLIDABLE))
        .map(|(tid, _)| tid)
        .collect();

    let mut passes = 0;
    loop {
        passes += 1;
        if passes > MAX_CASCADE_PASSES {
            return Err(LayoutError::CascadeUnresolved {
                passes: MAX_CASCADE_PASSES,
            });
        }

        let mut displaced: HashSet<TileId> = HashSet::new();
        for &tid in &working {
            if arena.colliding(tid).is_empty() {
                continue;
            }
            let Some(tile) = arena.get_mut(tid) else {
                continue;
            };
            let from = tile.pos;
            let to = Point::new(from.x + dist, from.y + dist);
            tile.pos = to;
            let bbox = tile.bbox();
            tasks.push(TransitionTask::moved(tid, from, to));
            canvas.extend_to_fit(bbox);
            displaced.insert(tid);
        }

        if displaced.is_empty() {
            return Ok(());
        }
        working.retain(|tid| !displaced.contains(tid));
    }
}
