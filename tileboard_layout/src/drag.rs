// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag constraint solver: one pointer-move step at a time.

use kurbo::{Point, Rect, Size};
use tileboard_arena::{TileArena, TileId};
use tileboard_canvas::CanvasBounds;
use tileboard_geom::{Side, closest_side};

/// Resolve one pointer-move step of a dragged tile.
///
/// `p_start` is the position the tile held at the start of this step and
/// `p_new` the position proposed by the host from the raw pointer delta.
/// The final position is computed as follows:
///
/// 1. If the box at `p_new` collides, take the **first** colliding tile in
///    enumeration order (not the nearest — a nearest-obstacle policy would
///    snap differently under multiple simultaneous overlaps, and slot order
///    keeps the outcome deterministic) and snap the proposal to the
///    obstacle's nearest free edge.
/// 2. Clamp into the canvas bounds.
/// 3. If a collision survives snapping and clamping, the whole step is
///    rejected and the tile stays at `p_start` — never at an intermediate
///    colliding position.
///
/// The resolved position is applied to the arena before returning; a drag
/// repositions immediately and emits no transition task. Stale handles
/// return `p_start` untouched.
pub fn resolve_drag_step(
    arena: &mut TileArena,
    canvas: &CanvasBounds,
    id: TileId,
    p_start: Point,
    p_new: Point,
) -> Point {
    let Some(tile) = arena.get(id) else {
        return p_start;
    };
    let side_len = tile.side();

    let mut p = p_new;
    if let Some(obstacle) = arena
        .first_colliding_at(id, tile.bbox_at(p))
        .and_then(|other| arena.get(other))
    {
        // Positions from which the moving tile's box would touch (not
        // overlap) the obstacle form this rectangle's boundary: the
        // obstacle's box extended left and up by the mover's dimensions.
        let nb = obstacle.bbox();
        let snap = Rect::new(nb.x0 - side_len, nb.y0 - side_len, nb.x1, nb.y1);
        match closest_side(p, snap) {
            Side::Left => p.x = snap.x0,
            Side::Right => p.x = snap.x1,
            Side::Top => p.y = snap.y0,
            Side::Bottom => p.y = snap.y1,
        }
    }

    p = canvas.clamp(p, Size::new(side_len, side_len));

    let clamped_box = Rect::from_origin_size(p, Size::new(side_len, side_len));
    if !arena.colliding_at(id, clamped_box).is_empty() {
        return p_start;
    }

    if let Some(tile) = arena.get_mut(id) {
        tile.pos = p;
    }
    p
}
