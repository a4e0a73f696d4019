// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: tile identifiers, variants, flags, and geometry helpers.

use core::time::Duration;

use kurbo::{Point, Rect, Size};

/// Side length of a size-1 tile, in canvas units.
///
/// A tile's bounding box is always a square of side `TILE_UNIT * size`.
pub const TILE_UNIT: f64 = 100.0;

/// How long a press must be held before a tile enters [`TileMode::Move`].
///
/// The engine does not run timers; this is the canonical duration for hosts
/// wiring up long-press activation.
pub const LONG_PRESS: Duration = Duration::from_millis(300);

/// Identifier for a tile in the arena (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TileId(pub(crate) u32, pub(crate) u32);

impl TileId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The closed set of tile variants.
///
/// The engine only ever uses the common geometric projection (position and
/// size); variant-specific behavior (playback, playlist handling) lives in
/// the host. The kind is carried so hosts can round-trip it through the
/// arena without a side table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TileKind {
    /// A bare tile with no attached media.
    Plain,
    /// A tile bound to a single playable medium.
    Player,
    /// A tile bound to an ordered playlist.
    PlaylistPlayer,
}

bitflags::bitflags! {
    /// Tile flags controlling layout participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        /// Tile participates in collision queries. Tiles without this flag
        /// are invisible to both solvers and are never displaced.
        const COLLIDABLE = 0b0000_0001;
    }
}

impl Default for TileFlags {
    fn default() -> Self {
        Self::COLLIDABLE
    }
}

/// Interaction state of a tile.
///
/// Only [`TileMode::Move`] tiles should have pointer-moves routed through
/// the drag constraint solver; the host owns the mode transitions
/// (hover-enter, long press, release).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum TileMode {
    /// No interaction.
    #[default]
    Idle,
    /// Pointer is over the tile.
    Hover,
    /// Pressed, but not yet held long enough to move.
    Selected,
    /// Held past [`LONG_PRESS`]; pointer-moves drag the tile.
    Move,
}

/// A tile in the arena: the geometric projection the layout engine needs.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Top-left corner of the bounding box, in canvas units.
    pub pos: Point,
    /// Size level, `>= 1`. The bounding box side is `TILE_UNIT * size`.
    pub size: f64,
    /// Variant kind; opaque to the engine.
    pub kind: TileKind,
    /// Layout participation flags.
    pub flags: TileFlags,
    /// Interaction state; maintained by the host.
    pub mode: TileMode,
}

impl Tile {
    /// Create a size-1 tile of the given kind at `pos`.
    pub fn new(kind: TileKind, pos: Point) -> Self {
        Self {
            pos,
            size: 1.0,
            kind,
            flags: TileFlags::default(),
            mode: TileMode::default(),
        }
    }

    /// Bounding-box side length, `TILE_UNIT * size`.
    #[inline]
    pub fn side(&self) -> f64 {
        TILE_UNIT * self.size
    }

    /// Bounding box at the tile's current position.
    #[inline]
    pub fn bbox(&self) -> Rect {
        self.bbox_at(self.pos)
    }

    /// Bounding box the tile would occupy with its top-left corner at `pos`.
    #[inline]
    pub fn bbox_at(&self, pos: Point) -> Rect {
        Rect::from_origin_size(pos, Size::new(self.side(), self.side()))
    }
}

/// Strict AABB overlap test.
///
/// Boxes that only touch along an edge or at a corner do not collide; the
/// solvers place tiles exactly flush and those placements must be accepted.
/// (This is deliberately stricter than an edge-inclusive overlap test.)
///
/// # Examples
///
/// ```
/// use kurbo::Rect;
/// use tileboard_arena::boxes_collide;
///
/// let a = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert!(boxes_collide(&a, &Rect::new(50.0, 50.0, 150.0, 150.0)));
/// // Flush neighbors share the edge x = 100 and do not collide.
/// assert!(!boxes_collide(&a, &Rect::new(100.0, 0.0, 200.0, 100.0)));
/// ```
#[inline]
pub fn boxes_collide(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_side_tracks_size_level() {
        let mut t = Tile::new(TileKind::Plain, Point::new(10.0, 20.0));
        assert_eq!(t.bbox(), Rect::new(10.0, 20.0, 110.0, 120.0));
        t.size = 2.5;
        assert_eq!(t.bbox(), Rect::new(10.0, 20.0, 260.0, 270.0));
    }

    #[test]
    fn corner_touch_does_not_collide() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert!(!boxes_collide(&a, &b));
    }

    #[test]
    fn containment_collides() {
        let a = Rect::new(0.0, 0.0, 300.0, 300.0);
        let b = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert!(boxes_collide(&a, &b));
        assert!(boxes_collide(&b, &a));
    }
}
