// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot storage and collision queries.

use alloc::vec::Vec;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::types::{Tile, TileFlags, TileId, boxes_collide};

/// Result of a collision query. Inline capacity covers realistic overlap
/// counts without heap allocation.
pub type CollisionList = SmallVec<[TileId; 8]>;

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    tile: Tile,
}

/// The tile working set: slot arena plus collision index.
///
/// Slots are reused through a free list; each reuse bumps the slot's
/// generation so stale [`TileId`]s never resolve to a newer tile. All
/// accessors are liveness-checked and return `Option` — a stale handle is a
/// recoverable condition (the host's set and the engine's working copy can
/// transiently diverge), never a panic.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use tileboard_arena::{Tile, TileArena, TileKind};
///
/// let mut arena = TileArena::new();
/// let a = arena.insert(Tile::new(TileKind::Plain, Point::new(0.0, 0.0)));
/// let b = arena.insert(Tile::new(TileKind::Player, Point::new(50.0, 0.0)));
///
/// // The two boxes overlap on (50..100) x (0..100).
/// assert_eq!(arena.colliding(a).as_slice(), &[b]);
///
/// arena.remove(b);
/// assert!(arena.colliding(a).is_empty());
/// assert!(arena.get(b).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileArena {
    slots: Vec<Option<Entry>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl TileArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tile, returning its handle.
    pub fn insert(&mut self, tile: Tile) -> TileId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Entry { generation, tile });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TileId uses 32-bit indices by design."
            )]
            TileId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Entry { generation, tile }));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TileId uses 32-bit indices by design."
            )]
            TileId::new((self.slots.len() - 1) as u32, generation)
        }
    }

    /// Remove a tile. Stale or unknown handles are a no-op.
    pub fn remove(&mut self, id: TileId) {
        if !self.is_alive(id) {
            return;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Whether `id` refers to a live tile.
    pub fn is_alive(&self, id: TileId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .is_some_and(|e| e.generation == id.1)
    }

    /// Borrow a live tile.
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.slots
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .filter(|e| e.generation == id.1)
            .map(|e| &e.tile)
    }

    /// Mutably borrow a live tile.
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.slots
            .get_mut(id.idx())
            .and_then(|slot| slot.as_mut())
            .filter(|e| e.generation == id.1)
            .map(|e| &mut e.tile)
    }

    /// Number of live tiles.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the arena holds no live tiles.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    /// Iterate live tiles in slot order.
    ///
    /// Slot order is the enumeration order all collision queries use, which
    /// makes the drag solver's first-collider policy deterministic.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref().map(|e| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "TileId uses 32-bit indices by design."
                )]
                (TileId::new(i as u32, e.generation), &e.tile)
            })
        })
    }

    /// Tiles whose boxes strictly overlap `id`'s box at its current position.
    ///
    /// Returns an empty list for stale handles.
    pub fn colliding(&self, id: TileId) -> CollisionList {
        match self.get(id) {
            Some(tile) => self.colliding_at(id, tile.bbox()),
            None => CollisionList::new(),
        }
    }

    /// Collidable tiles (other than `id`) whose boxes strictly overlap `rect`.
    ///
    /// `rect` is typically a candidate box for `id` at a proposed position;
    /// the tile's stored position does not enter the test. Enumeration is in
    /// slot order.
    pub fn colliding_at(&self, id: TileId, rect: Rect) -> CollisionList {
        self.iter()
            .filter(|&(other, tile)| {
                other != id
                    && tile.flags.contains(TileFlags::COLLIDABLE)
                    && boxes_collide(&rect, &tile.bbox())
            })
            .map(|(other, _)| other)
            .collect()
    }

    /// First collidable tile (in slot order) overlapping `rect`, if any.
    ///
    /// This is the obstacle the drag solver snaps against; with multiple
    /// simultaneous overlaps the first-enumerated one wins, not the nearest.
    pub fn first_colliding_at(&self, id: TileId, rect: Rect) -> Option<TileId> {
        self.iter()
            .find(|&(other, tile)| {
                other != id
                    && tile.flags.contains(TileFlags::COLLIDABLE)
                    && boxes_collide(&rect, &tile.bbox())
            })
            .map(|(other, _)| other)
    }
}
