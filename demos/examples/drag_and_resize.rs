// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a small tile layout: drag with collision snap, then a resize
//! cascade.
//!
//! This example shows how to combine:
//! - `tileboard_arena` for tile storage and collision queries,
//! - `tileboard_canvas` for the growable canvas extent,
//! - `tileboard_layout` for the drag and resize solvers.
//!
//! Run:
//! - `cargo run -p tileboard_demos --example drag_and_resize`

use kurbo::{Point, Size};
use tileboard_arena::{Tile, TileArena, TileKind};
use tileboard_canvas::{CanvasBounds, centered_origin};
use tileboard_layout::{SizePreset, TransitionChange, resolve_drag_step, resolve_resize_preset};

fn print_layout(arena: &TileArena, canvas: &CanvasBounds) {
    println!("canvas: {:?}", canvas.rect());
    for (id, tile) in arena.iter() {
        println!("  {id:?}  kind={:?}  bbox={:?}", tile.kind, tile.bbox());
    }
}

fn main() {
    let mut arena = TileArena::new();
    let mut canvas = CanvasBounds::new(400.0, 400.0);

    // Three tiles, the last one dropped centered on the pointer.
    let a = arena.insert(Tile::new(TileKind::Player, Point::new(0.0, 0.0)));
    let b = arena.insert(Tile::new(TileKind::Plain, Point::new(200.0, 0.0)));
    let drop = centered_origin(Point::new(150.0, 250.0), Size::new(100.0, 100.0));
    let c = arena.insert(Tile::new(TileKind::PlaylistPlayer, drop));

    println!("-- initial layout");
    print_layout(&arena, &canvas);

    // Drag B toward A. The proposed position overlaps A, so the solver
    // snaps B flush against A's nearest side instead.
    let start = arena.get(b).unwrap().pos;
    let landed = resolve_drag_step(&mut arena, &canvas, b, start, Point::new(60.0, 10.0));
    println!("-- dragged b to (60, 10), landed at {landed:?}");
    print_layout(&arena, &canvas);

    // Drag C into the corner between A and B. No overlap-free snap exists
    // there, so the step reverts to where the drag started.
    let start = arena.get(c).unwrap().pos;
    let landed = resolve_drag_step(&mut arena, &canvas, c, start, Point::new(80.0, 40.0));
    println!("-- dragged c to (80, 40), landed at {landed:?}");

    // Grow A to the large preset. Neighbors in the way are pushed out
    // diagonally, and the canvas grows to fit whatever crosses its edge.
    let tasks = resolve_resize_preset(&mut arena, &mut canvas, a, SizePreset::Large)
        .expect("three tiles settle well inside the pass cap");
    println!("-- resized a to Large; {} transition task(s):", tasks.len());
    for task in &tasks {
        match task.change {
            TransitionChange::Move { from, to } => {
                println!("  move   {:?}  {from:?} -> {to:?}  over {:?}", task.tile, task.duration);
            }
            TransitionChange::Resize { from, to } => {
                println!("  resize {:?}  {from} -> {to}  over {:?}", task.tile, task.duration);
            }
        }
    }
    print_layout(&arena, &canvas);
}
