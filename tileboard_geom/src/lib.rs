// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives for the Tileboard layout engine.
//!
//! This crate provides the two small classification helpers the drag
//! constraint solver is built on, expressed over [`kurbo`] types:
//!
//! - [`line_distance`] – perpendicular distance from a point to the
//!   *infinite* line through a segment's endpoints.
//! - [`closest_side`] – which side of an axis-aligned rectangle is nearest
//!   to a point, with a deterministic tie-break.
//!
//! # Infinite-line semantics
//!
//! [`line_distance`] deliberately ignores the finite extent of the segment:
//! a point far beyond an endpoint still measures its distance to the line,
//! not to the nearest endpoint. Side classification in [`closest_side`]
//! depends on this (a point diagonally off a rectangle corner compares
//! against the four side *lines*, not the side segments), so do not "fix" it
//! to a clamped segment distance.
//!
//! This crate is `no_std`; enable the `std` feature (default) or `libm` for
//! float intrinsics.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Rect};

/// Squared-length threshold below which a segment is treated as a point.
///
/// The comparison is against the squared length, so this corresponds to
/// segments shorter than about `1e-6` canvas units.
const DEGENERATE_EPS: f64 = 1e-12;

/// A side of an axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// The left edge (`x = rect.x0`).
    Left,
    /// The right edge (`x = rect.x1`).
    Right,
    /// The top edge (`y = rect.y0`).
    Top,
    /// The bottom edge (`y = rect.y1`).
    Bottom,
}

/// Perpendicular distance from `p` to the infinite line through `l`.
///
/// If the segment's endpoints coincide (squared length below a small
/// positive epsilon), this falls back to the Euclidean distance between `p`
/// and the endpoint.
///
/// # Examples
///
/// ```
/// use kurbo::{Line, Point};
/// use tileboard_geom::line_distance;
///
/// let l = Line::new((0.0, 0.0), (10.0, 0.0));
/// assert_eq!(line_distance(Point::new(5.0, 3.0), l), 3.0);
///
/// // The segment's extent is not used: a point past the endpoint still
/// // measures against the line.
/// assert_eq!(line_distance(Point::new(100.0, 3.0), l), 3.0);
/// ```
pub fn line_distance(p: Point, l: Line) -> f64 {
    // Work relative to the first endpoint.
    let x = p.x - l.p0.x;
    let y = p.y - l.p0.y;
    let x2 = l.p1.x - l.p0.x;
    let y2 = l.p1.y - l.p0.y;

    let len2 = x2 * x2 + y2 * y2;
    if len2 <= DEGENERATE_EPS {
        return (x * x + y * y).sqrt();
    }

    // |cross| / |v| is the point-to-line distance.
    (x * y2 - y * x2).abs() / len2.sqrt()
}

/// Classify which side of `rect` is closest to `p`.
///
/// Each side is treated as the infinite line it lies on (see
/// [`line_distance`]). Ties are broken by evaluation order: left, right,
/// top, bottom — the first minimum wins. A point at `(5, 5)` relative to a
/// rectangle at the origin is therefore classified [`Side::Left`], not
/// [`Side::Top`], even though both distances are 5.
pub fn closest_side(p: Point, rect: Rect) -> Side {
    let tl = Point::new(rect.x0, rect.y0);
    let tr = Point::new(rect.x1, rect.y0);
    let bl = Point::new(rect.x0, rect.y1);
    let br = Point::new(rect.x1, rect.y1);

    let mut side = Side::Left;
    let mut min_dist = line_distance(p, Line::new(tl, bl));

    let d = line_distance(p, Line::new(tr, br));
    if d < min_dist {
        min_dist = d;
        side = Side::Right;
    }

    let d = line_distance(p, Line::new(tl, tr));
    if d < min_dist {
        min_dist = d;
        side = Side::Top;
    }

    let d = line_distance(p, Line::new(bl, br));
    if d < min_dist {
        side = Side::Bottom;
    }

    side
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_horizontal_line() {
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(line_distance(Point::new(5.0, 4.0), l), 4.0);
        assert_eq!(line_distance(Point::new(5.0, -4.0), l), 4.0);
    }

    #[test]
    fn distance_ignores_segment_extent() {
        // A point well past the right endpoint still measures against the
        // infinite line, not the endpoint.
        let l = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(line_distance(Point::new(1000.0, 7.0), l), 7.0);
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let l = Line::new((2.0, 2.0), (2.0, 2.0));
        assert_eq!(line_distance(Point::new(5.0, 6.0), l), 5.0);
    }

    #[test]
    fn near_degenerate_segment_uses_epsilon_not_exact_zero() {
        // Shorter than the epsilon threshold: treated as a point.
        let l = Line::new((0.0, 0.0), (1e-9, 0.0));
        let d = line_distance(Point::new(3.0, 4.0), l);
        assert!((d - 5.0).abs() < 1e-9, "expected point distance, got {d}");
    }

    #[test]
    fn closest_side_basic_quadrants() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(closest_side(Point::new(2.0, 50.0), r), Side::Left);
        assert_eq!(closest_side(Point::new(98.0, 50.0), r), Side::Right);
        assert_eq!(closest_side(Point::new(50.0, 3.0), r), Side::Top);
        assert_eq!(closest_side(Point::new(50.0, 97.0), r), Side::Bottom);
    }

    #[test]
    fn closest_side_tie_break_prefers_left_over_top() {
        // (5, 5) is 5 units from both the left and top lines; left is
        // evaluated first and must win.
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(closest_side(Point::new(5.0, 5.0), r), Side::Left);
    }

    #[test]
    fn closest_side_tie_break_prefers_right_over_bottom() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(closest_side(Point::new(95.0, 95.0), r), Side::Right);
    }

    #[test]
    fn closest_side_outside_rect() {
        // Side classification also applies to points outside the rectangle;
        // the drag solver relies on this when a tile overshoots an obstacle.
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(closest_side(Point::new(-30.0, 50.0), r), Side::Left);
        assert_eq!(closest_side(Point::new(50.0, 130.0), r), Side::Bottom);
    }
}
