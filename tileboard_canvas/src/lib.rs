// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tileboard Canvas: the growable rectangular extent containing all tiles.
//!
//! [`CanvasBounds`] tracks the canvas rectangle with a fixed origin. Its one
//! invariant is monotonicity: width and height never decrease over the
//! bounds' lifetime. Growth happens in exactly two situations:
//!
//! - the host widget got bigger ([`CanvasBounds::host_resize`], which
//!   reserves a fixed [`HOST_MARGIN`] so near-edge tiles are not visually
//!   clipped), or
//! - a cascade pushed a tile past the right or bottom edge
//!   ([`CanvasBounds::extend_to_fit`], which grows by exactly the overflow).
//!
//! [`CanvasBounds::clamp`] is the read side: the position that keeps a box
//! of a given size fully inside the current bounds.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

/// Reserved margin, in canvas units, between the host widget's size and the
/// bounds adopted from it.
pub const HOST_MARGIN: f64 = 20.0;

/// The growable canvas extent. The origin never moves; only the right and
/// bottom edges grow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasBounds {
    rect: Rect,
}

impl Default for CanvasBounds {
    /// The 100x100 extent a host starts a fresh scene with.
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

impl CanvasBounds {
    /// Create bounds of the given size with the origin at zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            rect: Rect::from_origin_size(Point::ZERO, Size::new(width, height)),
        }
    }

    /// The current extent rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Current width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Current height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Grow the right/bottom edges by exactly the overflow of `bbox`, if any.
    ///
    /// Idempotent when `bbox` already fits; the origin and the opposite
    /// edges are untouched. Returns whether the bounds changed.
    pub fn extend_to_fit(&mut self, bbox: Rect) -> bool {
        let mut changed = false;
        if bbox.x1 > self.rect.x1 {
            self.rect.x1 = bbox.x1;
            changed = true;
        }
        if bbox.y1 > self.rect.y1 {
            self.rect.y1 = bbox.y1;
            changed = true;
        }
        changed
    }

    /// The position closest to `pos` that keeps a box of `size` fully inside
    /// the bounds, per axis independently.
    ///
    /// When the box is larger than the bounds on an axis, the origin wins
    /// (the box overhangs the far edge).
    pub fn clamp(&self, pos: Point, size: Size) -> Point {
        let x = pos
            .x
            .min(self.rect.x1 - size.width)
            .max(self.rect.x0);
        let y = pos
            .y
            .min(self.rect.y1 - size.height)
            .max(self.rect.y0);
        Point::new(x, y)
    }

    /// Adopt a new host-widget size, keeping the reserved margin.
    ///
    /// Each axis grows only if `new size - HOST_MARGIN` exceeds the current
    /// extent; the bounds never shrink, so tiles already placed never end up
    /// outside the visible area. Returns whether the bounds changed.
    pub fn host_resize(&mut self, width: f64, height: f64) -> bool {
        let mut changed = false;
        if width - HOST_MARGIN > self.width() {
            self.rect.x1 = self.rect.x0 + (width - HOST_MARGIN);
            changed = true;
        }
        if height - HOST_MARGIN > self.height() {
            self.rect.y1 = self.rect.y0 + (height - HOST_MARGIN);
            changed = true;
        }
        changed
    }
}

/// Top-left origin that centers a box of `size` on `drop_point`.
///
/// Hosts use this to place a freshly dropped tile under the pointer before
/// handing it to the arena.
pub fn centered_origin(drop_point: Point, size: Size) -> Point {
    Point::new(
        drop_point.x - size.width / 2.0,
        drop_point.y - size.height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_to_fit_grows_by_exact_overflow() {
        let mut bounds = CanvasBounds::new(300.0, 200.0);
        assert!(bounds.extend_to_fit(Rect::new(250.0, 0.0, 350.0, 100.0)));
        assert_eq!(bounds.rect(), Rect::new(0.0, 0.0, 350.0, 200.0));
    }

    #[test]
    fn extend_to_fit_is_idempotent_when_box_fits() {
        let mut bounds = CanvasBounds::new(300.0, 300.0);
        assert!(!bounds.extend_to_fit(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(bounds.rect(), Rect::new(0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn extend_to_fit_never_moves_origin() {
        let mut bounds = CanvasBounds::new(100.0, 100.0);
        // A box poking out past the top-left does not grow anything.
        assert!(!bounds.extend_to_fit(Rect::new(-50.0, -50.0, 50.0, 50.0)));
        assert_eq!(bounds.rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn clamp_inside_is_identity() {
        let bounds = CanvasBounds::new(500.0, 500.0);
        let p = Point::new(120.0, 130.0);
        assert_eq!(bounds.clamp(p, Size::new(100.0, 100.0)), p);
    }

    #[test]
    fn clamp_exact_fit_pins_to_origin() {
        // A 100x100 box in 100x100 bounds has exactly one legal position.
        let bounds = CanvasBounds::new(100.0, 100.0);
        let clamped = bounds.clamp(Point::new(200.0, 200.0), Size::new(100.0, 100.0));
        assert_eq!(clamped, Point::ZERO);
    }

    #[test]
    fn clamp_per_axis_independence() {
        let bounds = CanvasBounds::new(400.0, 400.0);
        let clamped = bounds.clamp(Point::new(-30.0, 350.0), Size::new(100.0, 100.0));
        assert_eq!(clamped, Point::new(0.0, 300.0));
    }

    #[test]
    fn clamp_oversize_box_prefers_origin() {
        let bounds = CanvasBounds::new(100.0, 100.0);
        let clamped = bounds.clamp(Point::new(50.0, 50.0), Size::new(300.0, 300.0));
        assert_eq!(clamped, Point::ZERO);
    }

    #[test]
    fn host_resize_reserves_margin_and_never_shrinks() {
        let mut bounds = CanvasBounds::new(100.0, 100.0);
        assert!(bounds.host_resize(400.0, 300.0));
        assert_eq!(bounds.rect(), Rect::new(0.0, 0.0, 380.0, 280.0));

        // Shrinking the widget leaves the bounds alone.
        assert!(!bounds.host_resize(200.0, 200.0));
        assert_eq!(bounds.rect(), Rect::new(0.0, 0.0, 380.0, 280.0));

        // A resize smaller than the margin is also a no-op.
        assert!(!bounds.host_resize(10.0, 10.0));
        assert_eq!(bounds.rect(), Rect::new(0.0, 0.0, 380.0, 280.0));
    }

    #[test]
    fn monotonic_over_mixed_operations() {
        let mut bounds = CanvasBounds::new(100.0, 100.0);
        let mut prev = (bounds.width(), bounds.height());
        let mut check = |bounds: &CanvasBounds, prev: &mut (f64, f64)| {
            let now = (bounds.width(), bounds.height());
            assert!(now.0 >= prev.0 && now.1 >= prev.1, "bounds shrank: {now:?}");
            *prev = now;
        };

        bounds.host_resize(250.0, 90.0);
        check(&bounds, &mut prev);
        bounds.extend_to_fit(Rect::new(200.0, 200.0, 320.0, 260.0));
        check(&bounds, &mut prev);
        bounds.host_resize(50.0, 400.0);
        check(&bounds, &mut prev);
        bounds.extend_to_fit(Rect::new(0.0, 0.0, 10.0, 10.0));
        check(&bounds, &mut prev);
    }

    #[test]
    fn centered_origin_offsets_by_half_size() {
        let origin = centered_origin(Point::new(150.0, 80.0), Size::new(100.0, 100.0));
        assert_eq!(origin, Point::new(100.0, 30.0));
    }
}
