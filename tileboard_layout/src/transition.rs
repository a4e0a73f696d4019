// Copyright 2025 the Tileboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition tasks: the animation instructions solvers hand back to the host.
//!
//! The engine never animates. When a solve changes a tile's position or
//! size, it records a [`TransitionTask`] describing the start and end value,
//! the duration, and the easing curve, and the host interpolates it on its
//! own clock. Positions have already been applied to the arena by the time
//! the task is emitted; the task exists purely so the host can play the
//! change back smoothly instead of teleporting the tile.

use core::time::Duration;

use kurbo::Point;
use tileboard_arena::TileId;

/// Duration of every solver-emitted transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Easing curve for a transition.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Easing {
    /// Quadratic ease-in-out: accelerate to the midpoint, decelerate after.
    #[default]
    InOutQuad,
}

impl Easing {
    /// Evaluate the curve at normalized time `t`, clamped to `[0, 1]`.
    ///
    /// Returns the normalized progress in `[0, 1]`; hosts interpolate
    /// `start + (end - start) * progress`.
    pub fn evaluate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// What a transition changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransitionChange {
    /// The tile's top-left corner moves.
    Move {
        /// Position before the solve.
        from: Point,
        /// Position after the solve.
        to: Point,
    },
    /// The tile's size level changes.
    Resize {
        /// Size level before the solve.
        from: f64,
        /// Size level after the solve.
        to: f64,
    },
}

/// One animation instruction for the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionTask {
    /// The tile whose position or size changed.
    pub tile: TileId,
    /// The change to interpolate.
    pub change: TransitionChange,
    /// Playback duration.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
}

impl TransitionTask {
    /// A position transition with the default duration and easing.
    pub fn moved(tile: TileId, from: Point, to: Point) -> Self {
        Self {
            tile,
            change: TransitionChange::Move { from, to },
            duration: TRANSITION_DURATION,
            easing: Easing::default(),
        }
    }

    /// A size transition with the default duration and easing.
    pub fn resized(tile: TileId, from: f64, to: f64) -> Self {
        Self {
            tile,
            change: TransitionChange::Resize { from, to },
            duration: TRANSITION_DURATION,
            easing: Easing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_quad_endpoints_and_midpoint() {
        let e = Easing::InOutQuad;
        assert_eq!(e.evaluate(0.0), 0.0);
        assert_eq!(e.evaluate(0.5), 0.5);
        assert_eq!(e.evaluate(1.0), 1.0);
    }

    #[test]
    fn ease_in_out_quad_is_monotonic() {
        let e = Easing::InOutQuad;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.evaluate(f64::from(i) / 100.0);
            assert!(v >= prev, "easing regressed at step {i}");
            prev = v;
        }
    }

    #[test]
    fn evaluate_clamps_out_of_range_time() {
        let e = Easing::InOutQuad;
        assert_eq!(e.evaluate(-3.0), 0.0);
        assert_eq!(e.evaluate(7.5), 1.0);
    }

    #[test]
    fn constructors_use_default_duration_and_easing() {
        let mut arena = tileboard_arena::TileArena::new();
        let id = arena.insert(tileboard_arena::Tile::new(
            tileboard_arena::TileKind::Plain,
            Point::ZERO,
        ));
        let task = TransitionTask::moved(id, Point::ZERO, Point::new(100.0, 100.0));
        assert_eq!(task.duration, Duration::from_millis(300));
        assert_eq!(task.easing, Easing::InOutQuad);
    }
}
