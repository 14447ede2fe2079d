//! Rack layouts and starting positions.
//!
//! Racks are built ball by ball: each ball sits at `(√3·r, ±r)` from the
//! ball it trails, which packs equal circles tightly without recomputing
//! rows. The apex points west toward the cue ball.
//!
//! Nine-ball diamond (west on the left):
//! ```text
//!          4
//!      2       6
//!  1       9       8
//!      3       7
//!          5
//! ```

use serde::{Deserialize, Serialize};

use crate::api::types::BallKind;
use crate::core::bounds::Bounds;
use crate::core::math::{Point, Vector};

/// Diamonds along the long rail.
const LONG_DIAMONDS: f64 = 8.0;
/// Diamond the cue ball is placed on.
const CUE_START_DIAMOND: f64 = 2.0;
/// Diamond the lead ball is placed on.
const RACK_START_DIAMOND: f64 = 6.0;

/// Which arrangement of object balls to rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RackLayout {
    /// One ball at the apex, two and three behind it.
    ThreeBall,
    /// Standard nine-ball diamond with the nine in the middle.
    NineBall,
}

/// Which way a trailing ball steps off the ball it follows.
#[derive(Debug, Clone, Copy)]
enum Side {
    North,
    South,
}

/// (ball, predecessor, side) for every ball after the lead.
const THREE_BALL_CHAIN: [(BallKind, BallKind, Side); 2] = [
    (BallKind::Two, BallKind::One, Side::North),
    (BallKind::Three, BallKind::One, Side::South),
];

const NINE_BALL_CHAIN: [(BallKind, BallKind, Side); 8] = [
    (BallKind::Two, BallKind::One, Side::North),
    (BallKind::Three, BallKind::One, Side::South),
    (BallKind::Four, BallKind::Two, Side::North),
    (BallKind::Nine, BallKind::Two, Side::South),
    (BallKind::Five, BallKind::Three, Side::South),
    (BallKind::Six, BallKind::Nine, Side::North),
    (BallKind::Seven, BallKind::Nine, Side::South),
    (BallKind::Eight, BallKind::Seven, Side::North),
];

impl RackLayout {
    /// Every ball in this layout, cue ball first, in rack order.
    pub fn kinds(self) -> &'static [BallKind] {
        match self {
            RackLayout::ThreeBall => &[BallKind::Cue, BallKind::One, BallKind::Two, BallKind::Three],
            RackLayout::NineBall => &BallKind::ALL,
        }
    }

    fn chain(self) -> &'static [(BallKind, BallKind, Side)] {
        match self {
            RackLayout::ThreeBall => &THREE_BALL_CHAIN,
            RackLayout::NineBall => &NINE_BALL_CHAIN,
        }
    }

    /// Extent of the racked balls for radius `r`, edges included: depth
    /// east of the apex center, and half-width either side of the centerline.
    pub fn footprint(self, r: f64) -> (f64, f64) {
        let step = 3f64.sqrt() * r;
        match self {
            RackLayout::ThreeBall => (step + r, 2.0 * r),
            RackLayout::NineBall => (4.0 * step + r, 3.0 * r),
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(RackLayout::ThreeBall),
            1 => Some(RackLayout::NineBall),
            _ => None,
        }
    }
}

/// Where the cue ball starts, and where it returns after a scratch.
pub fn cue_start(bounds: &Bounds, cue_offset: f64) -> Point {
    Point::new(
        bounds.west + (CUE_START_DIAMOND / LONG_DIAMONDS) * bounds.length(),
        bounds.south + bounds.width() / 2.0 + cue_offset,
    )
}

/// Where the lead (one) ball sits.
pub fn rack_apex(bounds: &Bounds) -> Point {
    Point::new(
        bounds.west + (RACK_START_DIAMOND / LONG_DIAMONDS) * bounds.length(),
        bounds.south + bounds.width() / 2.0,
    )
}

/// Object-ball positions for `layout`, lead ball first, for balls of radius `r`.
pub fn rack_positions(layout: RackLayout, apex: Point, r: f64) -> Vec<(BallKind, Point)> {
    let step = 3f64.sqrt() * r;
    let mut placed = Vec::with_capacity(layout.kinds().len() - 1);
    placed.push((BallKind::One, apex));

    for &(kind, after, side) in layout.chain() {
        let Some(&(_, from)) = placed.iter().find(|(k, _)| *k == after) else {
            continue;
        };
        let offset = match side {
            Side::North => Vector::new(step, r),
            Side::South => Vector::new(step, -r),
        };
        placed.push((kind, from + offset));
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 15.0;

    fn position(placed: &[(BallKind, Point)], kind: BallKind) -> Point {
        placed.iter().find(|(k, _)| *k == kind).map(|(_, p)| *p).unwrap()
    }

    #[test]
    fn layout_kinds_start_with_cue() {
        assert_eq!(RackLayout::ThreeBall.kinds().len(), 4);
        assert_eq!(RackLayout::NineBall.kinds().len(), 10);
        assert_eq!(RackLayout::NineBall.kinds()[0], BallKind::Cue);
        assert_eq!(RackLayout::from_index(0), Some(RackLayout::ThreeBall));
        assert_eq!(RackLayout::from_index(7), None);
    }

    #[test]
    fn start_positions_on_default_table() {
        let bounds = Bounds::from_size(1000.0, 500.0);
        assert_eq!(cue_start(&bounds, 20.0), Point::new(250.0, 270.0));
        assert_eq!(rack_apex(&bounds), Point::new(750.0, 250.0));
    }

    #[test]
    fn three_ball_triangle() {
        let apex = Point::new(750.0, 250.0);
        let placed = rack_positions(RackLayout::ThreeBall, apex, R);
        assert_eq!(placed.len(), 3);
        let step = 3f64.sqrt() * R;
        assert_eq!(position(&placed, BallKind::Two), apex + Vector::new(step, R));
        assert_eq!(position(&placed, BallKind::Three), apex + Vector::new(step, -R));
    }

    #[test]
    fn nine_ball_is_offset_from_the_two() {
        let placed = rack_positions(RackLayout::NineBall, Point::new(750.0, 250.0), R);
        assert_eq!(placed.len(), 9);
        let two = position(&placed, BallKind::Two);
        let nine = position(&placed, BallKind::Nine);
        assert_eq!(nine, two + Vector::new(3f64.sqrt() * R, -R));
    }

    #[test]
    fn nine_ball_sits_at_rack_center() {
        let placed = rack_positions(RackLayout::NineBall, Point::new(750.0, 250.0), R);
        let one = position(&placed, BallKind::One);
        let eight = position(&placed, BallKind::Eight);
        let nine = position(&placed, BallKind::Nine);
        let mid = (one + eight) / 2.0;
        assert!((nine - mid).length() < 1e-9, "nine {:?} mid {:?}", nine, mid);
        assert!((nine.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn neighbours_touch_exactly() {
        let placed = rack_positions(RackLayout::NineBall, Point::new(750.0, 250.0), R);
        let pairs = [
            (BallKind::One, BallKind::Two),
            (BallKind::Two, BallKind::Nine),
            (BallKind::Nine, BallKind::Seven),
            (BallKind::Seven, BallKind::Eight),
            (BallKind::Three, BallKind::Five),
        ];
        for (a, b) in pairs {
            let d = (position(&placed, a) - position(&placed, b)).length();
            assert!((d - 2.0 * R).abs() < 1e-9, "{:?}-{:?} distance {}", a, b, d);
        }
    }

    #[test]
    fn footprint_covers_every_ball() {
        let apex = Point::new(750.0, 250.0);
        for layout in [RackLayout::ThreeBall, RackLayout::NineBall] {
            let (depth, half_width) = layout.footprint(R);
            let placed = rack_positions(layout, apex, R);
            let max_x = placed.iter().map(|(_, p)| p.x + R).fold(f64::MIN, f64::max);
            let max_dy = placed.iter().map(|(_, p)| (p.y - apex.y).abs() + R).fold(0.0, f64::max);
            assert!((max_x - apex.x - depth).abs() < 1e-9, "{:?} depth", layout);
            assert!((max_dy - half_width).abs() < 1e-9, "{:?} half width", layout);
        }
    }

    #[test]
    fn no_two_balls_overlap() {
        let placed = rack_positions(RackLayout::NineBall, Point::new(750.0, 250.0), R);
        for (i, (_, a)) in placed.iter().enumerate() {
            for (_, b) in &placed[i + 1..] {
                assert!((*a - *b).length() > 2.0 * R - 1e-9);
            }
        }
    }
}
