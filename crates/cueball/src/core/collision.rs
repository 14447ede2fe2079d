//! Ball-ball and ball-wall collision detection and response.
//!
//! Response is perfectly elastic. Positions are never corrected, so
//! overlapping balls may stay interpenetrated for a frame or two; the
//! [`ContactTracker`] keeps such a pair from being resolved again every frame.

use std::collections::HashMap;

use crate::api::types::BallKind;
use crate::components::ball::Ball;

use super::bounds::Bounds;
use super::geometry::distance;
use super::math::{Point, Vector};

/// One of the four cushions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    /// Check order used by [`wall_contact`].
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];
}

/// Whether two circles touch or overlap.
pub fn balls_collide(a_pos: Point, a_radius: f64, b_pos: Point, b_radius: f64) -> bool {
    distance(a_pos, b_pos) <= a_radius + b_radius
}

pub fn check_ball_ball(a: &Ball, b: &Ball) -> bool {
    balls_collide(a.pos, a.radius(), b.pos, b.radius())
}

/// New velocities after a 2-D elastic collision between two masses.
///
/// Both results use the pre-collision velocities. Coincident centers have
/// no line of impact, so the velocities come back unchanged.
pub fn resolve_ball_ball(
    a_pos: Point,
    a_vel: Vector,
    a_mass: f64,
    b_pos: Point,
    b_vel: Vector,
    b_mass: f64,
) -> (Vector, Vector) {
    let ab = a_pos - b_pos;
    let dist_sq = ab.length_squared();
    if dist_sq == 0.0 {
        return (a_vel, b_vel);
    }
    let total = a_mass + b_mass;

    let a_new = a_vel - ab * ((2.0 * b_mass / total) * (a_vel - b_vel).dot(ab) / dist_sq);
    let ba = -ab;
    let b_new = b_vel - ba * ((2.0 * a_mass / total) * (b_vel - a_vel).dot(ba) / dist_sq);
    (a_new, b_new)
}

/// First cushion the ball touches, checked north, east, south, west.
///
/// A ball wedged in a corner reports only the first wall; the other one is
/// picked up on a later frame once the first no longer matches.
pub fn wall_contact(pos: Point, radius: f64, bounds: &Bounds) -> Option<Wall> {
    Wall::ALL.into_iter().find(|wall| match wall {
        Wall::North => pos.y + radius >= bounds.north,
        Wall::East => pos.x + radius >= bounds.east,
        Wall::South => pos.y - radius <= bounds.south,
        Wall::West => pos.x - radius <= bounds.west,
    })
}

pub fn check_ball_wall(ball: &Ball, bounds: &Bounds) -> Option<Wall> {
    wall_contact(ball.pos, ball.radius(), bounds)
}

/// Negate the velocity component normal to `wall`: y for the north and
/// south cushions, x for east and west. The tangential component is kept.
///
/// The sign of the incoming component is not checked, so a ball still
/// overlapping the cushion while moving away from it is turned back.
pub fn reflect_off_wall(vel: Vector, wall: Wall) -> Vector {
    match wall {
        Wall::North | Wall::South => Vector::new(vel.x, -vel.y),
        Wall::East | Wall::West => Vector::new(-vel.x, vel.y),
    }
}

/// Most recent collision partner of each ball.
///
/// A pair is suppressed while each ball's latest partner is the other one.
/// Any other collision by either ball (another ball, or a cushion bounce)
/// releases the pair. This is a heuristic; it does not test whether the
/// balls are actually separating.
#[derive(Debug, Clone, Default)]
pub struct ContactTracker {
    partners: HashMap<BallKind, BallKind>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partner(&self, kind: BallKind) -> Option<BallKind> {
        self.partners.get(&kind).copied()
    }

    pub fn is_suppressed(&self, a: BallKind, b: BallKind) -> bool {
        self.partner(a) == Some(b) && self.partner(b) == Some(a)
    }

    pub fn record_pair(&mut self, a: BallKind, b: BallKind) {
        self.partners.insert(a, b);
        self.partners.insert(b, a);
    }

    /// A cushion bounce counts as colliding with something else.
    pub fn record_wall(&mut self, kind: BallKind) {
        self.partners.remove(&kind);
    }

    /// Drop every entry naming `kind`, e.g. once it is pocketed.
    pub fn forget(&mut self, kind: BallKind) {
        self.partners.remove(&kind);
        self.partners.retain(|_, partner| *partner != kind);
    }

    pub fn clear(&mut self) {
        self.partners.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}
