use crate::api::error::BallError;
use crate::api::types::BallKind;
use crate::core::math::{Point, Vector};

/// A single ball: identity plus physical state.
///
/// Pure state and integration. Collision checks live in
/// [`crate::core::collision`], which reads balls but never stores them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub kind: BallKind,
    pub pos: Point,
    pub vel: Vector,
    mass: f64,
    radius: f64,
}

impl Ball {
    /// Create a ball at rest. Mass and radius must be positive and finite.
    pub fn new(kind: BallKind, pos: Point, mass: f64, radius: f64) -> Result<Self, BallError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BallError::NonPositiveMass { kind, mass });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BallError::NonPositiveRadius { kind, radius });
        }
        Ok(Self {
            kind,
            pos,
            vel: Vector::ZERO,
            mass,
            radius,
        })
    }

    pub fn with_velocity(mut self, vel: Vector) -> Self {
        self.vel = vel;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Apply an instantaneous force: velocity += force / mass.
    pub fn apply_force(&mut self, force: Vector) {
        self.vel += force / self.mass;
    }

    /// Advance one frame: position += velocity, then velocity *= damping.
    /// A damping of 1.0 leaves the velocity untouched.
    pub fn time_step(&mut self, damping: f64) {
        self.pos += self.vel;
        if damping != 1.0 {
            self.vel *= damping;
        }
    }

    pub fn stop(&mut self) {
        self.vel = Vector::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass() {
        let err = Ball::new(BallKind::One, Point::ZERO, 0.0, 1.0).unwrap_err();
        assert_eq!(err, BallError::NonPositiveMass { kind: BallKind::One, mass: 0.0 });
        assert!(Ball::new(BallKind::One, Point::ZERO, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = Ball::new(BallKind::Two, Point::ZERO, 1.0, -3.0).unwrap_err();
        assert_eq!(err, BallError::NonPositiveRadius { kind: BallKind::Two, radius: -3.0 });
    }

    #[test]
    fn apply_force_divides_by_mass() {
        let mut ball = Ball::new(BallKind::Cue, Point::ZERO, 10.0, 15.0).unwrap();
        ball.apply_force(Vector::new(50.0, -20.0));
        assert_eq!(ball.vel, Vector::new(5.0, -2.0));
        ball.apply_force(Vector::new(50.0, 0.0));
        assert_eq!(ball.vel, Vector::new(10.0, -2.0));
    }

    #[test]
    fn time_step_without_damping() {
        let mut ball = Ball::new(BallKind::Cue, Point::new(1.0, 1.0), 1.0, 1.0)
            .unwrap()
            .with_velocity(Vector::new(2.0, 3.0));
        ball.time_step(1.0);
        assert_eq!(ball.pos, Point::new(3.0, 4.0));
        assert_eq!(ball.vel, Vector::new(2.0, 3.0));
    }

    #[test]
    fn time_step_with_damping_moves_then_slows() {
        let mut ball = Ball::new(BallKind::Cue, Point::ZERO, 1.0, 1.0)
            .unwrap()
            .with_velocity(Vector::new(100.0, 0.0));
        ball.time_step(0.5);
        assert_eq!(ball.pos, Point::new(100.0, 0.0));
        assert_eq!(ball.vel, Vector::new(50.0, 0.0));
        assert_eq!(ball.speed(), 50.0);
        ball.stop();
        assert_eq!(ball.speed(), 0.0);
    }
}
