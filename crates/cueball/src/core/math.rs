//! 2-D point and vector primitives.
//!
//! Positions and velocities are `glam::DVec2`. Simulation runs in f64 so
//! the incremental rack offsets and long aim rays keep their precision.

use glam::DVec2;

/// A location on the table, in table units with +y pointing north.
pub type Point = DVec2;

/// A displacement, velocity or force.
pub type Vector = DVec2;

/// Polar-angle access for vectors.
///
/// Angles are in degrees, counter-clockwise from +x, in `[0, 360)`.
pub trait Heading {
    /// Direction of the vector, or `None` for the zero vector.
    fn heading(self) -> Option<f64>;

    /// Unit vector pointing along `degrees`.
    fn from_heading(degrees: f64) -> Self;
}

impl Heading for DVec2 {
    fn heading(self) -> Option<f64> {
        heading_of(self.x, self.y)
    }

    fn from_heading(degrees: f64) -> Self {
        let rad = degrees.to_radians();
        DVec2::new(rad.cos(), rad.sin())
    }
}

/// Angle of `(x, y)` in degrees. Axis-aligned inputs return exact values.
pub(crate) fn heading_of(x: f64, y: f64) -> Option<f64> {
    if x == 0.0 && y == 0.0 {
        return None;
    }
    if x == 0.0 {
        return Some(if y > 0.0 { 90.0 } else { 270.0 });
    }
    if y == 0.0 {
        return Some(if x > 0.0 { 0.0 } else { 180.0 });
    }

    let deg = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round a tiny negative angle up to exactly 360
    Some(if deg >= 360.0 { 0.0 } else { deg })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn magnitude_of_three_four() {
        assert_eq!(Vector::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn zero_vector_has_no_heading() {
        assert_eq!(Vector::ZERO.heading(), None);
        assert_eq!(Vector::ZERO.length(), 0.0);
    }

    #[test]
    fn axis_headings_are_exact() {
        assert_eq!(Vector::new(1.0, 0.0).heading(), Some(0.0));
        assert_eq!(Vector::new(0.0, 1.0).heading(), Some(90.0));
        assert_eq!(Vector::new(-1.0, 0.0).heading(), Some(180.0));
        assert_eq!(Vector::new(0.0, -1.0).heading(), Some(270.0));
    }

    #[test]
    fn diagonal_headings() {
        let cases = [
            (Vector::new(1.0, 1.0), 45.0),
            (Vector::new(-1.0, 1.0), 135.0),
            (Vector::new(-1.0, -1.0), 225.0),
            (Vector::new(1.0, -1.0), 315.0),
        ];
        for (v, expected) in cases {
            let h = v.heading().unwrap();
            assert!(close(h, expected), "{:?} -> {}", v, h);
        }
    }

    #[test]
    fn heading_follows_mutation() {
        let mut v = Vector::new(3.0, 4.0);
        assert!(close(v.heading().unwrap(), 4.0f64.atan2(3.0).to_degrees()));
        v = Vector::new(0.0, -2.0);
        assert_eq!(v.heading(), Some(270.0));
        assert_eq!(v.length(), 2.0);
    }

    #[test]
    fn from_heading_round_trips_through_heading() {
        let v = Vector::from_heading(120.0);
        assert!(close(v.length(), 1.0));
        assert!(close(v.heading().unwrap(), 120.0));
    }
}
