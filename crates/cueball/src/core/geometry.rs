//! Distance, angle and intersection tests used by collisions and aiming.
//!
//! Degenerate input (coincident points, zero-length segments, parallel
//! lines) yields `None` or `false`, never a panic.

use super::math::{heading_of, Point};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Distance of `a` from the origin.
pub fn distance_from_origin(a: Point) -> f64 {
    distance(a, Point::ZERO)
}

/// Angle of `a` as seen from `b`: the direction of `a - b` in degrees,
/// counter-clockwise from +x, in `[0, 360)`. `None` when `a == b`.
pub fn angle_between(a: Point, b: Point) -> Option<f64> {
    heading_of(a.x - b.x, a.y - b.y)
}

/// Whether the segment `p1 -> p2` meets the circle at `center`.
///
/// Solves `|p1 + t(p2 - p1) - center|² = radius²` and reports a hit when a
/// root lies in `[0, 1]`. A segment that starts and ends inside the circle
/// has both roots outside that range and does not count.
pub fn ray_circle_intersects(p1: Point, p2: Point, center: Point, radius: f64) -> bool {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.dot(d);
    if a == 0.0 {
        return false;
    }
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return false;
    }

    let root = discriminant.sqrt();
    let t1 = (-b - root) / (2.0 * a);
    let t2 = (-b + root) / (2.0 * a);
    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Intersection point of segments `p1 -> p2` and `p3 -> p4`.
///
/// `None` for parallel or collinear segments, or when the crossing lies
/// outside either segment.
pub fn ray_line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let r = p2 - p1;
    let s = p4 - p3;

    let denom = r.perp_dot(s);
    if denom == 0.0 {
        return None;
    }

    let qp = p3 - p1;
    let t = qp.perp_dot(s) / denom;
    let u = qp.perp_dot(r) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p1 + r * t)
    } else {
        None
    }
}
