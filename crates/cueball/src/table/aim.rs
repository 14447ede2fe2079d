//! Cue-line prediction: where does a stroke at the current angle stop?

use crate::components::ball::Ball;
use crate::core::bounds::Bounds;
use crate::core::geometry::{distance, ray_circle_intersects, ray_line_intersection};
use crate::core::math::{Heading, Point, Vector};

/// End of the cue line for a stroke from `cue` at `angle` degrees.
///
/// The aim ray runs the length of the table diagonal. Object balls are
/// checked nearest first, against the center ray and two rays shifted
/// sideways by the cue ball's radius; the first ball hit stops the line
/// at the ghost-ball point `2 × radius` short of that ball. With nothing
/// in the way the line stops at the nearest cushion.
pub fn predict<'a>(
    cue: &Ball,
    angle: f64,
    targets: impl IntoIterator<Item = &'a Ball>,
    bounds: &Bounds,
) -> Option<Point> {
    let dir = Vector::from_heading(angle);
    let start = cue.pos;
    let end = start + dir * bounds.diagonal();

    let side = dir.perp() * cue.radius();
    let rays = [(start, end), (start + side, end + side), (start - side, end - side)];

    let mut targets: Vec<&Ball> = targets.into_iter().filter(|b| !b.kind.is_cue()).collect();
    targets.sort_by(|a, b| distance(start, a.pos).total_cmp(&distance(start, b.pos)));

    let blocker = targets.into_iter().find(|ball| {
        rays.iter()
            .any(|&(p1, p2)| ray_circle_intersects(p1, p2, ball.pos, ball.radius()))
    });
    if let Some(ball) = blocker {
        let along = (ball.pos - start).dot(dir);
        let reach = (along - 2.0 * ball.radius()).max(0.0);
        return Some(start + dir * reach);
    }

    bounds
        .segments()
        .iter()
        .filter_map(|&(a, b)| ray_line_intersection(start, end, a, b))
        .min_by(|a, b| distance(start, *a).total_cmp(&distance(start, *b)))
}
