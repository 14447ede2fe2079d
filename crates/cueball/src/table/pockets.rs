use crate::core::bounds::Bounds;
use crate::core::geometry::distance;
use crate::core::math::Point;

/// Centers of the six pockets: the four corners and the middle of each
/// long rail. Order is south-west, north-west, north-side, north-east,
/// south-east, south-side.
pub fn pocket_centers(bounds: &Bounds) -> [Point; 6] {
    let mid_x = bounds.west + bounds.length() / 2.0;
    [
        Point::new(bounds.west, bounds.south),
        Point::new(bounds.west, bounds.north),
        Point::new(mid_x, bounds.north),
        Point::new(bounds.east, bounds.north),
        Point::new(bounds.east, bounds.south),
        Point::new(mid_x, bounds.south),
    ]
}

/// Index of the first pocket whose capture radius contains `pos`.
/// Ties go to the pocket listed first.
pub fn capturing_pocket(pos: Point, pockets: &[Point], capture_radius: f64) -> Option<usize> {
    pockets
        .iter()
        .position(|&center| distance(pos, center) < capture_radius)
}
