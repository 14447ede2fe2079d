use super::math::Point;

/// Axis-aligned playing area. North is +y, east is +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
}

impl Bounds {
    /// Playing area with its south-west corner at the origin.
    pub fn from_size(length: f64, width: f64) -> Self {
        Self {
            north: width,
            east: length,
            south: 0.0,
            west: 0.0,
        }
    }

    pub fn length(&self) -> f64 {
        self.east - self.west
    }

    pub fn width(&self) -> f64 {
        self.north - self.south
    }

    pub fn diagonal(&self) -> f64 {
        self.length().hypot(self.width())
    }

    /// The four cushions as segments, in north, east, south, west order.
    pub fn segments(&self) -> [(Point, Point); 4] {
        let nw = Point::new(self.west, self.north);
        let ne = Point::new(self.east, self.north);
        let se = Point::new(self.east, self.south);
        let sw = Point::new(self.west, self.south);
        [(nw, ne), (ne, se), (sw, se), (nw, sw)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_dimensions() {
        let b = Bounds::from_size(1000.0, 500.0);
        assert_eq!(b.length(), 1000.0);
        assert_eq!(b.width(), 500.0);
        assert!((b.diagonal() - 1118.033988749895).abs() < 1e-9);
    }

    #[test]
    fn segments_trace_the_rectangle() {
        let b = Bounds { north: 4.0, east: 6.0, south: 1.0, west: 2.0 };
        let [north, east, south, west] = b.segments();
        assert!(north.0.y == 4.0 && north.1.y == 4.0);
        assert!(east.0.x == 6.0 && east.1.x == 6.0);
        assert!(south.0.y == 1.0 && south.1.y == 1.0);
        assert!(west.0.x == 2.0 && west.1.x == 2.0);
    }
}
