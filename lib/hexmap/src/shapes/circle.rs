use std::f64::consts::PI;

use super::{Bounds, Occupancy, Shape, ShapeKind};

/// Disc of integer points within `radius` of the center (Euclidean, inclusive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    name: String,
    center_x: i32,
    center_y: i32,
    radius: i32,
    occupancy: Occupancy,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32, name: impl Into<String>) -> Self {
        let mut circle = Self {
            name: name.into(),
            center_x: x,
            center_y: y,
            radius,
            occupancy: Occupancy::default(),
        };
        circle.occupancy = circle.disc();
        circle
    }

    pub fn center(&self) -> (i32, i32) { (self.center_x, self.center_y) }
    pub fn radius(&self) -> i32 { self.radius }

    fn disc(&self) -> Occupancy {
        let (cx, cy, r) = (self.center_x, self.center_y, self.radius);
        Occupancy::fill(self.bounds(), |px, py| {
            let (dx, dy) = (px - cx, py - cy);
            dx * dx + dy * dy <= r * r
        })
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind { ShapeKind::Circle }
    fn name(&self) -> &str { &self.name }

    fn bounds(&self) -> Bounds {
        Bounds {
            x: self.center_x - self.radius,
            y: self.center_y - self.radius,
            width: 2 * self.radius + 1,
            height: 2 * self.radius + 1,
        }
    }

    /// Best effort: recenter on the box and take half the shorter side as the
    /// radius. The stored bounds become the circle's own, which for even-sized
    /// boxes is one wider than the box passed in.
    fn set_bounds(&mut self, bounds: Bounds) {
        self.center_x = bounds.x + bounds.width / 2;
        self.center_y = bounds.y + bounds.height / 2;
        self.radius = bounds.width.min(bounds.height) / 2;
        self.occupancy = self.disc().with_colors_from(&self.occupancy);
    }

    fn area(&self) -> i32 {
        let r = self.radius as f64;
        (PI * r * r).round() as i32
    }

    fn perimeter(&self) -> i32 {
        (2. * PI * self.radius as f64).round() as i32
    }

    fn occupancy(&self) -> &Occupancy { &self.occupancy }
    fn occupancy_mut(&mut self) -> &mut Occupancy { &mut self.occupancy }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Color;

    #[test]
    fn test_circle_basic_properties() {
        let c = Circle::new(5, 7, 3, "TestCircle");
        assert_eq!(c.name(), "TestCircle");
        assert_eq!(c.kind(), ShapeKind::Circle);
        assert_eq!(c.center(), (5, 7));
        assert_eq!(c.radius(), 3);
        assert_eq!(c.dimensions(), (7, 7));
        assert_eq!(c.bounds(), Bounds::new(2, 4, 7, 7));
        assert_eq!(c.position(), (2, 4));
    }

    #[test]
    fn test_circle_area_and_perimeter() {
        let c = Circle::new(0, 0, 2, "C");
        // 4π = 12.57
        assert_eq!(c.area(), 13);
        assert_eq!(c.perimeter(), 13);

        let dot = Circle::new(0, 0, 0, "dot");
        assert_eq!(dot.area(), 0);
        assert_eq!(dot.occupied_count(), 1);
    }

    #[test]
    fn test_circle_membership() {
        let c = Circle::new(0, 0, 2, "C");
        assert!(c.color_at(0, 2).is_ok());
        assert!(c.color_at(-2, 0).is_ok());
        assert!(c.color_at(1, 1).is_ok());
        // distance² = 8 > 4
        assert!(c.color_at(2, 2).is_err());
        assert!(c.color_at(-2, -2).is_err());
        // distance² = 5 > 4
        assert!(c.color_at(1, 2).is_err());
        assert_eq!(c.occupied_count(), 13);
    }

    #[test]
    fn test_circle_color_round_trip() {
        let mut c = Circle::new(0, 0, 2, "C");
        assert_eq!(c.color_at(0, 0), Ok(Color(0)));
        c.set_color_at(0, 0, Color(5)).unwrap();
        assert_eq!(c.color_at(0, 0), Ok(Color(5)));
        assert!(c.set_color_at(2, 2, Color(5)).is_err());
    }

    #[test]
    fn test_circle_set_bounds() {
        let mut c = Circle::new(0, 0, 2, "B");
        c.set_bounds(Bounds::new(10, 20, 8, 8));
        assert_eq!(c.center(), (14, 24));
        assert_eq!(c.radius(), 4);
        assert_eq!(c.bounds(), Bounds::new(10, 20, 9, 9));
        assert!(c.contains(14, 20));
        assert!(!c.contains(0, 0));
    }

    #[test]
    fn test_circle_set_bounds_uses_shorter_side() {
        let mut c = Circle::new(0, 0, 1, "B");
        c.set_color_at(0, 0, Color(2)).unwrap();
        c.set_bounds(Bounds::new(-3, -1, 7, 3));
        assert_eq!(c.center(), (0, 0));
        assert_eq!(c.radius(), 1);
        assert_eq!(c.color_at(0, 0), Ok(Color(2)));
    }
}
