use super::{Bounds, Occupancy, Shape, ShapeKind};

/// Axis-aligned block: every point of the bounding box is a member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
    name: String,
    bounds: Bounds,
    occupancy: Occupancy,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, name: impl Into<String>) -> Self {
        let bounds = Bounds::new(x, y, width, height);
        Self { name: name.into(), bounds, occupancy: Occupancy::fill(bounds, |_, _| true) }
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind { ShapeKind::Rectangle }
    fn name(&self) -> &str { &self.name }
    fn bounds(&self) -> Bounds { self.bounds }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.occupancy = Occupancy::fill(bounds, |_, _| true).with_colors_from(&self.occupancy);
    }

    fn area(&self) -> i32 {
        self.bounds.width * self.bounds.height
    }

    fn perimeter(&self) -> i32 {
        2 * (self.bounds.width + self.bounds.height)
    }

    fn occupancy(&self) -> &Occupancy { &self.occupancy }
    fn occupancy_mut(&mut self) -> &mut Occupancy { &mut self.occupancy }
}
