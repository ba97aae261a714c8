use super::{Bounds, Occupancy, Shape, ShapeKind};

/// A block with equal sides at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    name: String,
    bounds: Bounds,
    occupancy: Occupancy,
}

impl Square {
    pub fn new(x: i32, y: i32, size: i32, name: impl Into<String>) -> Self {
        let bounds = Bounds::new(x, y, size, size);
        Self { name: name.into(), bounds, occupancy: Occupancy::fill(bounds, |_, _| true) }
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind { ShapeKind::Square }
    fn name(&self) -> &str { &self.name }
    fn bounds(&self) -> Bounds { self.bounds }

    // the box is adopted as given, even when it is not square
    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.occupancy = Occupancy::fill(bounds, |_, _| true).with_colors_from(&self.occupancy);
    }

    fn area(&self) -> i32 {
        self.bounds.width * self.bounds.height
    }

    fn perimeter(&self) -> i32 {
        4 * self.bounds.width
    }

    fn occupancy(&self) -> &Occupancy { &self.occupancy }
    fn occupancy_mut(&mut self) -> &mut Occupancy { &mut self.occupancy }
}
