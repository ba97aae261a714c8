use super::{Bounds, Occupancy, Shape, ShapeKind};

/// Apex-up triangle, either the equilateral `size × size` variant or the
/// centered isosceles variant with a `2h-1` wide base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    name: String,
    kind: ShapeKind,
    bounds: Bounds,
    // side length; the height for isosceles triangles
    size: i32,
    occupancy: Occupancy,
}

impl Triangle {
    /// Equilateral triangle in a `size × size` box with its top vertex in row `y`.
    ///
    /// Row `r` covers columns `center-r ..= center+r` with `center = size/2`,
    /// so for even sizes the tip sits left of the middle.
    pub fn new(x: i32, y: i32, size: i32, name: impl Into<String>) -> Self {
        let bounds = Bounds::new(x, y, size, size);
        Self {
            name: name.into(),
            kind: ShapeKind::Triangle,
            bounds,
            size,
            occupancy: equilateral(x, y, size),
        }
    }

    /// Centered isosceles triangle of the given height: the apex is at
    /// `(x+height-1, y)` and the base spans `x ..= x+2*height-2` in the last row.
    pub fn isosceles(x: i32, y: i32, height: i32, name: impl Into<String>) -> Self {
        let bounds = Bounds::new(x, y, 2 * height - 1, height);
        let apex = x + height - 1;
        let occupancy = Occupancy::fill(bounds, |px, py| {
            let row = py - y;
            px >= apex - row && px <= apex + row
        });
        Self { name: name.into(), kind: ShapeKind::IsoscelesTriangle, bounds, size: height, occupancy }
    }

    pub fn size(&self) -> i32 { self.size }

    /// A new triangle turned 90° clockwise about its side length:
    /// `(col, row) -> (size-1-row, col)` relative to the box corner. The box
    /// swaps to `height × width` and slides left when it is taller than `size`,
    /// so every moved point stays inside it.
    pub fn rotate90(&self) -> Triangle {
        let Bounds { x, y, width, height } = self.bounds;
        let size = self.size;
        let occupancy = self.occupancy.iter()
            .map(|((px, py), color)| {
                let (col, row) = (px - x, py - y);
                ((x + size - 1 - row, y + col), color)
            })
            .collect();
        Triangle {
            name: format!("{}_rot90", self.name),
            kind: self.kind,
            bounds: Bounds::new(x + size - height, y, height, width),
            size,
            occupancy,
        }
    }

    /// A new triangle mirrored about its side length: `col -> size-1-col`.
    /// The box keeps its size and slides left when it is wider than `size`.
    pub fn flip(&self) -> Triangle {
        let Bounds { x, y, width, height } = self.bounds;
        let size = self.size;
        let occupancy = self.occupancy.iter()
            .map(|((px, py), color)| ((x + size - 1 - (px - x), py), color))
            .collect();
        Triangle {
            name: format!("{}_flip", self.name),
            kind: self.kind,
            bounds: Bounds::new(x + size - width, y, width, height),
            size,
            occupancy,
        }
    }
}

fn equilateral(x: i32, y: i32, size: i32) -> Occupancy {
    let center = size / 2;
    Occupancy::fill(Bounds::new(x, y, size, size), |px, py| {
        let (col, row) = (px - x, py - y);
        col >= center - row && col <= center + row
    })
}

impl Shape for Triangle {
    fn kind(&self) -> ShapeKind { self.kind }
    fn name(&self) -> &str { &self.name }
    fn bounds(&self) -> Bounds { self.bounds }

    /// Adopts the box and re-derives an equilateral triangle of side
    /// `min(width, height)` anchored at its top-left corner.
    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.size = bounds.width.min(bounds.height);
        self.kind = ShapeKind::Triangle;
        self.occupancy = equilateral(bounds.x, bounds.y, self.size).with_colors_from(&self.occupancy);
    }

    // √3/4 ≈ 0.433, truncated
    fn area(&self) -> i32 {
        (0.433 * (self.size * self.size) as f64) as i32
    }

    fn perimeter(&self) -> i32 {
        3 * self.size
    }

    fn occupancy(&self) -> &Occupancy { &self.occupancy }
    fn occupancy_mut(&mut self) -> &mut Occupancy { &mut self.occupancy }
}
