//! # Layout: Hex Coordinates on a 2-D Plane
//!
//! Converts between axial [`Position`]s and plane coordinates (`Vec2`) using the
//! "pointy-top" orientation, where each hexagon has a vertex pointing north and
//! rows of hexes are staggered by half a hex.
//!
//! ## Example
//!
//! ```rust
//! use glam::Vec2;
//! use hexmap::{Convert, Layout, Position};
//!
//! let layout = Layout::new(1.0);
//! let pos = Position::new(2, -1);
//!
//! let plane: Vec2 = layout.convert(pos);
//! let back: Position = layout.convert(plane);
//! assert_eq!(pos, back);
//! ```

use glam::Vec2;

use crate::position::{self, Position};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Affine transformation matrix for pointy-top hex orientation
/// Format: (forward matrix, inverse matrix) for Vec2 ↔ Position conversions
const ORIENTATION: ([f64; 4], [f64; 4]) = (
    [SQRT_3, SQRT_3/2., 0., 3./2.],
    [SQRT_3/3., -1./3., 0., 2./3.],
);

/// Trait for bidirectional coordinate conversion
pub trait Convert<T,U> {
    /// Convert from type T to type U
    fn convert(&self, it: T) -> U;
}

/// Pointy-top layout where `size` is the distance from a hex center to any vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    size: f32,
}

impl Layout {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> f32 { self.size }

    /// Horizontal distance between neighbouring hex centers in the same row.
    pub fn column_step(&self) -> f32 {
        (SQRT_3 * self.size as f64) as f32
    }

    /// Vertical distance between rows.
    pub fn row_step(&self) -> f32 {
        self.size * 1.5
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1.)
    }
}

impl Convert<Vec2,Position> for Layout {
    fn convert(&self, other: Vec2) -> Position {
        let q = (ORIENTATION.1[0] * other.x as f64 + ORIENTATION.1[1] * other.y as f64) / self.size as f64;
        let r = (ORIENTATION.1[2] * other.x as f64 + ORIENTATION.1[3] * other.y as f64) / self.size as f64;
        position::round(q, r)
    }
}

impl Convert<Position,Vec2> for Layout {
    fn convert(&self, other: Position) -> Vec2 {
        let x = (ORIENTATION.0[0] * other.q as f64 + ORIENTATION.0[1] * other.r as f64) * self.size as f64;
        let y = (ORIENTATION.0[2] * other.q as f64 + ORIENTATION.0[3] * other.r as f64) * self.size as f64;
        Vec2 { x: x as f32, y: y as f32 }
    }
}
