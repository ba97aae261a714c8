//! # Shapes: Geometric Regions with Per-Point Color
//!
//! Every shape owns an [`Occupancy`]: a mapping from absolute integer point to
//! [`Color`]. The keys of that mapping *are* the shape. A point is inside iff it
//! has an entry, so color access doubles as the containment test used by the
//! grid generators.
//!
//! Membership is computed once, when the shape is built (or resized with
//! [`Shape::set_bounds`]), by sampling every integer point of the bounding box
//! against the variant's geometric rule:
//!
//! | Variant | Rule |
//! |---|---|
//! | [`Rectangle`], [`Square`] | every point of `[x, x+w) × [y, y+h)` |
//! | [`Circle`] | `(px-cx)² + (py-cy)² <= r²` |
//! | [`Triangle::new`] | row `r` spans `center-r ..= center+r`, `center = size/2` |
//! | [`Triangle::isosceles`] | row `r` spans `x+h-1-r ..= x+h-1+r` |
//!
//! ## Example
//!
//! ```rust
//! use hexmap::shapes::{Circle, Color, Shape};
//!
//! let mut circle = Circle::new(0, 0, 2, "C");
//! assert!(circle.contains(0, 2));
//! assert!(circle.color_at(2, 2).is_err()); // corner of the bounding box
//!
//! circle.set_color_at(0, 2, Color(7)).unwrap();
//! assert_eq!(circle.color_at(0, 2), Ok(Color(7)));
//! ```

mod circle;
mod occupancy;
mod rectangle;
mod square;
mod triangle;

use std::str::FromStr;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use circle::Circle;
pub use occupancy::Occupancy;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

/// Per-point color tag. Freshly built shapes color every point `Color(0)`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Color(pub i16);

/// Top-left anchored integer rectangle.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[display("Bounds(x: {x}, y: {y}, width: {width}, height: {height})")]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Every integer point in the box, row by row.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> {
        let Bounds { x, y, width, height } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum ShapeKind {
    #[display("rectangle")]
    Rectangle,
    #[display("square")]
    Square,
    #[display("circle")]
    Circle,
    #[display("triangle")]
    Triangle,
    #[display("isosceles-triangle")]
    IsoscelesTriangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::IsoscelesTriangle,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::IsoscelesTriangle => "isosceles-triangle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL.into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown shape kind '{}'", s)))
    }
}

/// Shared behavioural contract of every shape variant.
///
/// Implementors provide geometry (bounds, area, perimeter, resizing) and expose
/// their [`Occupancy`]; membership and color access are derived from it.
pub trait Shape {
    fn kind(&self) -> ShapeKind;
    fn name(&self) -> &str;

    fn bounds(&self) -> Bounds;

    /// Reposition/resize. Membership is re-derived from the reinterpreted
    /// parameters; points that stay inside keep their color.
    fn set_bounds(&mut self, bounds: Bounds);

    fn area(&self) -> i32;
    fn perimeter(&self) -> i32;

    fn occupancy(&self) -> &Occupancy;
    fn occupancy_mut(&mut self) -> &mut Occupancy;

    /// Top-left corner of the bounding box.
    fn position(&self) -> (i32, i32) {
        let b = self.bounds();
        (b.x, b.y)
    }

    fn dimensions(&self) -> (i32, i32) {
        let b = self.bounds();
        (b.width, b.height)
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.occupancy().contains(x, y)
    }

    fn occupied_count(&self) -> usize {
        self.occupancy().len()
    }

    fn color_at(&self, x: i32, y: i32) -> Result<Color> {
        self.occupancy().get(x, y).ok_or_else(|| not_a_member(self, x, y))
    }

    fn set_color_at(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        if self.occupancy_mut().set(x, y, color) {
            Ok(())
        } else {
            Err(not_a_member(self, x, y))
        }
    }
}

fn not_a_member<S: Shape + ?Sized>(shape: &S, x: i32, y: i32) -> Error {
    Error::NotAMember { shape: shape.kind().tag(), name: shape.name().to_owned(), x, y }
}
