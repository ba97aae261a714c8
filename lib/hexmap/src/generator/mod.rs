//! # Generators: Shapes to Grids
//!
//! Pure functions that sample a region cell by cell and emit a populated
//! [`Grid`]. Two forms exist and both plug into [`Map`](crate::Map):
//!
//! - position form ([`GenerateGridFn`]): the caller supplies layer offset, name
//!   and size, e.g. [`generate_hexagonal_grid`];
//! - shape form ([`GenerateShapeGridFn`]): everything is read off a
//!   [`Shape`], e.g. [`grid_from_shape`].

mod from_shape;
mod hexagonal;

use crate::{shapes::Shape, Grid, Position, Result};

pub use from_shape::grid_from_shape;
pub use hexagonal::generate_hexagonal_grid;

/// Build a grid at `position` named `name` with the given width and height.
pub type GenerateGridFn = fn(Position, &str, i32, i32) -> Result<Grid>;

/// Build a grid from a shape's bounding box and membership.
pub type GenerateShapeGridFn = fn(&dyn Shape) -> Result<Grid>;

/// Width and height as slot counts, rejecting negatives.
pub(crate) fn grid_size(width: i32, height: i32) -> Result<(usize, usize)> {
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(crate::Error::InvalidDimension(format!("{}x{}", width, height))),
    }
}
