use log::debug;

use crate::{shapes::Shape, Cell, Grid, Position, Result};

use super::grid_size;

/// Sample every point of the shape's bounding box. Members become a cell at the
/// grid-local offset from the box corner, everything else is a hole. The grid
/// takes the shape's name and the box's position and size.
pub fn grid_from_shape(shape: &dyn Shape) -> Result<Grid> {
    let b = shape.bounds();
    let (width, height) = grid_size(b.width, b.height)?;

    let cells = (0..b.height).map(|r| {
        (0..b.width).map(|q| {
            shape.contains(b.x + q, b.y + r).then(|| Cell::new(q, r))
        }).collect()
    }).collect();

    let grid = Grid::new(Position::new(b.x, b.y), shape.name(), width, height, cells)?;
    debug!("{} shape '{}' -> {}x{} grid, {} cells", shape.kind(), shape.name(), width, height, grid.occupied_count());
    Ok(grid)
}
