use log::debug;

use crate::{Cell, Error, Grid, Position, Result};

use super::grid_size;

/// Fill a `width × height` grid with the largest hexagon that fits, centered.
///
/// The radius is `N = (min(width, height) - 1) / 2`. Each slot `(q, r)` is
/// measured from the float center `((width-1)/2, (height-1)/2)` in cube
/// coordinates and kept when `max(|dq|, |dr|, |ds|) <= N`. When both sides are
/// even the center falls between lattice points, so no slot qualifies at
/// radius 0 and larger grids come out sparse.
pub fn generate_hexagonal_grid(position: Position, name: &str, width: i32, height: i32) -> Result<Grid> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimension(format!(
            "width ({}) and height ({}) must be positive", width, height)));
    }
    let (w, h) = grid_size(width, height)?;

    let radius = ((width.min(height) - 1) / 2).max(0) as f64;
    let center_q = (width - 1) as f64 / 2.;
    let center_r = (height - 1) as f64 / 2.;

    let cells = (0..height).map(|r| {
        (0..width).map(|q| {
            let dq = q as f64 - center_q;
            let dr = r as f64 - center_r;
            let ds = -dq - dr;
            (dq.abs().max(dr.abs()).max(ds.abs()) <= radius).then(|| Cell::new(q, r))
        }).collect()
    }).collect();

    let grid = Grid::new(position, name, w, h, cells)?;
    debug!("hexagon '{}' radius {} in {}x{}: {} cells", name, radius, width, height, grid.occupied_count());
    Ok(grid)
}
