//! # Grid: Fixed-Size Layer of Hex Cells
//!
//! A `Grid` is a `height × width` array of optional [`Cell`]s stored row-major
//! (outer index `r`, inner index `q`). An empty slot is a *hole*: the position is
//! inside the layer's rectangle but not part of the generated shape.
//!
//! Grids are built once by a generator and are read-only afterwards. Every
//! accessor is bounds-checked and reports [`Error`] instead of panicking.
//!
//! ## Example
//!
//! ```rust
//! use hexmap::{Cell, Grid, Position};
//!
//! let grid = Grid::new(
//!     Position::ORIGIN,
//!     "strip",
//!     2, 1,
//!     vec![vec![Some(Cell::new(0, 0)), None]],
//! ).unwrap();
//!
//! assert_eq!(grid.cell_at(0, 0), Ok(Some(Cell::new(0, 0))));
//! assert_eq!(grid.cell_at(1, 0), Ok(None));
//! assert!(grid.cell_at(2, 0).is_err());
//! ```

use std::fmt;

use crate::{Cell, Error, Position, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    position: Position,
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Vec<Option<Cell>>>,
}

impl Grid {
    /// Build a grid from a pre-populated cell array, which must be exactly
    /// `height` rows of `width` slots.
    pub fn new(
        position: Position,
        name: impl Into<String>,
        width: usize,
        height: usize,
        cells: Vec<Vec<Option<Cell>>>,
    ) -> Result<Self> {
        check_dimensions(&cells, width, height)?;
        Ok(Self { position, name: name.into(), width, height, cells })
    }

    /// A grid of the given size in which every slot is a hole.
    pub fn empty(position: Position, name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            position,
            name: name.into(),
            width,
            height,
            cells: vec![vec![None; width]; height],
        }
    }

    pub fn position(&self) -> Position { self.position }
    pub fn name(&self) -> &str { &self.name }
    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    /// Number of slots, holes included.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of slots holding a cell.
    pub fn occupied_count(&self) -> usize {
        self.cells().count()
    }

    pub fn cell_at(&self, q: i32, r: i32) -> Result<Option<Cell>> {
        let pos = Position { q, r };
        let (Ok(qi), Ok(ri)) = (usize::try_from(q), usize::try_from(r)) else {
            return Err(Error::CellOutOfBounds(pos));
        };
        if qi >= self.width || ri >= self.height {
            return Err(Error::CellOutOfBounds(pos));
        }
        Ok(self.cells[ri][qi])
    }

    pub fn cell_at_position(&self, pos: Position) -> Result<Option<Cell>> {
        self.cell_at(pos.q, pos.r)
    }

    /// Row-major lookup: `q = index % width`, `r = index / width`.
    pub fn cell_at_index(&self, index: i64) -> Result<Option<Cell>> {
        let len = self.cell_count();
        let Ok(i) = usize::try_from(index) else {
            return Err(Error::out_of_bounds("cell index", index, len));
        };
        if i >= len {
            return Err(Error::out_of_bounds("cell index", index, len));
        }
        Ok(self.cells[i / self.width][i % self.width])
    }

    /// Iterate over the cells that are present, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten().flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<Cell>>] {
        &self.cells
    }

    /// Copy every slot into `destination`, which must already be `height` rows
    /// of `width` slots. Dimensions are checked up front; on mismatch nothing
    /// is written.
    pub fn copy_cells_to(&self, destination: &mut [Vec<Option<Cell>>]) -> Result<()> {
        check_dimensions(destination, self.width, self.height)?;
        for (dst, src) in destination.iter_mut().zip(&self.cells) {
            dst.copy_from_slice(src);
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(name: {}, position: {}, width: {}, height: {})",
            self.name, self.position, self.width, self.height)
    }
}

fn check_dimensions(rows: &[Vec<Option<Cell>>], width: usize, height: usize) -> Result<()> {
    if rows.len() != height {
        return Err(Error::InvalidDimension(format!("{} rows, expected {}", rows.len(), height)));
    }
    if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(Error::InvalidDimension(format!("row {} has {} columns, expected {}", r, row.len(), width)));
    }
    Ok(())
}
