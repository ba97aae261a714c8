//! # Map: Ordered Grid Layers
//!
//! A [`Map`] has fixed dimensions and an ordered stack of [`Grid`] layers.
//! Insertion order is z-order: index 0 is the bottom layer. Layer names need
//! not be unique; name lookups and removals act on the first match.

use std::fmt;

use log::trace;

use crate::{shapes::{Rectangle, Shape}, Error, Grid, Position, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Map {
    width: i32,
    height: i32,
    grids: Vec<Grid>,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, grids: Vec::new() }
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    pub fn add_grid(&mut self, grid: Grid) {
        trace!("layer {} '{}' added", self.grids.len(), grid.name());
        self.grids.push(grid);
    }

    /// Remove the first layer called `name` and hand it back.
    pub fn remove_grid(&mut self, name: &str) -> Result<Grid> {
        let index = self.grids.iter()
            .position(|g| g.name() == name)
            .ok_or_else(|| Error::not_found("grid", name))?;
        trace!("layer {} '{}' removed", index, name);
        Ok(self.grids.remove(index))
    }

    /// Remove the layer at `index`; later layers shift down by one.
    pub fn remove_grid_by_index(&mut self, index: i64) -> Result<Grid> {
        let i = self.checked_index(index)?;
        trace!("layer {} '{}' removed", i, self.grids[i].name());
        Ok(self.grids.remove(i))
    }

    pub fn grid_by_name(&self, name: &str) -> Result<&Grid> {
        self.grids.iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| Error::not_found("grid", name))
    }

    pub fn grid_by_index(&self, index: i64) -> Result<&Grid> {
        let i = self.checked_index(index)?;
        Ok(&self.grids[i])
    }

    /// Generate a map-sized layer named `Layer_<n>` at the origin and append it.
    /// A failing generator leaves the map as it was.
    pub fn add_layer(&mut self, generate: impl FnOnce(Position, &str, i32, i32) -> Result<Grid>) -> Result<()> {
        let name = self.next_layer_name();
        let grid = generate(Position::ORIGIN, &name, self.width, self.height)?;
        self.add_grid(grid);
        Ok(())
    }

    /// Like [`add_layer`](Self::add_layer) for shape-driven generators: the
    /// generator receives a map-sized rectangle named `Layer_<n>`.
    pub fn add_shape_layer(&mut self, generate: impl FnOnce(&dyn Shape) -> Result<Grid>) -> Result<()> {
        let rect = Rectangle::new(0, 0, self.width, self.height, self.next_layer_name());
        let grid = generate(&rect)?;
        self.add_grid(grid);
        Ok(())
    }

    fn next_layer_name(&self) -> String {
        format!("Layer_{}", self.grids.len())
    }

    fn checked_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index).ok()
            .filter(|&i| i < self.grids.len())
            .ok_or_else(|| Error::out_of_bounds("grid index", index, self.grids.len()))
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map(width: {}, height: {}, grids: {})", self.width, self.height, self.grids.len())
    }
}
