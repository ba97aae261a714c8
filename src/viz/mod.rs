pub mod options;
pub mod render;

use hexmap::{
    generator::{generate_hexagonal_grid, grid_from_shape},
    shapes::*,
    Map, Result,
};
use log::{debug, info};

use options::{Options, ShapeArg};
use render::{render_grid, RenderStyle};

/// A `width × height` map with one layer of the chosen shape, sized to fit.
pub fn build_map(width: i32, height: i32, shape: ShapeArg) -> Result<Map> {
    let mut map = Map::new(width, height);
    let side = width.min(height);
    match shape {
        ShapeArg::Hexagon => map.add_layer(generate_hexagonal_grid)?,
        ShapeArg::Rectangle => map.add_shape_layer(grid_from_shape)?,
        ShapeArg::Square => map.add_shape_layer(|rect| {
            grid_from_shape(&Square::new(0, 0, side, rect.name()))
        })?,
        ShapeArg::Circle => map.add_shape_layer(|rect| {
            let radius = (side - 1) / 2;
            grid_from_shape(&Circle::new(radius, radius, radius, rect.name()))
        })?,
        ShapeArg::Triangle => map.add_shape_layer(|rect| {
            grid_from_shape(&Triangle::new(0, 0, side, rect.name()))
        })?,
        ShapeArg::Isosceles => map.add_shape_layer(|rect| {
            let rise = height.min((width + 1) / 2);
            grid_from_shape(&Triangle::isosceles(0, 0, rise, rect.name()))
        })?,
    }
    debug!("built {}", map);
    Ok(map)
}

/// Build the map described by `options` and render every layer under a
/// one-line header.
pub fn run(options: &Options) -> Result<String> {
    info!("{}x{} {:?}", options.width, options.height, options.shape);
    let map = build_map(options.width, options.height, options.shape)?;
    let style = RenderStyle { color: options.color, ..RenderStyle::default() };

    let mut out = format!("{}\n", map);
    for grid in map.grids() {
        out.push_str(&format!("{}\n{}\n", grid, render_grid(grid, &style)?));
    }
    Ok(out)
}
