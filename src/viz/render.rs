//! Plain-text hex rendering.
//!
//! Each grid row becomes one line. Row `r` is shifted right by the layout's
//! x offset for `(0, r)`, half a slot per row, so axial neighbours line up the
//! way they do on a pointy-top hex map.

use crossterm::style::{Color, Stylize};
use glam::Vec2;
use hexmap::{Cell, Convert, Grid, Layout, Position, Result};

/// Characters reserved per cell, wide enough for `-99,-99`.
pub const SLOT_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct RenderStyle {
    pub layout: Layout,
    pub slot_width: usize,
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { layout: Layout::default(), slot_width: SLOT_WIDTH, color: false }
    }
}

const PALETTE: [Color; 3] = [Color::Green, Color::Cyan, Color::Yellow];

pub fn render_grid(grid: &Grid, style: &RenderStyle) -> Result<String> {
    let rows = (0..grid.height())
        .map(|r| render_row(grid, r, style))
        .collect::<Result<Vec<_>>>()?;
    Ok(rows.join("\n"))
}

fn render_row(grid: &Grid, r: usize, style: &RenderStyle) -> Result<String> {
    let mut line = " ".repeat(indent(r as i32, style));
    for q in 0..grid.width() {
        match grid.cell_at(q as i32, r as i32)? {
            Some(cell) => line.push_str(&render_cell(&cell, style)),
            None => line.push_str(&" ".repeat(style.slot_width)),
        }
    }
    Ok(line.trim_end().to_owned())
}

fn render_cell(cell: &Cell, style: &RenderStyle) -> String {
    let Position { q, r } = cell.position();
    let label = format!("{:^width$}", format!("{},{}", q, r), width = style.slot_width);
    if !style.color {
        return label;
    }
    // three colors so no two neighbours match
    let tint = PALETTE[(q - r).rem_euclid(3) as usize];
    label.with(tint).to_string()
}

fn indent(r: i32, style: &RenderStyle) -> usize {
    let offset: Vec2 = style.layout.convert(Position::new(0, r));
    let slots = offset.x / style.layout.column_step();
    (slots * style.slot_width as f32).round().max(0.) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap::{generator::*, shapes::*};

    fn plain(slot_width: usize) -> RenderStyle {
        RenderStyle { slot_width, ..RenderStyle::default() }
    }

    // ===== LAYOUT TESTS =====

    #[test]
    fn test_rectangle_rows_stagger() {
        let grid = grid_from_shape(&Rectangle::new(0, 0, 3, 2, "R")).unwrap();
        let text = render_grid(&grid, &plain(6)).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines, vec![
            " 0,0   1,0   2,0",
            "    0,1   1,1   2,1",
        ]);
    }

    #[test]
    fn test_indent_grows_half_slot_per_row() {
        let style = plain(8);
        for r in 0..6 {
            assert_eq!(indent(r, &style), 4 * r as usize);
        }
    }

    #[test]
    fn test_indent_ignores_hex_size() {
        let style = RenderStyle { layout: Layout::new(3.5), ..plain(6) };
        assert_eq!(indent(2, &style), 6);
    }

    // ===== CONTENT TESTS =====

    #[test]
    fn test_holes_render_blank() {
        let grid = generate_hexagonal_grid(Position::ORIGIN, "H", 3, 3).unwrap();
        let text = render_grid(&grid, &plain(4)).unwrap();
        let lines: Vec<_> = text.lines().collect();
        // row 0 keeps (1,0) and (2,0), (0,0) is a hole
        assert_eq!(lines[0], "    1,0 2,0");
        assert_eq!(lines[2], "    0,2 1,2");
        assert!(!text.contains("0,0"));
    }

    #[test]
    fn test_empty_grid_renders_blank_lines() {
        let grid = Grid::empty(Position::ORIGIN, "E", 4, 3);
        assert_eq!(render_grid(&grid, &RenderStyle::default()), Ok("\n\n".to_owned()));
        assert_eq!(render_grid(&Grid::empty(Position::ORIGIN, "Z", 0, 0), &RenderStyle::default()), Ok(String::new()));
    }

    #[test]
    fn test_every_present_cell_is_labelled() {
        let grid = grid_from_shape(&Circle::new(3, 3, 3, "C")).unwrap();
        let text = render_grid(&grid, &RenderStyle::default()).unwrap();
        for cell in grid.cells() {
            let Position { q, r } = cell.position();
            assert!(text.contains(&format!(" {},{} ", q, r)) || text.contains(&format!(" {},{}\n", q, r))
                || text.ends_with(&format!(" {},{}", q, r)), "missing {},{}", q, r);
        }
    }

    #[test]
    fn test_color_wraps_labels() {
        let grid = grid_from_shape(&Square::new(0, 0, 2, "S")).unwrap();
        let colored = render_grid(&grid, &RenderStyle { color: true, ..RenderStyle::default() }).unwrap();
        let uncolored = render_grid(&grid, &RenderStyle::default()).unwrap();
        assert!(colored.contains('\u{1b}'));
        assert!(!uncolored.contains('\u{1b}'));
        assert!(colored.contains("1,1"));
    }

    #[test]
    fn test_row_outside_grid_is_an_error() {
        let grid = grid_from_shape(&Rectangle::new(0, 0, 3, 2, "R")).unwrap();
        assert_eq!(
            render_row(&grid, 2, &RenderStyle::default()),
            Err(hexmap::Error::CellOutOfBounds(Position::new(0, 2)))
        );
        assert!(render_row(&grid, 1, &RenderStyle::default()).is_ok());
    }
}
