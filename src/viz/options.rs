use std::str::FromStr;

use clap::Parser;
use hexmap::Error;

#[derive(Parser, Debug)]
#[command(name = "viz")]
#[command(about = "Generate a hex map layer from a shape and print it")]
pub struct Options {
    /// Map width in cells
    #[arg(default_value = "10")]
    pub width: i32,

    /// Map height in cells
    #[arg(default_value = "10")]
    pub height: i32,

    /// Layer shape: square, rectangle, circle, triangle, isosceles or hexagon
    #[arg(default_value = "square")]
    pub shape: ShapeArg,

    /// Colorize occupied cells
    #[arg(long)]
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeArg {
    Square,
    Rectangle,
    Circle,
    Triangle,
    Isosceles,
    Hexagon,
}

impl FromStr for ShapeArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "square" => ShapeArg::Square,
            "rectangle" => ShapeArg::Rectangle,
            "circle" => ShapeArg::Circle,
            "triangle" => ShapeArg::Triangle,
            "isosceles" | "isosceles-triangle" => ShapeArg::Isosceles,
            "hexagon" => ShapeArg::Hexagon,
            _ => return Err(Error::InvalidArgument(format!("unknown shape '{}'", s))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_from(["viz"]).unwrap();
        assert_eq!((options.width, options.height), (10, 10));
        assert_eq!(options.shape, ShapeArg::Square);
        assert!(!options.color);
    }

    #[test]
    fn test_positionals_and_flag() {
        let options = Options::try_parse_from(["viz", "7", "4", "hexagon", "--color"]).unwrap();
        assert_eq!((options.width, options.height), (7, 4));
        assert_eq!(options.shape, ShapeArg::Hexagon);
        assert!(options.color);
    }

    #[test]
    fn test_shape_names() {
        assert_eq!("Circle".parse::<ShapeArg>(), Ok(ShapeArg::Circle));
        assert_eq!("isosceles-triangle".parse::<ShapeArg>(), Ok(ShapeArg::Isosceles));
        assert!(matches!("blob".parse::<ShapeArg>(), Err(Error::InvalidArgument(_))));
        assert!(Options::try_parse_from(["viz", "5", "5", "blob"]).is_err());
    }
}
