mod cell;
mod error;
mod grid;
mod layout;
mod map;
mod position;

pub mod game;
pub mod generator;
pub mod shapes;

pub use cell::Cell;
pub use error::{Error, Result};
pub use grid::Grid;
pub use layout::{Convert, Layout};
pub use map::Map;
pub use position::{Position, DIRECTIONS};
