use serde::{Deserialize, Serialize};

use crate::Position;

/// A single occupied slot in a [`Grid`](crate::Grid). Identity is purely positional.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Cell {
    position: Position,
}

impl Cell {
    pub fn new(q: i32, r: i32) -> Self {
        Self { position: Position { q, r } }
    }

    pub fn position(&self) -> Position { self.position }
}

impl From<Position> for Cell {
    fn from(position: Position) -> Self {
        Self { position }
    }
}
