use crate::Position;

/// A named piece on the map. Starts at the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    name: String,
    position: Position,
}

impl Unit {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), position: Position::ORIGIN }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn position(&self) -> Position { self.position }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unit_at_origin() {
        let unit = Unit::new("TestUnit");
        assert_eq!(unit.name(), "TestUnit");
        assert_eq!(unit.position(), Position::ORIGIN);
    }

    #[test]
    fn test_move_to_replaces_position() {
        let mut unit = Unit::new("scout");
        unit.move_to(Position::new(10, 20));
        assert_eq!(unit.position(), Position::new(10, 20));
        unit.move_to(Position::new(-1, 0));
        assert_eq!(unit.position(), Position::new(-1, 0));
    }
}
