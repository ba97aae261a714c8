//! # Game: Players, Units and the Board
//!
//! Thin bookkeeping over a [`Map`]. A [`Game`] optionally holds the map and an
//! ordered list of [`Player`]s; each player owns an ordered roster of [`Unit`]
//! slots. All index accessors are bounds-checked.

mod player;
mod unit;

use crate::{Error, Map, Result};

pub use player::Player;
pub use unit::Unit;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    map: Option<Map>,
    players: Vec<Player>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_map(&mut self, map: Map) {
        self.map = Some(map);
    }

    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_at(&self, index: i64) -> Result<&Player> {
        usize::try_from(index).ok()
            .and_then(|i| self.players.get(i))
            .ok_or_else(|| Error::out_of_bounds("player index", index, self.players.len()))
    }

    /// First player called `name`.
    pub fn player_by_name(&self, name: &str) -> Result<&Player> {
        self.players.iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::not_found("player", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generator::generate_hexagonal_grid, Position};

    // ===== BOOKKEEPING TESTS =====

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert!(game.map().is_none());
        assert!(game.players().is_empty());
    }

    #[test]
    fn test_set_map_replaces() {
        let mut game = Game::new();
        game.set_map(Map::new(10, 10));
        game.set_map(Map::new(4, 2));
        assert_eq!(game.map().map(Map::dimensions), Some((4, 2)));
    }

    #[test]
    fn test_player_lookup() {
        let mut game = Game::new();
        game.add_player(Player::new("red"));
        game.add_player(Player::new("blue"));

        assert_eq!(game.player_at(1).unwrap().name(), "blue");
        assert_eq!(game.player_by_name("red").unwrap().name(), "red");
        assert!(matches!(game.player_at(2), Err(Error::OutOfBounds { .. })));
        assert!(matches!(game.player_at(-1), Err(Error::OutOfBounds { .. })));
        assert!(matches!(game.player_by_name("green"), Err(Error::NotFound { .. })));
    }

    // ===== INTEGRATION =====

    #[test]
    fn test_game_with_map_and_units() {
        let mut map = Map::new(9, 9);
        map.add_layer(generate_hexagonal_grid).unwrap();

        let mut unit = Unit::new("TestUnit");
        let target = Position::new(4, 4);
        let cell = map.grid_by_name("Layer_0").unwrap().cell_at_position(target).unwrap();
        assert!(cell.is_some());
        unit.move_to(target);

        let mut player = Player::new("TestPlayer");
        player.add_unit(unit);

        let mut game = Game::new();
        game.set_map(map);
        game.add_player(player);

        let game_map = game.map().unwrap();
        assert_eq!(game_map.dimensions(), (9, 9));
        assert_eq!(game_map.grids().len(), 1);

        let player = game.player_by_name("TestPlayer").unwrap();
        assert_eq!(player.unit_count(), 1);
        let unit = player.unit_at(0).unwrap().unwrap();
        assert_eq!(unit.name(), "TestUnit");
        assert_eq!(unit.position(), target);
    }
}
