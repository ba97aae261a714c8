use std::ops::{Add, Mul, Sub};

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const DIRECTIONS: [Position; 6] = [
        Position { q: -1, r: 0 }, // west
        Position { q: -1, r: 1 }, // south-west
        Position { q: 0, r: 1 }, // south-east
        Position { q: 1, r: 0 }, // east
        Position { q: 1, r: -1 }, // north-east
        Position { q: 0, r: -1 }, // north-west
];

/// Axial hex coordinate. The third cube coordinate is derived: `s = -q - r`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("Pos(q:{q}, r:{r})")]
pub struct Position {
    pub q: i32,
    pub r: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { q: 0, r: 0 };

    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    pub fn distance(&self, other: &Position) -> i32 {
        let d = *self - *other;
        d.q.abs().max(d.r.abs()).max(d.s().abs())
    }

    pub fn neighbors(&self) -> Vec<Position> {
        DIRECTIONS.iter().map(|&dir| *self + dir).collect()
    }
}

impl From<(i32, i32)> for Position {
    fn from((q, r): (i32, i32)) -> Self {
        Position { q, r }
    }
}

impl From<Position> for (i32, i32) {
    fn from(pos: Position) -> (i32, i32) {
        (pos.q, pos.r)
    }
}

impl Mul<i32> for Position {
    type Output = Position;
    fn mul(self, rhs: i32) -> Self::Output {
        Position { q: self.q * rhs, r: self.r * rhs }
    }
}

impl Add<Position> for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Self::Output {
        Position { q: self.q + rhs.q, r: self.r + rhs.r }
    }
}

impl Sub<Position> for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Self::Output {
        Position { q: self.q - rhs.q, r: self.r - rhs.r }
    }
}

/// Round fractional axial coordinates to the nearest hex, fixing up whichever
/// cube component drifted furthest so that `q + r + s == 0` still holds.
pub fn round(q0: f64, r0: f64) -> Position {
    let s0 = -q0-r0;
    let mut q = q0.round();
    let mut r = r0.round();
    let s = s0.round();

    let q_diff = (q - q0).abs();
    let r_diff = (r - r0).abs();
    let s_diff = (s - s0).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r-s;
    } else if r_diff > s_diff {
        r = -q-s;
    }

    Position { q: q as i32, r: r as i32 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 2).to_string(), "Pos(q:1, r:2)");
        assert_eq!(Position::new(-1, -2).to_string(), "Pos(q:-1, r:-2)");
        assert_eq!(Position::default().to_string(), "Pos(q:0, r:0)");
    }

    #[test]
    fn test_equality_is_positional() {
        assert_eq!(Position::new(3, 4), Position { q: 3, r: 4 });
        assert_ne!(Position::new(3, 4), Position::new(4, 3));
    }

    #[test]
    fn test_cube_coordinate() {
        let pos = Position::new(2, -5);
        assert_eq!(pos.s(), 3);
        assert_eq!(pos.q + pos.r + pos.s(), 0);
    }

    #[test]
    fn test_distance() {
        let origin = Position::ORIGIN;
        assert_eq!(origin.distance(&origin), 0);
        assert_eq!(origin.distance(&Position::new(3, 0)), 3);
        assert_eq!(origin.distance(&Position::new(2, -5)), 5);
        assert_eq!(Position::new(1, 1).distance(&Position::new(-1, -1)), 4);
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = Position::new(4, -2);
        let neighbors = center.neighbors();
        assert_eq!(neighbors.len(), 6);
        for n in neighbors {
            assert_eq!(center.distance(&n), 1, "{} should be adjacent to {}", n, center);
        }
    }

    #[test]
    fn test_round_snaps_to_nearest() {
        assert_eq!(round(0.1, 0.1), Position::ORIGIN);
        assert_eq!(round(2.9, -1.1), Position::new(3, -1));
        // q and r tie for the largest drift, r is the one recomputed
        assert_eq!(round(0.4, 0.4), Position::new(0, 1));
    }

    #[test]
    fn test_arithmetic() {
        let a = Position::new(1, 2);
        let b = Position::new(-3, 5);
        assert_eq!(a + b, Position::new(-2, 7));
        assert_eq!(a - b, Position::new(4, -3));
        assert_eq!(a * 3, Position::new(3, 6));
    }
}
