use std::collections::BTreeMap;

use derive_more::IntoIterator;

use super::{Bounds, Color};

/// Sparse point → color mapping; the key set is the shape.
#[derive(Clone, Debug, Default, Eq, IntoIterator, PartialEq)]
pub struct Occupancy {
    #[into_iterator(owned, ref)]
    points: BTreeMap<(i32, i32), Color>,
}

impl Occupancy {
    /// Sample every point of `bounds` and keep those `inside` accepts, colored `Color(0)`.
    pub fn fill(bounds: Bounds, mut inside: impl FnMut(i32, i32) -> bool) -> Self {
        let points = bounds.points()
            .filter(|&(x, y)| inside(x, y))
            .map(|p| (p, Color::default()))
            .collect();
        Self { points }
    }

    /// Carry colors over from `previous` for every point present in both.
    pub fn with_colors_from(mut self, previous: &Occupancy) -> Self {
        for (point, color) in self.points.iter_mut() {
            if let Some(old) = previous.points.get(point) {
                *color = *old;
            }
        }
        self
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.points.get(&(x, y)).copied()
    }

    /// Overwrite the color of an existing point. Returns false, leaving the
    /// mapping untouched, when the point is not a member.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.points.get_mut(&(x, y)) {
            Some(slot) => { *slot = color; true }
            None => false,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.points.contains_key(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in key order with their colors.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Color)> + '_ {
        self.points.iter().map(|(&p, &c)| (p, c))
    }
}

impl FromIterator<((i32, i32), Color)> for Occupancy {
    fn from_iter<I: IntoIterator<Item = ((i32, i32), Color)>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
