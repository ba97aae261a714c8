use crate::{Error, Result};

use super::Unit;

/// A player's ordered unit roster. Slots can be emptied without shifting the
/// remaining units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    units: Vec<Option<Unit>>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), units: Vec::new() }
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.push(Some(unit));
    }

    /// Number of slots, empty ones included.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> &[Option<Unit>] {
        &self.units
    }

    pub fn unit_at(&self, index: i64) -> Result<Option<&Unit>> {
        let i = self.checked_index(index)?;
        Ok(self.units[i].as_ref())
    }

    /// Replace the slot at `index`; `None` empties it.
    pub fn set_unit_at(&mut self, index: i64, unit: Option<Unit>) -> Result<()> {
        let i = self.checked_index(index)?;
        self.units[i] = unit;
        Ok(())
    }

    fn checked_index(&self, index: i64) -> Result<usize> {
        usize::try_from(index).ok()
            .filter(|&i| i < self.units.len())
            .ok_or_else(|| Error::out_of_bounds("unit index", index, self.units.len()))
    }
}
