//! Reversible pixel diffs.
//!
//! A `BatchPixelChange` is what a paint gesture produces: every touched
//! coordinate with the value it had before the gesture and the value it
//! has afterwards. Applying it with `ChangeType::Normal` writes the new
//! values, `ChangeType::Reverse` writes the old ones back.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::PixelGrid;

/// Direction in which a diff is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    /// Write the new values
    Normal,
    /// Restore the values captured before the change
    Reverse,
}

impl ChangeType {
    pub fn inverse(self) -> Self {
        match self {
            ChangeType::Normal => ChangeType::Reverse,
            ChangeType::Reverse => ChangeType::Normal,
        }
    }
}

/// A single coordinate of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelChange {
    pub x: usize,
    pub y: usize,
    pub old_value: bool,
    pub new_value: bool,
}

impl PixelChange {
    pub fn value(&self, change_type: ChangeType) -> bool {
        match change_type {
            ChangeType::Normal => self.new_value,
            ChangeType::Reverse => self.old_value,
        }
    }
}

/// An ordered set of pixel changes with unique coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PixelChange>", into = "Vec<PixelChange>")]
pub struct BatchPixelChange {
    changes: Vec<PixelChange>,
    lookup: HashMap<(usize, usize), usize>,
}

impl BatchPixelChange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a change for (x, y).
    ///
    /// Repeated writes to the same coordinate are coalesced: the entry keeps
    /// the first old value and takes the latest new value.
    pub fn add(&mut self, x: usize, y: usize, old_value: bool, new_value: bool) {
        if let Some(&i) = self.lookup.get(&(x, y)) {
            self.changes[i].new_value = new_value;
            return;
        }
        self.lookup.insert((x, y), self.changes.len());
        self.changes.push(PixelChange { x, y, old_value, new_value });
    }

    /// Record that (x, y) of `grid` is painted with `value`, taking the old
    /// value from `grid`.
    ///
    /// `grid` is expected to hold the pre-gesture state for coordinates not
    /// yet recorded; later writes to the same coordinate only update the new value.
    pub fn record(&mut self, grid: &PixelGrid, x: usize, y: usize, value: bool) {
        let old_value = grid.pixel(x, y);
        self.add(x, y, old_value, value);
    }

    /// Apply this diff to `grid` in the given direction.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate lies outside of `grid`.
    pub fn apply(&self, grid: &mut PixelGrid, change_type: ChangeType) {
        for change in &self.changes {
            grid.set_pixel(change.x, change.y, change.value(change_type));
        }
    }

    /// The same diff with old and new values swapped.
    pub fn reversed(&self) -> Self {
        let mut result = Self::new();
        for change in &self.changes {
            result.add(change.x, change.y, change.new_value, change.old_value);
        }
        result
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelChange> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// True if applying the diff in either direction leaves a grid unchanged.
    pub fn is_noop(&self) -> bool {
        self.changes.iter().all(|c| c.old_value == c.new_value)
    }
}

impl FromIterator<PixelChange> for BatchPixelChange {
    fn from_iter<I: IntoIterator<Item = PixelChange>>(iter: I) -> Self {
        let mut result = Self::new();
        for change in iter {
            result.add(change.x, change.y, change.old_value, change.new_value);
        }
        result
    }
}

impl From<Vec<PixelChange>> for BatchPixelChange {
    fn from(changes: Vec<PixelChange>) -> Self {
        changes.into_iter().collect()
    }
}

impl From<BatchPixelChange> for Vec<PixelChange> {
    fn from(change: BatchPixelChange) -> Self {
        change.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesce_keeps_first_old_and_last_new() {
        let mut change = BatchPixelChange::new();
        change.add(1, 1, false, true);
        change.add(1, 1, true, false);
        change.add(1, 1, false, true);

        assert_eq!(change.len(), 1);
        let entry = change.iter().next().unwrap();
        assert!(!entry.old_value);
        assert!(entry.new_value);
    }

    #[test]
    fn test_reverse_restores_pre_gesture_state() {
        let mut grid = PixelGrid::from_text("#...\n....");
        let before = grid.clone();

        // paint over (0,0) and (1,0), then erase (0,0) again in the same gesture
        let mut change = BatchPixelChange::new();
        change.record(&grid, 0, 0, true);
        change.record(&grid, 1, 0, true);
        change.record(&grid, 0, 0, false);

        change.apply(&mut grid, ChangeType::Normal);
        assert!(!grid.pixel(0, 0));
        assert!(grid.pixel(1, 0));

        change.apply(&mut grid, ChangeType::Reverse);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_apply_identical_value_is_noop() {
        let mut grid = PixelGrid::from_text("#.");
        let mut change = BatchPixelChange::new();
        change.add(0, 0, true, true);
        assert!(change.is_noop());
        change.apply(&mut grid, ChangeType::Normal);
        assert_eq!(grid, PixelGrid::from_text("#."));
    }

    #[test]
    fn test_reversed_normal_equals_reverse() {
        let mut change = BatchPixelChange::new();
        change.add(0, 0, false, true);
        change.add(1, 0, true, false);

        let mut a = PixelGrid::new(2, 1);
        let mut b = PixelGrid::new(2, 1);
        change.apply(&mut a, ChangeType::Reverse);
        change.reversed().apply(&mut b, ChangeType::Normal);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_change_panics() {
        let mut grid = PixelGrid::new(2, 2);
        let mut change = BatchPixelChange::new();
        change.add(5, 5, false, true);
        change.apply(&mut grid, ChangeType::Normal);
    }
}
