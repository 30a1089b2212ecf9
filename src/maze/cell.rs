use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A (row, col) coordinate on the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u16,
    col: u16,
}

impl Cell {
    /// Row and column steps for up, right, down, left, in that order.
    const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

    pub const fn new(row: u16, col: u16) -> Self {
        Cell { row, col }
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    /// Get the cells `distance` steps away in the four cardinal directions.
    ///
    /// Each candidate is clamped into `row_bounds` x `col_bounds` (inclusive) coordinate by
    /// coordinate. Candidates that collapse back onto this cell after clamping are dropped,
    /// which is how a cell on the edge of the bounds ends up with fewer (or shorter) links
    /// instead of out-of-grid ones.
    ///
    /// The order is always up, right, down, left.
    pub fn neighbors(
        &self,
        row_bounds: RangeInclusive<u16>,
        col_bounds: RangeInclusive<u16>,
        distance: u16,
    ) -> impl Iterator<Item = Cell> + use<> {
        let origin = *self;
        Self::DIRECTIONS
            .into_iter()
            .map(move |(dr, dc)| {
                let step = i32::from(distance);
                Cell {
                    row: clamp(i32::from(origin.row) + dr * step, &row_bounds),
                    col: clamp(i32::from(origin.col) + dc * step, &col_bounds),
                }
            })
            .filter(move |&cell| cell != origin)
    }

    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Same as `min(max(lower, value), upper)`, so inverted bounds never panic.
fn clamp(value: i32, bounds: &RangeInclusive<u16>) -> u16 {
    let clamped = value
        .max(i32::from(*bounds.start()))
        .min(i32::from(*bounds.end()));
    // Both bounds fit in u16, and so does anything between them
    clamped.clamp(0, i32::from(u16::MAX)) as u16
}
