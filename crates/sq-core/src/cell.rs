//! Grid coordinate type.
//!
//! `Cell` uses `u16` column/row components — the simulated grids are tiny
//! (10×10 by default) and unsigned components make out-of-bounds states
//! unrepresentable below zero, so only the upper bound needs checking.
//!
//! Column 0 is the exit side: agents step toward it one column per tick.

/// A (column, row) coordinate on the simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

impl Cell {
    #[inline]
    pub fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }

    /// The cell one column toward the exit, same row.
    ///
    /// Returns `None` at column 0 — the caller decides whether the agent
    /// lingers or leaves the grid there.
    #[inline]
    pub fn left(self) -> Option<Cell> {
        if self.col == 0 {
            None
        } else {
            Some(Cell::new(self.col - 1, self.row))
        }
    }

    /// `true` if the cell lies inside a `width` × `height` grid.
    #[inline]
    pub fn within(self, width: u16, height: u16) -> bool {
        self.col < width && self.row < height
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
