//! Multi-occupancy grid storage.
//!
//! # Data layout
//!
//! Cell membership is a flat `Vec<Vec<AgentId>>` indexed column-major
//! (`col * height + row`), so one queue's cells are contiguous and a column
//! scan is a single memory walk.  Within a cell, agents keep insertion order
//! — queue front-to-back order is therefore (row ascending, arrival order).
//!
//! A reverse `FxHashMap<AgentId, Cell>` index makes `position()` O(1) and is
//! the single source of truth for "is this agent placed".  Per-column
//! occupancy counts are maintained incrementally so the rebalance pass can
//! scan all queues without touching membership lists.

use rustc_hash::FxHashMap;

use sq_core::{AgentId, Cell};

use crate::{GridError, GridResult};

/// A fixed-size cell space where any number of agents may share a cell.
///
/// All mutation goes through [`place`][Self::place],
/// [`move_agent`][Self::move_agent], and [`remove`][Self::remove], each of
/// which keeps the membership lists, the position index, and the per-column
/// counts consistent.
pub struct MultiGrid {
    width: u16,
    height: u16,

    /// Cell membership lists, indexed `col * height + row`.
    cells: Vec<Vec<AgentId>>,

    /// Agent → current cell.  Absence means "not on the grid".
    positions: FxHashMap<AgentId, Cell>,

    /// Occupancy per column, maintained on every mutation.
    column_counts: Vec<usize>,
}

impl MultiGrid {
    /// Construct an empty `width` × `height` grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero — `SimConfig::validate` rejects
    /// such configurations before a grid is ever built.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![Vec::new(); width as usize * height as usize],
            positions: FxHashMap::default(),
            column_counts: vec![0; width as usize],
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of agents currently on the grid.
    #[inline]
    pub fn placed_count(&self) -> usize {
        self.positions.len()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` onto the grid at `cell`.
    ///
    /// Errors if the cell is out of bounds or the agent is already placed
    /// (use [`move_agent`][Self::move_agent] to relocate).
    pub fn place(&mut self, agent: AgentId, cell: Cell) -> GridResult<()> {
        self.check_bounds(cell)?;
        if self.positions.contains_key(&agent) {
            return Err(GridError::AlreadyPlaced(agent));
        }
        let idx = self.cell_index(cell);
        self.cells[idx].push(agent);
        self.column_counts[cell.col as usize] += 1;
        self.positions.insert(agent, cell);
        Ok(())
    }

    /// Relocate a placed agent to `to`.
    pub fn move_agent(&mut self, agent: AgentId, to: Cell) -> GridResult<()> {
        self.check_bounds(to)?;
        let from = *self
            .positions
            .get(&agent)
            .ok_or(GridError::NotPlaced(agent))?;
        if from == to {
            return Ok(());
        }
        self.detach(agent, from);
        let idx = self.cell_index(to);
        self.cells[idx].push(agent);
        self.column_counts[to.col as usize] += 1;
        self.positions.insert(agent, to);
        Ok(())
    }

    /// Take `agent` off the grid.  Its position becomes `None`.
    pub fn remove(&mut self, agent: AgentId) -> GridResult<()> {
        let cell = self
            .positions
            .remove(&agent)
            .ok_or(GridError::NotPlaced(agent))?;
        self.detach(agent, cell);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current cell of `agent`, or `None` if it is not on the grid.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Cell> {
        self.positions.get(&agent).copied()
    }

    /// Agents in one cell, in insertion order.  Empty slice if the cell is
    /// out of bounds.
    pub fn cell_members(&self, cell: Cell) -> &[AgentId] {
        if !cell.within(self.width, self.height) {
            return &[];
        }
        &self.cells[self.cell_index(cell)]
    }

    /// All agents in column `col`, row-ascending then insertion order.
    ///
    /// Allocates; use [`column_len`][Self::column_len] when only the
    /// occupancy matters.
    pub fn column_members(&self, col: u16) -> Vec<AgentId> {
        if col >= self.width {
            return Vec::new();
        }
        let start = col as usize * self.height as usize;
        self.cells[start..start + self.height as usize]
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// Occupancy of column `col` — O(1).  Zero for out-of-range columns.
    #[inline]
    pub fn column_len(&self, col: u16) -> usize {
        self.column_counts
            .get(col as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Iterator over every placed agent and its cell, in unspecified order.
    pub fn iter_placed(&self) -> impl Iterator<Item = (AgentId, Cell)> + '_ {
        self.positions.iter().map(|(&a, &c)| (a, c))
    }

    // ── Internal ──────────────────────────────────────────────────────────

    #[inline]
    fn cell_index(&self, cell: Cell) -> usize {
        cell.col as usize * self.height as usize + cell.row as usize
    }

    fn check_bounds(&self, cell: Cell) -> GridResult<()> {
        if cell.within(self.width, self.height) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Remove `agent` from the membership list of `cell`.  The position index
    /// is managed by the caller.
    fn detach(&mut self, agent: AgentId, cell: Cell) {
        let idx = self.cell_index(cell);
        let members = &mut self.cells[idx];
        if let Some(pos) = members.iter().position(|&a| a == agent) {
            members.remove(pos);
            self.column_counts[cell.col as usize] -= 1;
        }
    }
}
