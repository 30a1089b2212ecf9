pub mod cell;
pub mod graph;

pub use cell::Cell;
pub use graph::{Edge, WeightedGraph};

use crate::{error::MazeError, solvers::find_path};

/// A generated (or restored) maze: the passage graph, the grid size and the two
/// openings on the outer wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    graph: WeightedGraph<Cell>,
    rows: u16,
    cols: u16,
    entry: Cell,
    exit: Cell,
}

impl Maze {
    /// Smallest number of rows or columns a maze can have.
    pub const MIN_SIZE: u16 = 4;

    /// Assembles a maze from its parts, checking the invariants that do not need a
    /// full traversal: dimensions, and distinct entry/exit cells that belong to the graph.
    pub fn from_parts(
        graph: WeightedGraph<Cell>,
        rows: u16,
        cols: u16,
        entry: Cell,
        exit: Cell,
    ) -> Result<Self, MazeError> {
        Self::check_dimensions(rows, cols)?;
        if entry == exit {
            return Err(MazeError::Malformed("entry and exit are the same cell"));
        }
        if !graph.contains(&entry) || !graph.contains(&exit) {
            return Err(MazeError::Malformed("entry or exit is not part of the maze"));
        }
        Ok(Maze {
            graph,
            rows,
            cols,
            entry,
            exit,
        })
    }

    pub fn check_dimensions(rows: u16, cols: u16) -> Result<(), MazeError> {
        if rows < Self::MIN_SIZE || cols < Self::MIN_SIZE {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    pub fn graph(&self) -> &WeightedGraph<Cell> {
        &self.graph
    }

    /// Number of rows in the rendered grid.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns in the rendered grid.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn entry(&self) -> Cell {
        self.entry
    }

    pub fn exit(&self) -> Cell {
        self.exit
    }

    /// Checks if the cell lies on the outer ring of the grid.
    pub fn is_boundary(&self, cell: Cell) -> bool {
        cell.row() == 0
            || cell.col() == 0
            || cell.row() == self.rows - 1
            || cell.col() == self.cols - 1
    }

    /// The shortest way from the entry to the exit, in travel order.
    pub fn escape_path(&self) -> Vec<Edge<Cell>> {
        find_path(&self.graph, &self.entry, &self.exit)
    }
}
