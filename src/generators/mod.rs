use rand::{Rng, SeedableRng, rngs::StdRng};

mod prim;

pub use prim::minimum_spanning_tree;

use crate::{
    error::MazeError,
    maze::{Cell, Edge, Maze, WeightedGraph},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates perfect mazes: a randomly weighted lattice reduced to its minimum spanning
/// tree, opened up with an entry and an exit on the outer wall.
pub struct MazeGenerator<R = StdRng> {
    rng: R,
}

impl MazeGenerator<StdRng> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_rng(get_rng(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Lattice edge weights are drawn from `0..WEIGHT_BOUND`.
    pub const WEIGHT_BOUND: u32 = 128;
    /// Distance between two neighboring lattice cells. The cell in between is the wall
    /// that gets carved when the two are connected.
    const STRIDE: u16 = 2;

    pub fn with_rng(rng: R) -> Self {
        MazeGenerator { rng }
    }

    /// Generates a new `rows` x `cols` maze.
    pub fn generate(&mut self, rows: u16, cols: u16) -> Result<Maze, MazeError> {
        Maze::check_dimensions(rows, cols)?;

        let lattice = self.build_lattice(rows, cols);
        let mut graph = minimum_spanning_tree(&lattice);
        let (entry, exit) = self.place_entry_exit(&mut graph, rows, cols);

        tracing::info!(
            "[generator] generated {}x{} maze, entry {}, exit {}",
            rows,
            cols,
            entry,
            exit
        );
        Maze::from_parts(graph, rows, cols, entry, exit)
    }

    /// Connects every odd (row, col) cell to its stride neighbors with random weights.
    ///
    /// Neighbors are clamped to `[1, rows - 2] x [1, cols - 2]`, so on even dimensions the
    /// last interior row and column are reached by shorter edges.
    fn build_lattice(&mut self, rows: u16, cols: u16) -> WeightedGraph<Cell> {
        let (max_row, max_col) = (rows - 2, cols - 2);
        let mut graph = WeightedGraph::new();
        for row in (1..=max_row).step_by(Self::STRIDE as usize) {
            for col in (1..=max_col).step_by(Self::STRIDE as usize) {
                let from = Cell::new(row, col);
                for to in from.neighbors(1..=max_row, 1..=max_col, Self::STRIDE) {
                    let weight = self.rng.random_range(0..Self::WEIGHT_BOUND);
                    graph.add_edge(from, to, weight);
                }
            }
        }
        tracing::debug!(
            "[generator] lattice with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// Opens the maze with one entry (top or left wall) and one exit (right or bottom wall).
    ///
    /// One candidate opening is drawn per side. After a random pick on both groups, the
    /// exit is switched to the candidate farthest (Manhattan distance) from the entry; on
    /// ties the earlier candidate is kept. Returns the entry and exit cells, which sit on
    /// the outer ring.
    fn place_entry_exit(
        &mut self,
        graph: &mut WeightedGraph<Cell>,
        rows: u16,
        cols: u16,
    ) -> (Cell, Cell) {
        let (max_row, max_col) = (rows - 2, cols - 2);

        let top = Cell::new(1, self.random_on_stride(1, max_col));
        let right = Cell::new(self.random_on_stride(1, max_row), max_col);
        let bottom = Cell::new(max_row, self.random_on_stride(1, max_col));
        let left = Cell::new(self.random_on_stride(1, max_row), 1);

        // Entries go from the outer wall inwards, exits from the inside outwards
        let entries = [
            Edge::unweighted(Cell::new(0, top.col()), top),
            Edge::unweighted(Cell::new(left.row(), 0), left),
        ];
        let exits = [
            Edge::unweighted(right, Cell::new(right.row(), right.col() + 1)),
            Edge::unweighted(bottom, Cell::new(bottom.row() + 1, bottom.col())),
        ];

        let entry = &entries[self.rng.random_range(0..entries.len())];
        let mut exit = &exits[self.rng.random_range(0..exits.len())];
        for candidate in &exits {
            if entry.from.manhattan_distance(&candidate.from)
                > entry.from.manhattan_distance(&exit.from)
            {
                exit = candidate;
            }
        }
        tracing::debug!("[generator] entry edge {:?}, exit edge {:?}", entry, exit);

        graph.insert_edge(entry);
        graph.insert_edge(exit);
        (entry.from, exit.to)
    }

    /// Random value in `lower..=upper` that is `lower` plus a multiple of the stride.
    fn random_on_stride(&mut self, lower: u16, upper: u16) -> u16 {
        let steps = (upper - lower) / Self::STRIDE + 1;
        lower + Self::STRIDE * self.rng.random_range(0..steps)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Number of vertices reachable from `start`.
    fn reachable(graph: &WeightedGraph<Cell>, start: Cell) -> usize {
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(cell) = stack.pop() {
            for edge in graph.adjacent(&cell) {
                if seen.insert(edge.to) {
                    stack.push(edge.to);
                }
            }
        }
        seen.len()
    }

    fn assert_perfect(maze: &Maze) {
        let graph = maze.graph();
        // Entry and exit each add one outer cell and one edge to the tree
        let interior = graph.vertex_count() - 2;
        assert_eq!(graph.edge_count(), interior - 1 + 2);
        assert_eq!(reachable(graph, maze.entry()), graph.vertex_count());
        for cell in graph.vertices() {
            assert!(cell.row() < maze.rows() && cell.col() < maze.cols());
        }
    }

    #[test]
    fn test_generate_rejects_small_mazes() {
        let mut generator = MazeGenerator::new(Some(0));
        for (rows, cols) in [(3, 10), (10, 3), (0, 0), (3, 3)] {
            assert!(matches!(
                generator.generate(rows, cols),
                Err(MazeError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_generated_mazes_are_perfect() {
        let mut generator = MazeGenerator::new(Some(42));
        for (rows, cols) in [(4, 4), (5, 5), (4, 9), (10, 7), (21, 21), (30, 16)] {
            let maze = generator.generate(rows, cols).expect("valid dimensions");
            assert_perfect(&maze);
        }
    }

    #[test]
    fn test_entry_and_exit_on_the_outer_ring() {
        let mut generator = MazeGenerator::new(Some(7));
        for _ in 0..50 {
            let maze = generator.generate(11, 13).expect("valid dimensions");
            let (entry, exit) = (maze.entry(), maze.exit());
            assert_ne!(entry, exit);
            assert!(entry.row() == 0 || entry.col() == 0);
            assert!(exit.row() == maze.rows() - 1 || exit.col() == maze.cols() - 1);
            // The openings are leaves hanging off the tree
            assert_eq!(maze.graph().adjacent(&entry).len(), 1);
            assert_eq!(maze.graph().adjacent(&exit).len(), 1);
        }
    }

    #[test]
    fn test_escape_path_connects_entry_and_exit() {
        let mut generator = MazeGenerator::new(Some(3));
        for size in [4, 6, 9, 15, 40] {
            let maze = generator.generate(size, size).expect("valid dimensions");
            let path = maze.escape_path();
            assert!(!path.is_empty());
            assert_eq!(path[0].from, maze.entry());
            assert_eq!(path[path.len() - 1].to, maze.exit());
            for pair in path.windows(2) {
                assert_eq!(pair[0].to, pair[1].from);
            }
        }
    }

    #[test]
    fn test_smallest_maze() {
        let mut generator = MazeGenerator::new(None);
        let maze = generator.generate(4, 4).expect("valid dimensions");
        let graph = maze.graph();

        // The only stride cell (1, 1) reaches (1, 2) and (2, 1) through clamping
        let interior = [Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 1)];
        for cell in &interior {
            assert!(graph.contains(cell));
        }
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);

        // Both entry candidates attach to (1, 1), the exit to one of its neighbors
        assert!(maze.entry() == Cell::new(0, 1) || maze.entry() == Cell::new(1, 0));
        assert!(maze.exit() == Cell::new(1, 3) || maze.exit() == Cell::new(3, 1));
        assert_eq!(maze.escape_path().len(), 3);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = MazeGenerator::new(Some(99)).generate(17, 23).expect("valid");
        let b = MazeGenerator::new(Some(99)).generate(17, 23).expect("valid");
        assert_eq!(a, b);
        assert_eq!(a.graph().edges(), b.graph().edges());
    }

    #[test]
    fn test_random_on_stride() {
        let mut generator = MazeGenerator::new(Some(5));
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let value = generator.random_on_stride(1, 7);
            assert!(value % 2 == 1 && value <= 7);
            seen.insert(value);
        }
        assert_eq!(seen.len(), 4);
        // An even upper bound is never reached
        for _ in 0..50 {
            assert!(generator.random_on_stride(1, 2) == 1);
        }
    }
}
