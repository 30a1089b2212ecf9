//! Perfect maze generation and escape-path solving.
//!
//! A maze is built as a randomly weighted lattice graph reduced to its minimum spanning
//! tree ([`generators`]), opened with an entry and an exit on the outer wall, solved with
//! breadth-first search ([`solvers`]) and saved to or loaded from `.txt` files
//! ([`storage`]).

pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod storage;

pub use error::MazeError;
pub use maze::{Cell, Edge, Maze, WeightedGraph};
