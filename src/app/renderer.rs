use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, StyledContent, Stylize},
};

use crate::maze::{Cell, Edge, Maze};

/// What a grid position looks like when the maze is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Passage,
    /// Part of the escape route
    Route,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: usize = 2;

    pub fn symbol(self) -> &'static str {
        match self {
            Tile::Wall => "\u{2588}\u{2588}",
            Tile::Passage => "  ",
            Tile::Route => "//",
        }
    }

    pub fn styled(self) -> StyledContent<&'static str> {
        let symbol = self.symbol();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                Tile::WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        match self {
            Tile::Wall => symbol.with(Color::White),
            Tile::Passage => symbol.with(Color::Reset),
            Tile::Route => symbol.with(Color::Yellow).bold(),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled())
    }
}

/// Prints mazes as a grid of two-column tiles.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    colored: bool,
}

impl Renderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Lays out the maze as `rows` x `cols` tiles.
    ///
    /// Everything starts as wall. Every edge of the maze carves the cells it spans, and
    /// with `with_route` the edges of the escape path are painted over them afterwards.
    pub fn tiles(maze: &Maze, with_route: bool) -> Vec<Vec<Tile>> {
        let mut tiles = vec![vec![Tile::Wall; maze.cols() as usize]; maze.rows() as usize];
        Self::paint(&mut tiles, &maze.graph().edges(), Tile::Passage);
        if with_route {
            Self::paint(&mut tiles, &maze.escape_path(), Tile::Route);
        }
        tiles
    }

    /// Fills the bounding box of each edge. Positions outside the grid are ignored.
    fn paint(tiles: &mut [Vec<Tile>], edges: &[Edge<Cell>], tile: Tile) {
        for edge in edges {
            let (from, to) = (edge.from, edge.to);
            let rows = from.row().min(to.row())..=from.row().max(to.row());
            for row in rows {
                let Some(line) = tiles.get_mut(row as usize) else {
                    continue;
                };
                let cols = from.col().min(to.col())..=from.col().max(to.col());
                for col in cols {
                    if let Some(slot) = line.get_mut(col as usize) {
                        *slot = tile;
                    }
                }
            }
        }
    }

    /// Writes the maze to `out`, one line per grid row.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        maze: &Maze,
        with_route: bool,
    ) -> std::io::Result<()> {
        for line in Self::tiles(maze, with_route) {
            for tile in line {
                if self.colored {
                    queue!(out, style::PrintStyledContent(tile.styled()))?;
                } else {
                    out.write_all(tile.symbol().as_bytes())?;
                }
            }
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}
