use std::{fmt, io, path::PathBuf};

/// Everything that can go wrong while generating, saving or loading a maze.
#[derive(Debug)]
pub enum MazeError {
    /// Requested (or stored) dimensions are below the minimum maze size
    InvalidDimensions { rows: u16, cols: u16 },
    /// The path does not carry the maze file extension
    InvalidFileFormat(PathBuf),
    /// The maze file to load does not exist
    FileNotFound(PathBuf),
    Io(io::Error),
    /// The maze snapshot could not be encoded or decoded
    Serialization(serde_json::Error),
    /// The decoded snapshot does not describe a valid maze
    Malformed(&'static str),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimensions { rows, cols } => write!(
                f,
                "Maze dimensions should be greater than 3 (got {}x{})",
                rows, cols
            ),
            MazeError::InvalidFileFormat(path) => write!(
                f,
                "Unsupported format for {}. Please use a .txt file",
                path.display()
            ),
            MazeError::FileNotFound(path) => {
                write!(f, "The file {} does not exist", path.display())
            }
            MazeError::Io(err) => write!(f, "I/O error: {}", err),
            MazeError::Serialization(err) => write!(f, "Cannot read the maze data: {}", err),
            MazeError::Malformed(reason) => write!(f, "The maze file is corrupted: {}", reason),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeError::Io(err) => Some(err),
            MazeError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(err: io::Error) -> Self {
        MazeError::Io(err)
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(err: serde_json::Error) -> Self {
        MazeError::Serialization(err)
    }
}
