//! Saving and loading mazes.
//!
//! A maze file is a JSON record holding the graph's edge records, the dimensions and the
//! two openings, in that order. Maze files must use the `.txt` extension.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::MazeError,
    maze::{Cell, Edge, Maze, WeightedGraph},
};

/// Extension every maze file must carry.
pub const MAZE_FILE_EXTENSION: &str = "txt";

#[derive(Serialize, Deserialize)]
struct StoredEdge {
    from: Cell,
    to: Cell,
    weight: u32,
}

#[derive(Serialize, Deserialize)]
struct MazeRecord {
    edges: Vec<StoredEdge>,
    rows: u16,
    cols: u16,
    entry: Cell,
    exit: Cell,
}

impl From<&Maze> for MazeRecord {
    fn from(maze: &Maze) -> Self {
        MazeRecord {
            edges: maze
                .graph()
                .edges()
                .into_iter()
                .map(|edge| StoredEdge {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                })
                .collect(),
            rows: maze.rows(),
            cols: maze.cols(),
            entry: maze.entry(),
            exit: maze.exit(),
        }
    }
}

impl TryFrom<MazeRecord> for Maze {
    type Error = MazeError;

    fn try_from(record: MazeRecord) -> Result<Self, Self::Error> {
        let mut graph = WeightedGraph::new();
        for edge in record.edges {
            graph.insert_edge(&Edge::new(edge.from, edge.to, edge.weight));
        }
        if graph
            .vertices()
            .any(|cell| cell.row() >= record.rows || cell.col() >= record.cols)
        {
            return Err(MazeError::Malformed("a passage lies outside the maze"));
        }
        Maze::from_parts(graph, record.rows, record.cols, record.entry, record.exit)
    }
}

fn has_maze_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension == MAZE_FILE_EXTENSION)
}

/// Writes `maze` to `path`.
///
/// The path is checked before anything touches the filesystem. The snapshot is written
/// to a temporary sibling file first and then moved over `path`, so a failed save never
/// leaves a half-written maze file behind.
pub fn save(maze: &Maze, path: impl AsRef<Path>) -> Result<(), MazeError> {
    let path = path.as_ref();
    if !has_maze_extension(path) {
        return Err(MazeError::InvalidFileFormat(path.to_path_buf()));
    }

    let contents = serde_json::to_string(&MazeRecord::from(maze))?;
    let staging = staging_path(path);
    if let Err(err) = fs::write(&staging, contents).and_then(|_| fs::rename(&staging, path)) {
        // Best effort, the staging file may not even exist
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    tracing::info!("[storage] saved maze to {}", path.display());
    Ok(())
}

/// Reads a maze back from `path`.
///
/// A missing file is reported before a wrong extension.
pub fn load(path: impl AsRef<Path>) -> Result<Maze, MazeError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MazeError::FileNotFound(path.to_path_buf()));
    }
    if !has_maze_extension(path) {
        return Err(MazeError::InvalidFileFormat(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let record: MazeRecord = serde_json::from_str(&contents)?;
    let maze = Maze::try_from(record)?;

    tracing::info!(
        "[storage] loaded {}x{} maze from {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(maze)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::generators::MazeGenerator;

    /// Unique path under the system temp directory.
    fn temp_path(name: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("mazerun-{}-{}-{}", std::process::id(), id, name))
    }

    #[test]
    fn test_round_trip() {
        let maze = MazeGenerator::new(Some(1))
            .generate(15, 12)
            .expect("valid dimensions");
        let path = temp_path("round-trip.txt");

        save(&maze, &path).expect("save succeeds");
        let loaded = load(&path).expect("load succeeds");
        fs::remove_file(&path).ok();

        assert_eq!(loaded, maze);
        assert_eq!(loaded.rows(), 15);
        assert_eq!(loaded.cols(), 12);
        assert_eq!(loaded.entry(), maze.entry());
        assert_eq!(loaded.exit(), maze.exit());
        assert_eq!(loaded.escape_path().len(), maze.escape_path().len());
    }

    #[test]
    fn test_save_overwrites_previous_maze() {
        let mut generator = MazeGenerator::new(Some(2));
        let first = generator.generate(9, 9).expect("valid dimensions");
        let second = generator.generate(11, 7).expect("valid dimensions");
        let path = temp_path("overwrite.txt");

        save(&first, &path).expect("save succeeds");
        save(&second, &path).expect("save succeeds");
        let loaded = load(&path).expect("load succeeds");
        fs::remove_file(&path).ok();

        assert_eq!(loaded, second);
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_save_rejects_wrong_extension() {
        let maze = MazeGenerator::new(Some(3))
            .generate(5, 5)
            .expect("valid dimensions");
        for name in ["maze", "maze.json", "maze.txt.bak"] {
            let path = temp_path(name);
            assert!(matches!(
                save(&maze, &path),
                Err(MazeError::InvalidFileFormat(_))
            ));
            assert!(!path.exists());
            assert!(!staging_path(&path).exists());
        }
    }

    #[test]
    fn test_load_missing_file_first() {
        // Missing and wrongly named: existence is checked first
        let path = temp_path("missing.dat");
        assert!(matches!(load(&path), Err(MazeError::FileNotFound(_))));
    }

    #[test]
    fn test_load_rejects_wrong_extension() {
        let path = temp_path("maze.json");
        fs::write(&path, "{}").expect("write fixture");
        let result = load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MazeError::InvalidFileFormat(_))));
    }

    #[test]
    fn test_load_garbage() {
        let path = temp_path("garbage.txt");
        fs::write(&path, "not a maze").expect("write fixture");
        let result = load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MazeError::Serialization(_))));
    }

    #[test]
    fn test_load_checks_invariants() {
        let path = temp_path("small.txt");
        let record = r#"{"edges":[{"from":{"row":0,"col":1},"to":{"row":1,"col":1},"weight":0}],
            "rows":3,"cols":3,"entry":{"row":0,"col":1},"exit":{"row":1,"col":1}}"#;
        fs::write(&path, record).expect("write fixture");
        let result = load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MazeError::InvalidDimensions { .. })));

        let path = temp_path("outside.txt");
        let record = r#"{"edges":[{"from":{"row":0,"col":1},"to":{"row":9,"col":1},"weight":0}],
            "rows":4,"cols":4,"entry":{"row":0,"col":1},"exit":{"row":9,"col":1}}"#;
        fs::write(&path, record).expect("write fixture");
        let result = load(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MazeError::Malformed(_))));
    }

    #[test]
    fn test_record_field_order() {
        let maze = MazeGenerator::new(Some(4))
            .generate(4, 4)
            .expect("valid dimensions");
        let json = serde_json::to_string(&MazeRecord::from(&maze)).expect("serializable");
        let positions = ["\"edges\"", "\"rows\"", "\"cols\"", "\"entry\"", "\"exit\""]
            .map(|key| json.find(key).expect("key present"));
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
