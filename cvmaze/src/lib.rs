//! Maze generation and grid path finding.
//!
//! A maze is a [`Grid`] of [`Cell`]s, carved by one of the [`MazeAlgorithm`]s and searched by one
//! of the [`PathAlgorithm`]s. Generation records every carve as a [`Step`], so the construction
//! can be played back, searching records the order in which cells were explored.
//!
//! ```
//! use cvmaze::{find_path, generate_maze_seeded, MazeAlgorithm, PathAlgorithm};
//!
//! let (grid, steps) = generate_maze_seeded(11, 21, MazeAlgorithm::Prims, Some(7)).unwrap();
//! let solution = find_path(&grid, PathAlgorithm::AStar).unwrap();
//!
//! assert!(!steps.is_empty());
//! assert!(solution.is_found());
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod pathfinding;
pub mod pos;
pub mod steps;

pub use cell::{Cell, CellKind, UNSET};
pub use config::MazeConfig;
pub use error::{Endpoint, MazeError};
pub use generator::{generate_maze, generate_maze_seeded, MazeAlgorithm, MazeGenerator, Random};
pub use grid::Grid;
pub use pathfinding::{find_path, PathAlgorithm, PathFinder, Solution, SolveStats};
pub use pos::Pos;
pub use steps::{Change, Step, Steps};

/// All-wall grid of the given size.
pub fn initialize_grid(rows: usize, cols: usize) -> Result<Grid, MazeError> {
    Grid::new(rows, cols)
}

/// Copy of `grid` with the start and end cells placed.
pub fn set_start_and_end(grid: &Grid) -> Result<Grid, MazeError> {
    let mut grid = grid.clone();
    grid.set_start_and_end()?;
    Ok(grid)
}

/// Copy of `grid` with all search state cleared.
pub fn reset_pathfinding_data(grid: &Grid) -> Grid {
    let mut grid = grid.clone();
    grid.reset_pathfinding_data();
    grid
}
