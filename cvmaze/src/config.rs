use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    error::MazeError,
    generator::{generate_maze_seeded, MazeAlgorithm},
    grid::Grid,
    pathfinding::PathAlgorithm,
    steps::Steps,
};

/// Everything needed to reproduce a single run.
///
/// Fields left out of a serialized config take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Side of a drawn cell, in pixels.
    pub cell_size: u32,
    pub wall_thickness: u32,
    /// Playback speed, 1 (slowest) to 99 (fastest).
    pub animation_speed: u8,
    pub maze_algorithm: MazeAlgorithm,
    pub path_algorithm: PathAlgorithm,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            rows: 25,
            cols: 45,
            cell_size: 20,
            wall_thickness: 2,
            animation_speed: 50,
            maze_algorithm: MazeAlgorithm::default(),
            path_algorithm: PathAlgorithm::default(),
            seed: None,
        }
    }
}

impl MazeConfig {
    pub const MIN_SPEED: u8 = 1;
    pub const MAX_SPEED: u8 = 99;

    /// Delay between two played back steps.
    pub fn step_delay(&self) -> Duration {
        let speed = self
            .animation_speed
            .clamp(Self::MIN_SPEED, Self::MAX_SPEED);
        Duration::from_millis(100 - speed as u64)
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        Grid::endpoints_for(self.rows, self.cols).map(|_| ())
    }

    /// Generates the maze this config describes.
    pub fn generate(&self) -> Result<(Grid, Steps), MazeError> {
        self.validate()?;
        generate_maze_seeded(self.rows, self.cols, self.maze_algorithm, self.seed)
    }
}
