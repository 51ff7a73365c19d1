use rand::Rng as _;

use crate::{
    cell::CellKind,
    grid::Grid,
    pos::Pos,
    steps::{Carver, Steps},
};

use super::{MazeGenerator, Random};

/// Chance of an interior cell becoming a wall.
pub const WALL_PROBABILITY: f64 = 0.3;

/// Scatters walls over an open grid, with no regard for connectivity.
///
/// The whole grid appears in a single step. Start and end may end up cut off from each other.
#[derive(Debug)]
pub struct RandomPlacement;

impl MazeGenerator for RandomPlacement {
    fn generate(&self, grid: Grid, rng: &mut Random) -> (Grid, Steps) {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut carver = Carver::new(grid);

        for row in 0..rows {
            for col in 0..cols {
                let pos = Pos::new(row, col);
                let kind = if carver.grid().is_border(pos) || rng.gen_bool(WALL_PROBABILITY) {
                    CellKind::Wall
                } else {
                    CellKind::Path
                };
                carver.set(pos, kind);
            }
        }

        carver.commit();
        carver.finish()
    }
}
