mod prims;
mod random_placement;
mod recursive_backtracking;

use std::{fmt, str::FromStr};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};

use crate::{error::MazeError, grid::Grid, pos::Pos, steps::Steps};
pub use prims::Prims;
pub use random_placement::RandomPlacement;
pub use recursive_backtracking::RecursiveBacktracking;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// First room carved by the lattice generators.
pub const ORIGIN: Pos = Pos(1, 1);

/// Distance between two neighbouring rooms. Rooms sit on odd coordinates, the cell between two
/// of them is the wall that gets carved to join them.
pub const ROOM_STRIDE: i32 = 2;

pub trait MazeGenerator: fmt::Debug + Sync + Send {
    /// Carves an all-wall grid into a maze.
    ///
    /// Returns the carved grid and the steps that led to it, first carve first. Start and end are
    /// not placed here.
    fn generate(&self, grid: Grid, rng: &mut Random) -> (Grid, Steps);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MazeAlgorithm {
    #[default]
    RecursiveBacktracking,
    Prims,
    Kruskals,
    Random,
}

impl MazeAlgorithm {
    pub const ALL: [MazeAlgorithm; 4] = [
        MazeAlgorithm::RecursiveBacktracking,
        MazeAlgorithm::Prims,
        MazeAlgorithm::Kruskals,
        MazeAlgorithm::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MazeAlgorithm::RecursiveBacktracking => "Recursive Backtracking",
            MazeAlgorithm::Prims => "Prim's Algorithm",
            MazeAlgorithm::Kruskals => "Kruskal's Algorithm",
            MazeAlgorithm::Random => "Random Maze",
        }
    }

    /// Generator carving mazes for this algorithm.
    ///
    /// Kruskal's has no carver of its own and is served by recursive backtracking.
    pub fn generator(self) -> &'static dyn MazeGenerator {
        match self {
            MazeAlgorithm::RecursiveBacktracking | MazeAlgorithm::Kruskals => {
                &RecursiveBacktracking
            }
            MazeAlgorithm::Prims => &Prims,
            MazeAlgorithm::Random => &RandomPlacement,
        }
    }
}

impl fmt::Display for MazeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeAlgorithm {
    type Err = MazeError;

    /// Accepts the display name or a short id, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let short = match key.as_str() {
            "backtracking" | "recursive-backtracking" => Some(MazeAlgorithm::RecursiveBacktracking),
            "prims" | "prim" => Some(MazeAlgorithm::Prims),
            "kruskals" | "kruskal" => Some(MazeAlgorithm::Kruskals),
            "random" => Some(MazeAlgorithm::Random),
            _ => None,
        };

        short
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|algo| algo.name().to_lowercase() == key)
            })
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}

/// Builds a maze of the given size and places start and end on it.
///
/// The returned steps end with the carved grid as it was before the start and end were placed.
pub fn generate_maze(
    rows: usize,
    cols: usize,
    algorithm: MazeAlgorithm,
    rng: &mut Random,
) -> Result<(Grid, Steps), MazeError> {
    Grid::endpoints_for(rows, cols)?;
    let grid = Grid::new(rows, cols)?;

    if algorithm == MazeAlgorithm::Kruskals {
        log::debug!(
            "{} has no carver, using {}",
            algorithm,
            MazeAlgorithm::RecursiveBacktracking
        );
    }

    let (mut grid, steps) = algorithm.generator().generate(grid, rng);
    log::debug!(
        "Generated {}x{} maze with {} in {} steps",
        rows,
        cols,
        algorithm,
        steps.len()
    );

    grid.set_start_and_end()?;
    Ok((grid, steps))
}

/// Same as [`generate_maze`], seeding the generator from `seed` or from entropy when absent.
pub fn generate_maze_seeded(
    rows: usize,
    cols: usize,
    algorithm: MazeAlgorithm,
    seed: Option<u64>,
) -> Result<(Grid, Steps), MazeError> {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    log::trace!("Maze seed: {}", seed);

    let mut rng = Random::seed_from_u64(seed);
    generate_maze(rows, cols, algorithm, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;

    #[test]
    fn parse_names() {
        for algo in MazeAlgorithm::ALL {
            assert_eq!(algo.name().parse::<MazeAlgorithm>(), Ok(algo));
            assert_eq!(algo.to_string().to_uppercase().parse(), Ok(algo));
        }

        assert_eq!("prims".parse(), Ok(MazeAlgorithm::Prims));
        assert_eq!(" Random ".parse(), Ok(MazeAlgorithm::Random));
        assert_eq!(
            "backtracking".parse(),
            Ok(MazeAlgorithm::RecursiveBacktracking)
        );
        assert_eq!(
            "eller".parse::<MazeAlgorithm>(),
            Err(MazeError::UnknownAlgorithm("eller".to_string()))
        );
    }

    #[test]
    fn rejects_small_grids() {
        let mut rng = Random::seed_from_u64(0);
        for (rows, cols) in [(0, 0), (2, 9), (9, 2), (3, 3)] {
            assert_eq!(
                generate_maze(rows, cols, MazeAlgorithm::Prims, &mut rng).err(),
                Some(MazeError::InvalidDimensions { rows, cols })
            );
        }
    }

    #[test]
    fn places_endpoints() {
        for algo in MazeAlgorithm::ALL {
            for (rows, cols) in [(3, 4), (5, 5), (8, 6), (11, 21)] {
                let (grid, steps) = generate_maze_seeded(rows, cols, algo, Some(7)).unwrap();

                assert_eq!((grid.rows(), grid.cols()), (rows, cols));
                assert_eq!(grid.count_kind(CellKind::Start), 1);
                assert_eq!(grid.count_kind(CellKind::End), 1);
                assert_eq!(grid.start(), Some(Pos(1, 1)));
                assert_eq!(grid.end(), Some(Pos::new(rows - 2, cols - 2)));
                assert!(!steps.is_empty());
            }
        }
    }

    #[test]
    fn seeded_is_deterministic() {
        for algo in MazeAlgorithm::ALL {
            let a = generate_maze_seeded(15, 17, algo, Some(42)).unwrap();
            let b = generate_maze_seeded(15, 17, algo, Some(42)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn kruskals_falls_back_to_backtracking() {
        let mut rng_a = Random::seed_from_u64(99);
        let mut rng_b = Random::seed_from_u64(99);

        let kruskals = generate_maze(13, 13, MazeAlgorithm::Kruskals, &mut rng_a).unwrap();
        let backtracking =
            generate_maze(13, 13, MazeAlgorithm::RecursiveBacktracking, &mut rng_b).unwrap();

        assert_eq!(kruskals, backtracking);
    }

    #[test]
    fn last_step_is_carved_grid() {
        for algo in MazeAlgorithm::ALL {
            let (grid, steps) = generate_maze_seeded(9, 11, algo, Some(3)).unwrap();

            let mut last = steps.last_snapshot().unwrap();
            assert_eq!(last.count_kind(CellKind::Start), 0);
            last.set_start_and_end().unwrap();
            assert_eq!(last, grid);
        }
    }
}
