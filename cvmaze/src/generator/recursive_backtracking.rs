use hashbrown::HashSet;
use rand::seq::SliceRandom as _;

use crate::{
    cell::CellKind,
    grid::{Grid, Neighbors},
    steps::{Carver, Steps},
};

use super::{MazeGenerator, Random, ORIGIN, ROOM_STRIDE};

/// Depth first carving with an explicit stack.
///
/// Walks from room to room, always into a random unvisited neighbour, and backs up once it runs
/// out of them. Every room is visited exactly once, so the result is a spanning tree.
#[derive(Debug)]
pub struct RecursiveBacktracking;

impl MazeGenerator for RecursiveBacktracking {
    fn generate(&self, grid: Grid, rng: &mut Random) -> (Grid, Steps) {
        let mut carver = Carver::new(grid);
        if !carver.grid().is_in_bounds(ORIGIN) {
            return carver.finish();
        }

        let mut visited = HashSet::new();
        let mut stack = vec![ORIGIN];

        carver.set(ORIGIN, CellKind::Path);
        carver.commit();
        visited.insert(ORIGIN);

        while let Some(&current) = stack.last() {
            let unvisited_neighbors = carver
                .grid()
                .wall_neighbors(current, ROOM_STRIDE)
                .into_iter()
                .filter(|cell| !visited.contains(cell))
                .collect::<Neighbors>();

            let Some(&next) = unvisited_neighbors.choose(rng) else {
                stack.pop();
                continue;
            };

            carver.set(current.midpoint(next), CellKind::Path);
            carver.set(next, CellKind::Path);
            carver.commit();

            visited.insert(next);
            stack.push(next);
        }

        log::trace!("Backtracking carved {} rooms", visited.len());
        carver.finish()
    }
}
