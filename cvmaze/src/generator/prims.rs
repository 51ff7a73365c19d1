use rand::{seq::SliceRandom as _, Rng as _};

use crate::{
    cell::CellKind,
    grid::Grid,
    steps::{Carver, Steps},
};

use super::{MazeGenerator, Random, ORIGIN, ROOM_STRIDE};

/// Randomized Prim's algorithm.
///
/// Keeps a frontier of wall rooms next to the carved area and joins a random one of them to a
/// random carved neighbour, until the frontier runs dry.
#[derive(Debug)]
pub struct Prims;

impl MazeGenerator for Prims {
    fn generate(&self, grid: Grid, rng: &mut Random) -> (Grid, Steps) {
        let mut carver = Carver::new(grid);
        if !carver.grid().is_in_bounds(ORIGIN) {
            return carver.finish();
        }

        carver.set(ORIGIN, CellKind::Path);
        carver.commit();

        // A room can be pushed once per carved neighbour, so this is a list and not a set
        let mut frontier = carver.grid().wall_neighbors(ORIGIN, ROOM_STRIDE).into_vec();

        while !frontier.is_empty() {
            let current = frontier.swap_remove(rng.gen_range(0..frontier.len()));

            // duplicate of a room joined since it was pushed
            if carver.grid().kind(current) != Some(CellKind::Wall) {
                continue;
            }

            let carved = carver
                .grid()
                .neighbors_of_kind(current, ROOM_STRIDE, CellKind::Path);
            let Some(&joined) = carved.choose(rng) else {
                continue;
            };

            carver.set(current.midpoint(joined), CellKind::Path);
            carver.set(current, CellKind::Path);
            carver.commit();

            frontier.extend(carver.grid().wall_neighbors(current, ROOM_STRIDE));
        }

        carver.finish()
    }
}
