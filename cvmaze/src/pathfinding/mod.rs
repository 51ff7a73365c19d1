mod a_star;
mod breadth_first;
mod depth_first;
mod dijkstra;
mod queue;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    cell::Cell,
    error::{Endpoint, MazeError},
    grid::Grid,
    pos::Pos,
};
pub use a_star::AStar;
pub use breadth_first::BreadthFirstSearch;
pub use depth_first::DepthFirstSearch;
pub use dijkstra::Dijkstra;

pub trait PathFinder: fmt::Debug + Sync + Send {
    /// Searches from `start` towards `end`, leaving parent links in the grid.
    ///
    /// Returns every cell the search finalized, in the order it did so. The search stops right
    /// after finalizing `end`, or once there is nothing left to reach.
    fn search(&self, grid: &mut Grid, start: Pos, end: Pos) -> Vec<Pos>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathAlgorithm {
    Dijkstra,
    #[default]
    AStar,
    BreadthFirst,
    DepthFirst,
}

impl PathAlgorithm {
    pub const ALL: [PathAlgorithm; 4] = [
        PathAlgorithm::Dijkstra,
        PathAlgorithm::AStar,
        PathAlgorithm::BreadthFirst,
        PathAlgorithm::DepthFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PathAlgorithm::Dijkstra => "Dijkstra's Algorithm",
            PathAlgorithm::AStar => "A* Algorithm",
            PathAlgorithm::BreadthFirst => "Breadth-First Search",
            PathAlgorithm::DepthFirst => "Depth-First Search",
        }
    }

    pub fn finder(self) -> &'static dyn PathFinder {
        match self {
            PathAlgorithm::Dijkstra => &Dijkstra,
            PathAlgorithm::AStar => &AStar,
            PathAlgorithm::BreadthFirst => &BreadthFirstSearch,
            PathAlgorithm::DepthFirst => &DepthFirstSearch,
        }
    }

    /// Whether the found path is always a shortest one.
    pub fn is_optimal(self) -> bool {
        self != PathAlgorithm::DepthFirst
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathAlgorithm {
    type Err = MazeError;

    /// Accepts the display name or a short id, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let short = match key.as_str() {
            "dijkstra" => Some(PathAlgorithm::Dijkstra),
            "astar" | "a*" => Some(PathAlgorithm::AStar),
            "bfs" => Some(PathAlgorithm::BreadthFirst),
            "dfs" => Some(PathAlgorithm::DepthFirst),
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

/// Outcome of a search.
///
/// An empty `path` means the end could not be reached; `visited_in_order` then holds everything
/// that was reachable from the start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Route from start to end, both included.
    pub path: Vec<Cell>,
    pub visited_in_order: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    pub path_length: usize,
    pub visited_count: usize,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn path_positions(&self) -> Vec<Pos> {
        self.path.iter().map(Cell::pos).collect()
    }

    pub fn visited_positions(&self) -> Vec<Pos> {
        self.visited_in_order.iter().map(Cell::pos).collect()
    }

    pub fn stats(&self) -> SolveStats {
        SolveStats {
            path_length: self.path.len(),
            visited_count: self.visited_in_order.len(),
        }
    }
}

/// Searches a copy of `grid` from its start to its end cell.
///
/// The copy is reset first, so leftovers of an earlier search on `grid` do not leak in.
pub fn find_path(grid: &Grid, algorithm: PathAlgorithm) -> Result<Solution, MazeError> {
    let mut grid = grid.clone();
    grid.reset_pathfinding_data();

    let start = grid.endpoint(Endpoint::Start)?;
    let end = grid.endpoint(Endpoint::End)?;

    let order = algorithm.finder().search(&mut grid, start, end);

    let path = if order.last() == Some(&end) {
        reconstruct_path(&grid, start, end)?
    } else {
        Vec::new()
    };

    log::debug!(
        "{} visited {} cells, path of {} cells",
        algorithm,
        order.len(),
        path.len()
    );

    Ok(Solution {
        path: path.into_iter().map(|pos| grid[pos].clone()).collect(),
        visited_in_order: order.into_iter().map(|pos| grid[pos].clone()).collect(),
    })
}

/// Follows parent links back from `end` and returns the route from `start` to `end`.
///
/// Fails instead of looping forever when the links do not lead back to `start` within as many
/// steps as there are cells.
pub fn reconstruct_path(grid: &Grid, start: Pos, end: Pos) -> Result<Vec<Pos>, MazeError> {
    let limit = grid.len();
    let corrupt = MazeError::CorruptParentChain { limit };

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        if path.len() > limit {
            return Err(corrupt);
        }

        current = grid
            .get(current)
            .and_then(|cell| cell.parent)
            .ok_or_else(|| corrupt.clone())?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
