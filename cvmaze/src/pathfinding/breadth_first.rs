use std::collections::VecDeque;

use crate::{grid::Grid, pos::Pos};

use super::PathFinder;

/// Breadth first search.
///
/// Cells are marked visited when queued, so none is queued twice. With unit step cost the first
/// route found is a shortest one.
#[derive(Debug)]
pub struct BreadthFirstSearch;

impl PathFinder for BreadthFirstSearch {
    fn search(&self, grid: &mut Grid, start: Pos, end: Pos) -> Vec<Pos> {
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        grid[start].visited = true;

        while let Some(current) = queue.pop_front() {
            grid[current].paint_visited();
            order.push(current);

            if current == end {
                break;
            }

            for next in grid.open_neighbors(current) {
                let cell = &mut grid[next];
                cell.visited = true;
                cell.parent = Some(current);
                queue.push_back(next);
            }
        }

        order
    }
}
