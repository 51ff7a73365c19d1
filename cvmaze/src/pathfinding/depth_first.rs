use crate::{grid::Grid, pos::Pos};

use super::PathFinder;

/// Depth first search with an explicit stack.
///
/// Cells are marked visited when pushed. The route found is not necessarily a shortest one.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl PathFinder for DepthFirstSearch {
    fn search(&self, grid: &mut Grid, start: Pos, end: Pos) -> Vec<Pos> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        grid[start].visited = true;

        while let Some(current) = stack.pop() {
            grid[current].paint_visited();
            order.push(current);

            if current == end {
                break;
            }

            for next in grid.open_neighbors(current) {
                let cell = &mut grid[next];
                cell.visited = true;
                cell.parent = Some(current);
                stack.push(next);
            }
        }

        order
    }
}
