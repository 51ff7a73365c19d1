use crate::{grid::Grid, pos::Pos};

use super::{queue::DiscoveryQueue, PathFinder};

/// Dijkstra's algorithm with unit step cost.
///
/// Among equally distant cells the one discovered first is finalized first. Improving a distance
/// pushes a new entry, older ones are skipped when popped.
#[derive(Debug)]
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn search(&self, grid: &mut Grid, start: Pos, end: Pos) -> Vec<Pos> {
        let mut order = Vec::new();
        let mut queue = DiscoveryQueue::new();

        grid[start].distance = 0;
        queue.push(start, 0);

        while let Some((distance, current)) = queue.pop() {
            let cell = &mut grid[current];
            if cell.visited || distance > cell.distance {
                continue;
            }

            cell.visited = true;
            cell.paint_visited();
            order.push(current);

            if current == end {
                break;
            }

            for next in grid.open_neighbors(current) {
                let candidate = &mut grid[next];
                if distance + 1 < candidate.distance {
                    candidate.distance = distance + 1;
                    candidate.parent = Some(current);
                    queue.push(next, distance + 1);
                }
            }
        }

        order
    }
}
