use hashbrown::HashSet;

use crate::{grid::Grid, pos::Pos};

use super::{queue::DiscoveryQueue, PathFinder};

/// A* with the Manhattan distance to the end as heuristic.
///
/// With unit orthogonal steps Manhattan distance never overestimates, so the path is a shortest
/// one. The open set holds only discovered cells that are not finalized yet; the heap may hold
/// outdated entries for them, which are dropped once the cell has left the open set.
#[derive(Debug)]
pub struct AStar;

impl PathFinder for AStar {
    fn search(&self, grid: &mut Grid, start: Pos, end: Pos) -> Vec<Pos> {
        let mut order = Vec::new();
        let mut open = DiscoveryQueue::new();
        let mut open_set = HashSet::new();

        let origin = &mut grid[start];
        origin.g_score = 0;
        origin.f_score = start.manhattan(end);
        open.push(start, origin.f_score);
        open_set.insert(start);

        while let Some((_, current)) = open.pop() {
            if !open_set.remove(&current) {
                continue;
            }

            let cell = &mut grid[current];
            cell.visited = true;
            cell.paint_visited();
            let g_score = cell.g_score;
            order.push(current);

            if current == end {
                break;
            }

            for next in grid.open_neighbors(current) {
                let candidate = &mut grid[next];
                if g_score + 1 < candidate.g_score {
                    candidate.parent = Some(current);
                    candidate.g_score = g_score + 1;
                    candidate.f_score = candidate.g_score + next.manhattan(end);
                    open.push(next, candidate.f_score);
                    open_set.insert(next);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cell::CellKind, pathfinding::tests::open_grid};

    #[test]
    fn heads_for_the_end() {
        let mut grid = open_grid(9, 9);
        let order = AStar.search(&mut grid, Pos(1, 1), Pos(7, 7));

        assert_eq!(order.last(), Some(&Pos(7, 7)));
        assert_eq!(grid[Pos(7, 7)].g_score, 12);
        // every interior cell lies on some shortest route
        assert!(order
            .iter()
            .all(|&pos| grid[pos].f_score == 12 && grid[pos].visited));
    }

    #[test]
    fn detour_around_wall() {
        let mut grid = open_grid(7, 7);
        for col in 1..5 {
            grid[Pos(3, col)].kind = CellKind::Wall;
        }

        let order = AStar.search(&mut grid, Pos(1, 1), Pos(5, 5));
        assert_eq!(order.last(), Some(&Pos(5, 5)));
        // around the wall's open end at column 5
        assert_eq!(grid[Pos(5, 5)].g_score, 8);

        let unique: HashSet<_> = order.iter().collect();
        assert_eq!(unique.len(), order.len());
    }
}
