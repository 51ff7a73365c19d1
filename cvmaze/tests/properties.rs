use std::collections::VecDeque;

use cvmaze::{
    find_path, generate_maze_seeded, initialize_grid, reset_pathfinding_data, set_start_and_end,
    CellKind, Grid, MazeAlgorithm, PathAlgorithm, Pos,
};
use hashbrown::HashSet;

const SIZES: [(usize, usize); 5] = [(3, 4), (5, 5), (9, 9), (12, 7), (25, 45)];

/// Non-wall cells reachable from `from`, by flood fill.
fn reachable(grid: &Grid, from: Pos) -> HashSet<Pos> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(pos) = queue.pop_front() {
        for off in Pos::ORTHOGONAL {
            let next = pos + off;
            let open = grid.get(next).is_some_and(|cell| !cell.kind.is_wall());
            if open && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

fn open_interior(rows: usize, cols: usize) -> Grid {
    let mut grid = initialize_grid(rows, cols).unwrap();
    for pos in grid.iter_pos().collect::<Vec<_>>() {
        if !grid.is_border(pos) {
            grid[pos].kind = CellKind::Path;
        }
    }
    set_start_and_end(&grid).unwrap()
}

#[test]
fn endpoints_and_dimensions() {
    for algo in MazeAlgorithm::ALL {
        for (rows, cols) in SIZES {
            let (grid, _) = generate_maze_seeded(rows, cols, algo, Some(17)).unwrap();

            assert_eq!((grid.rows(), grid.cols()), (rows, cols));
            assert_eq!(grid.count_kind(CellKind::Start), 1);
            assert_eq!(grid.count_kind(CellKind::End), 1);
            assert_eq!(grid.start(), Some(Pos(1, 1)));
            assert_eq!(grid.end(), Some(Pos::new(rows - 2, cols - 2)));
        }
    }
}

#[test]
fn lattice_mazes_are_connected() {
    for algo in [MazeAlgorithm::RecursiveBacktracking, MazeAlgorithm::Prims] {
        for seed in 0..10 {
            for (rows, cols) in SIZES {
                let (grid, _) = generate_maze_seeded(rows, cols, algo, Some(seed)).unwrap();

                let open = grid.iter().filter(|cell| !cell.kind.is_wall()).count();
                assert_eq!(reachable(&grid, Pos(1, 1)).len(), open, "{} {}", algo, seed);
            }
        }
    }
}

#[test]
fn random_maze_may_be_unsolvable() {
    let mut unsolved = 0;

    for seed in 0..200 {
        let (grid, _) = generate_maze_seeded(7, 7, MazeAlgorithm::Random, Some(seed)).unwrap();
        let component = reachable(&grid, Pos(1, 1));

        for algo in PathAlgorithm::ALL {
            let solution = find_path(&grid, algo).unwrap();

            if component.contains(&Pos(5, 5)) {
                assert!(solution.is_found());
            } else {
                assert!(solution.path.is_empty());
                let visited: HashSet<_> = solution.visited_positions().into_iter().collect();
                assert_eq!(visited, component);
                unsolved += 1;
            }
        }
    }

    assert!(unsolved > 0);
}

#[test]
fn optimal_finders_agree() {
    for algo in MazeAlgorithm::ALL {
        for seed in 0..10 {
            let (grid, _) = generate_maze_seeded(15, 21, algo, Some(seed)).unwrap();

            let bfs = find_path(&grid, PathAlgorithm::BreadthFirst).unwrap();
            let dijkstra = find_path(&grid, PathAlgorithm::Dijkstra).unwrap();
            let a_star = find_path(&grid, PathAlgorithm::AStar).unwrap();
            let dfs = find_path(&grid, PathAlgorithm::DepthFirst).unwrap();

            assert_eq!(bfs.path.len(), dijkstra.path.len());
            assert_eq!(bfs.path.len(), a_star.path.len());
            assert_eq!(bfs.is_found(), dfs.is_found());
            assert!(dfs.path.len() >= bfs.path.len());
        }
    }
}

#[test]
fn search_results_are_well_formed() {
    for maze in MazeAlgorithm::ALL {
        let (grid, _) = generate_maze_seeded(17, 23, maze, Some(4)).unwrap();

        for algo in PathAlgorithm::ALL {
            let solution = find_path(&grid, algo).unwrap();

            let visited = solution.visited_positions();
            let unique: HashSet<_> = visited.iter().collect();
            assert_eq!(unique.len(), visited.len());
            assert_eq!(visited.first(), grid.start().as_ref());

            let path = solution.path_positions();
            if !path.is_empty() {
                assert_eq!(path.first(), grid.start().as_ref());
                assert_eq!(path.last(), grid.end().as_ref());
                assert!(path.windows(2).all(|w| w[0].is_adjacent(w[1])));
                assert!(path.iter().all(|&pos| !grid[pos].kind.is_wall()));
            }
        }
    }
}

#[test]
fn reset_is_idempotent() {
    let (mut grid, _) =
        generate_maze_seeded(13, 13, MazeAlgorithm::RecursiveBacktracking, Some(8)).unwrap();
    let carved = grid.clone();

    let solution = find_path(&grid, PathAlgorithm::Dijkstra).unwrap();
    grid.apply_solution(&solution);
    assert_ne!(grid, carved);

    let once = reset_pathfinding_data(&grid);
    let twice = reset_pathfinding_data(&once);
    assert_eq!(once, twice);
    assert_eq!(once, carved);
    assert!(once.iter().all(|cell| !cell.visited && cell.parent.is_none()));
}

#[test]
fn open_five_by_five() {
    let grid = open_interior(5, 5);

    for algo in PathAlgorithm::ALL {
        let path = find_path(&grid, algo).unwrap().path_positions();
        assert_eq!(path.first(), Some(&Pos(1, 1)));
        assert_eq!(path.last(), Some(&Pos(3, 3)));
        if algo != PathAlgorithm::DepthFirst {
            assert_eq!(path.len(), 5);
        }
    }
}

#[test]
fn end_walled_in() {
    let mut grid = open_interior(7, 7);
    grid[Pos(4, 5)].kind = CellKind::Wall;
    grid[Pos(5, 4)].kind = CellKind::Wall;

    for algo in PathAlgorithm::ALL {
        let solution = find_path(&grid, algo).unwrap();
        assert!(solution.path.is_empty());
        assert_eq!(solution.visited_in_order.len(), 22);
        assert!(!solution.visited_positions().contains(&Pos(5, 5)));
    }
}

#[test]
fn kruskals_is_backtracking() {
    for seed in 0..5 {
        let kruskals = generate_maze_seeded(11, 19, MazeAlgorithm::Kruskals, Some(seed));
        let backtracking =
            generate_maze_seeded(11, 19, MazeAlgorithm::RecursiveBacktracking, Some(seed));
        assert_eq!(kruskals, backtracking);
    }
}

#[test]
fn replay_ends_in_carved_grid() {
    for algo in MazeAlgorithm::ALL {
        let (grid, steps) = generate_maze_seeded(9, 13, algo, Some(2)).unwrap();

        let replayed = steps.snapshots().last().unwrap();
        assert_eq!(steps.snapshots().len(), steps.len());
        assert_eq!(set_start_and_end(&replayed).unwrap(), grid);
        assert_eq!(steps.base(), &initialize_grid(9, 13).unwrap());
    }

    let (_, steps) = generate_maze_seeded(9, 13, MazeAlgorithm::Random, Some(2)).unwrap();
    assert_eq!(steps.len(), 1);
}
