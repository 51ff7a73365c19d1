use std::{fmt, ops};

use smallvec::SmallVec;

use crate::{
    cell::{Cell, CellKind},
    error::{Endpoint, MazeError},
    pathfinding::Solution,
    pos::Pos,
};

/// Small list of positions around a cell, never more than four.
pub type Neighbors = SmallVec<[Pos; 4]>;

/// Rectangular grid of cells, stored row-major.
///
/// Dimensions are fixed at creation. The grid is a plain value: algorithms work on their own
/// clone, so earlier results stay valid after later runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid made only of walls.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Pos::new(row, col))))
            .collect();

        Ok(Grid { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_in_bounds(&self, pos: Pos) -> bool {
        pos.all_non_negative() && (pos.0 as usize) < self.rows && (pos.1 as usize) < self.cols
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.is_in_bounds(pos)
            && (pos.0 == 0
                || pos.1 == 0
                || pos.0 as usize == self.rows - 1
                || pos.1 as usize == self.cols - 1)
    }

    pub fn pos_to_idx(&self, pos: Pos) -> Option<usize> {
        self.is_in_bounds(pos)
            .then(|| pos.0 as usize * self.cols + pos.1 as usize)
    }

    pub fn idx_to_pos(&self, idx: usize) -> Option<Pos> {
        (idx < self.cells.len()).then(|| Pos::new(idx / self.cols, idx % self.cols))
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.pos_to_idx(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        self.pos_to_idx(pos).map(move |i| &mut self.cells[i])
    }

    pub fn kind(&self, pos: Pos) -> Option<CellKind> {
        self.get(pos).map(|cell| cell.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).filter_map(move |i| self.idx_to_pos(i))
    }

    /// Rows of cells, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    /// First cell of the given kind, in row-major order.
    pub fn find_kind(&self, kind: CellKind) -> Option<Pos> {
        self.cells
            .iter()
            .find(|cell| cell.kind == kind)
            .map(Cell::pos)
    }

    pub fn start(&self) -> Option<Pos> {
        self.find_kind(CellKind::Start)
    }

    pub fn end(&self) -> Option<Pos> {
        self.find_kind(CellKind::End)
    }

    /// Position of the single start or end cell, failing when there is none or more than one.
    pub fn endpoint(&self, endpoint: Endpoint) -> Result<Pos, MazeError> {
        let kind = match endpoint {
            Endpoint::Start => CellKind::Start,
            Endpoint::End => CellKind::End,
        };

        let mut found = self.iter().filter(|cell| cell.kind == kind).map(Cell::pos);
        match (found.next(), found.next()) {
            (Some(pos), None) => Ok(pos),
            (None, _) => Err(MazeError::MissingEndpoint(endpoint)),
            (Some(_), Some(_)) => Err(MazeError::DuplicateEndpoint(endpoint)),
        }
    }

    /// Cells `stride` steps away from `pos` in each orthogonal direction, that are in bounds and
    /// of the given kind.
    pub fn neighbors_of_kind(&self, pos: Pos, stride: i32, kind: CellKind) -> Neighbors {
        Pos::ORTHOGONAL
            .iter()
            .map(|&off| pos + off * stride)
            .filter(|&next| self.kind(next) == Some(kind))
            .collect()
    }

    pub fn wall_neighbors(&self, pos: Pos, stride: i32) -> Neighbors {
        self.neighbors_of_kind(pos, stride, CellKind::Wall)
    }

    /// Orthogonal neighbours a search may still step onto: in bounds, not a wall and not yet
    /// visited in the current run.
    pub fn open_neighbors(&self, pos: Pos) -> Neighbors {
        Pos::ORTHOGONAL
            .iter()
            .map(|&off| pos + off)
            .filter(|&next| {
                self.get(next)
                    .is_some_and(|cell| cell.is_traversable() && !cell.visited)
            })
            .collect()
    }

    /// Positions of the start and end cells for a grid of the given size.
    ///
    /// Both must exist and differ, which rules out anything smaller than 3x3 and the 3x3 grid
    /// itself, where both would land on the single interior cell.
    pub fn endpoints_for(rows: usize, cols: usize) -> Result<(Pos, Pos), MazeError> {
        if rows < 3 || cols < 3 || (rows == 3 && cols == 3) {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        Ok((Pos(1, 1), Pos::new(rows - 2, cols - 2)))
    }

    /// Places the start at `(1, 1)` and the end at `(rows - 2, cols - 2)`.
    ///
    /// Whatever was there before is overwritten, carved or not.
    pub fn set_start_and_end(&mut self) -> Result<(), MazeError> {
        let (start, end) = Self::endpoints_for(self.rows, self.cols)?;

        self[start].kind = CellKind::Start;
        self[end].kind = CellKind::End;

        Ok(())
    }

    /// Clears all search state, turning painted cells back into paths.
    pub fn reset_pathfinding_data(&mut self) {
        self.iter_mut().for_each(Cell::reset_search);
    }

    /// Paints the result of a search onto the grid, for display.
    pub fn apply_solution(&mut self, solution: &Solution) {
        for visited in &solution.visited_in_order {
            if let Some(cell) = self.get_mut(visited.pos()) {
                cell.paint_visited();
            }
        }

        for step in &solution.path {
            if let Some(cell) = self.get_mut(step.pos()) {
                cell.paint_solution();
            }
        }
    }
}

impl ops::Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, index: Pos) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl ops::IndexMut<Pos> for Grid {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell.kind.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
