use serde::{Deserialize, Serialize};

use crate::pos::Pos;

/// Value of `distance`, `g_score` and `f_score` before a search has computed them.
pub const UNSET: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Wall,
    Path,
    Start,
    End,
    Visited,
    PathSolution,
}

impl CellKind {
    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }

    /// Kinds painted by a search, cleared again by a reset.
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellKind::Visited | CellKind::PathSolution)
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Path => ' ',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Visited => '.',
            CellKind::PathSolution => '*',
        }
    }
}

/// Single grid cell.
///
/// Besides its kind, a cell carries scratch fields used by the path finders. They mean nothing
/// outside of a search and are cleared by [`Cell::reset_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    pub kind: CellKind,
    pub visited: bool,
    pub distance: u32,
    pub g_score: u32,
    pub f_score: u32,
    /// Previous cell on the best known route from the start.
    pub parent: Option<Pos>,
}

impl Cell {
    pub fn new(pos: Pos) -> Cell {
        Cell {
            pos,
            kind: CellKind::Wall,
            visited: false,
            distance: UNSET,
            g_score: UNSET,
            f_score: UNSET,
            parent: None,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.0 as usize
    }

    pub fn col(&self) -> usize {
        self.pos.1 as usize
    }

    pub fn is_traversable(&self) -> bool {
        !self.kind.is_wall()
    }

    pub fn reset_search(&mut self) {
        self.visited = false;
        self.distance = UNSET;
        self.g_score = UNSET;
        self.f_score = UNSET;
        self.parent = None;

        if self.kind.is_search_mark() {
            self.kind = CellKind::Path;
        }
    }

    /// Paints the cell as seen by a search; start and end keep their kind.
    pub fn paint_visited(&mut self) {
        if !self.kind.is_endpoint() {
            self.kind = CellKind::Visited;
        }
    }

    pub fn paint_solution(&mut self) {
        if !self.kind.is_endpoint() {
            self.kind = CellKind::PathSolution;
        }
    }
}
