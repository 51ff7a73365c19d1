use std::{mem, slice};

use smallvec::SmallVec;

use crate::{cell::CellKind, grid::Grid, pos::Pos};

/// One cell changing kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub pos: Pos,
    pub from: CellKind,
    pub to: CellKind,
}

/// Changes made by a single carving step. Most steps carve a wall and a room.
pub type Step = SmallVec<[Change; 2]>;

/// Ordered record of how a maze was carved.
///
/// Instead of a full copy of the grid per step, only the changed cells are kept. Snapshot `i` is
/// the base grid with steps `0..=i` applied, so the last snapshot equals the carved grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps {
    base: Grid,
    steps: Vec<Step>,
}

impl Steps {
    pub fn new(base: Grid) -> Self {
        Self {
            base,
            steps: Vec::new(),
        }
    }

    /// Grid before the first step.
    pub fn base(&self) -> &Grid {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[Change]> {
        self.steps.get(index).map(|step| step.as_slice())
    }

    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Total number of recorded cell changes.
    pub fn change_count(&self) -> usize {
        self.steps.iter().map(|step| step.len()).sum()
    }

    /// Full grid as it looked right after step `index`.
    pub fn snapshot(&self, index: usize) -> Option<Grid> {
        let applied = self.steps.get(..=index)?;

        let mut grid = self.base.clone();
        for step in applied {
            apply(&mut grid, step);
        }
        Some(grid)
    }

    pub fn last_snapshot(&self) -> Option<Grid> {
        self.len().checked_sub(1).and_then(|i| self.snapshot(i))
    }

    /// Lazily replays every snapshot in order. Can be called again to start over.
    pub fn snapshots(&self) -> Snapshots<'_> {
        Snapshots {
            grid: self.base.clone(),
            steps: self.steps.iter(),
        }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn apply(grid: &mut Grid, step: &[Change]) {
    for change in step {
        if let Some(cell) = grid.get_mut(change.pos) {
            cell.kind = change.to;
        }
    }
}

pub struct Snapshots<'a> {
    grid: Grid,
    steps: slice::Iter<'a, Step>,
}

impl Iterator for Snapshots<'_> {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.next()?;
        apply(&mut self.grid, step);
        Some(self.grid.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

impl ExactSizeIterator for Snapshots<'_> {}

/// Grid being carved, recording every change into [`Steps`].
///
/// Changes accumulate until [`Carver::commit`] closes the current step.
#[derive(Debug)]
pub(crate) struct Carver {
    grid: Grid,
    steps: Steps,
    pending: Step,
}

impl Carver {
    pub fn new(grid: Grid) -> Self {
        Self {
            steps: Steps::new(grid.clone()),
            grid,
            pending: Step::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sets the kind of a cell. Setting a cell to the kind it already has records nothing.
    pub fn set(&mut self, pos: Pos, kind: CellKind) {
        let Some(cell) = self.grid.get_mut(pos) else {
            return;
        };

        if cell.kind != kind {
            self.pending.push(Change {
                pos,
                from: cell.kind,
                to: kind,
            });
            cell.kind = kind;
        }
    }

    pub fn commit(&mut self) {
        self.steps.push(mem::take(&mut self.pending));
    }

    pub fn finish(mut self) -> (Grid, Steps) {
        if !self.pending.is_empty() {
            self.commit();
        }
        (self.grid, self.steps)
    }
}
