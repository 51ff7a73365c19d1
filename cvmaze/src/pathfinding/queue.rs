use std::{cmp::Reverse, collections::BinaryHeap};

use hashbrown::HashMap;

use crate::pos::Pos;

/// Min-heap of cells keyed by a score, ties going to the cell discovered first.
///
/// A cell pushed again with a better score keeps its first discovery number. The outdated entry
/// stays in the heap and is popped as well; callers skip it.
#[derive(Debug, Default)]
pub(crate) struct DiscoveryQueue {
    heap: BinaryHeap<Reverse<(u32, usize, Pos)>>,
    discovered: HashMap<Pos, usize>,
}

impl DiscoveryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Pos, key: u32) {
        let next = self.discovered.len();
        let seq = *self.discovered.entry(pos).or_insert(next);
        self.heap.push(Reverse((key, seq, pos)));
    }

    pub fn pop(&mut self) -> Option<(u32, Pos)> {
        self.heap.pop().map(|Reverse((key, _, pos))| (key, pos))
    }
}
