use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Grid position as `(row, col)`.
///
/// Signed, so that an offset stepping off the grid is still representable and can be rejected by
/// a bounds check instead of wrapping around.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Pos(pub i32, pub i32);

impl Pos {
    pub const UP: Pos = Pos(-1, 0);
    pub const DOWN: Pos = Pos(1, 0);
    pub const LEFT: Pos = Pos(0, -1);
    pub const RIGHT: Pos = Pos(0, 1);

    /// Unit offsets in the order every algorithm enumerates neighbours: up, down, left, right.
    pub const ORTHOGONAL: [Pos; 4] = [Pos::UP, Pos::DOWN, Pos::LEFT, Pos::RIGHT];

    pub fn new(row: usize, col: usize) -> Self {
        Pos(row as i32, col as i32)
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// Manhattan distance, the A* heuristic.
    pub fn manhattan(self, other: Pos) -> u32 {
        (self - other).abs_sum().unsigned_abs()
    }

    /// Cell halfway between two positions, rounded towards negative infinity.
    ///
    /// For two rooms two cells apart this is the wall that separates them.
    pub fn midpoint(self, other: Pos) -> Pos {
        Pos(
            (self.0 + other.0).div_euclid(2),
            (self.1 + other.1).div_euclid(2),
        )
    }

    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, other: Pos) -> Pos {
        Pos(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, other: Pos) -> Pos {
        Pos(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<i32> for Pos {
    type Output = Pos;

    fn mul(self, other: i32) -> Pos {
        Pos(self.0 * other, self.1 * other)
    }
}
