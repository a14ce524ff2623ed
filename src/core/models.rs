use std::fmt;
use std::ops::Add;
use serde::{Deserialize, Serialize};
use crate::core::consts::CHAIN_PUSHES;

/// Grid position, `i` is the row and `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl Add<Direction> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Direction) -> Vec2 {
        self + rhs.offset()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// 90 degrees counter-clockwise
    pub fn left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// 90 degrees clockwise
    pub fn right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::North => Vec2 { i: -1, j: 0 },
            Direction::South => Vec2 { i: 1, j: 0 },
            Direction::East => Vec2 { i: 0, j: 1 },
            Direction::West => Vec2 { i: 0, j: -1 },
        }
    }
}

/// Rule toggles fixed for the lifetime of a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Allow a pushed box to push the box in front of it.
    pub chain_pushes: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            chain_pushes: CHAIN_PUSHES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// What a committed move touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub direction: Direction,
    pub change_type: GameChangeType,
    /// Old actor cell, new actor cell, then every cell a pushed box moved into.
    pub changed: Vec<Vec2>,
}
