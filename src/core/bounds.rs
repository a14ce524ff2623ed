use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub rows: i32,
    pub cols: i32,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, cols: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { rows, cols }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.rows && pos.j >= 0 && pos.j < self.cols
    }

    pub fn area(&self) -> i32 {
        self.rows * self.cols
    }

    /// Row-major walk over every position inside the bounds.
    pub fn positions(self) -> impl Iterator<Item = Vec2> {
        (0..self.rows).flat_map(move |i| (0..self.cols).map(move |j| Vec2 { i, j }))
    }
}
