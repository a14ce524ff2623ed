use crate::core::bounded_grid::BoundedGrid;
use crate::core::cell::Cell;
use crate::core::models::{Direction, Vec2};

pub type Grid = BoundedGrid<Cell>;

impl BoundedGrid<Cell> {
    pub fn rows(&self) -> i32 {
        self.size().rows
    }

    pub fn cols(&self) -> i32 {
        self.size().cols
    }

    /// `None` outside the grid. The edge of the grid is not a wall.
    pub fn cell_at(&self, row: i32, col: i32) -> Option<&Cell> {
        self.get(&Vec2 { i: row, j: col })
    }

    pub fn neighbor(&self, pos: Vec2, dir: Direction) -> Option<&Cell> {
        self.get(&(pos + dir))
    }

    fn has_wall_toward(&self, pos: Vec2, dir: Direction) -> bool {
        self.neighbor(pos, dir).is_some_and(Cell::has_wall)
    }

    pub fn adjacent_wall_count(&self, pos: Vec2) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&dir| self.has_wall_toward(pos, dir))
            .count()
    }

    /// Whether the walls around `pos` alone leave a box resting there able to move again.
    /// Targets are always safe, corners and dead ends are not, corridors are.
    pub fn is_wall_safe(&self, pos: Vec2) -> bool {
        let Some(cell) = self.get(&pos) else {
            return false;
        };
        if cell.has_wall() {
            return false;
        }
        if cell.is_target() {
            return true;
        }
        match self.adjacent_wall_count(pos) {
            0 | 1 => true,
            2 => {
                let north_south = self.has_wall_toward(pos, Direction::North)
                    && self.has_wall_toward(pos, Direction::South);
                let east_west = self.has_wall_toward(pos, Direction::East)
                    && self.has_wall_toward(pos, Direction::West);
                north_south || east_west
            }
            _ => false,
        }
    }
}
