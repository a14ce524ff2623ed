use std::fmt;
use std::path::Path;
use crate::core::cell::Cell;
use crate::core::error::PuzzleError;
use crate::core::geometry::Grid;
use crate::core::level::parse_level;
use crate::core::models::{Direction, Rules, Vec2};
use crate::core::safety;

/// A loaded puzzle: the grid, where the actor stands, and the screen it was built from.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) grid: Grid,
    pub(crate) actor: Vec2,
    rules: Rules,
    start_screen: String,
}

impl Puzzle {
    /// Builds a puzzle under classic rules, where a box never pushes another box. A push into
    /// a row of two boxes is rejected; build with
    /// `Puzzle::with_rules(screen, Rules { chain_pushes: true })` to let it cascade.
    pub fn from_screen(screen: &str) -> Result<Puzzle, PuzzleError> {
        Puzzle::with_rules(screen, Rules::default())
    }

    pub fn with_rules(screen: &str, rules: Rules) -> Result<Puzzle, PuzzleError> {
        let (grid, actor) = parse_level(screen)?;
        Ok(Puzzle {
            grid,
            actor,
            rules,
            start_screen: screen.to_string(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Puzzle, PuzzleError> {
        let screen = std::fs::read_to_string(path)?;
        Puzzle::from_screen(&screen)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    pub fn actor_pos(&self) -> Vec2 {
        self.actor
    }

    pub fn cell_at(&self, row: i32, col: i32) -> Option<&Cell> {
        self.grid.cell_at(row, col)
    }

    pub fn can_move(&self, dir: Direction) -> bool {
        safety::actor_can_move(&self.grid, self.rules, self.actor, dir)
    }

    /// Legal actor moves, in `Direction::ALL` order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    /// Stuck safety of pushing whatever stands at `pos`. Only boxes can be stuck-safe.
    pub fn is_stuck_safe(&self, pos: Vec2, dir: Direction) -> bool {
        self.grid
            .get(&pos)
            .and_then(Cell::occupant)
            .is_some_and(|occupant| occupant.is_stuck_safe(&self.grid, dir))
    }

    pub fn is_moveable_box_location(&self, pos: Vec2, origin: Vec2, dir: Direction) -> bool {
        self.grid.contains(&pos) && safety::is_moveable_box_location(&self.grid, pos, origin, dir)
    }

    pub fn is_moveable_box_location_avoiding(
        &self,
        pos: Vec2,
        origin: Vec2,
        taboo: Vec2,
        dir: Direction,
    ) -> bool {
        self.grid.contains(&pos)
            && safety::is_moveable_box_location_avoiding(&self.grid, pos, origin, taboo, dir)
    }

    pub(crate) fn start_screen(&self) -> &str {
        &self.start_screen
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                if let Some(cell) = self.cell_at(i, j) {
                    write!(f, "{}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
