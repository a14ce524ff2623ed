use tracing::{debug, info};
use crate::core::error::PuzzleError;
use crate::core::geometry::Grid;
use crate::core::level::parse_level;
use crate::core::models::{Direction, GameChangeType, MoveReport, Vec2};
use crate::core::puzzle::Puzzle;

impl Puzzle {
    /// Moves the actor, pushing whatever is in front of it. Nothing changes on error.
    pub fn move_actor(&mut self, dir: Direction) -> Result<MoveReport, PuzzleError> {
        if !self.can_move(dir) {
            debug!(?dir, actor = %self.actor, "rejected move");
            return Err(PuzzleError::IllegalMove(dir));
        }

        let from = self.actor;
        let moved = relocate(&mut self.grid, from, dir);
        self.actor = from + dir;
        debug_assert!(self.grid[&self.actor].has_actor(), "actor cell must hold the actor");

        let mut changed = vec![from, self.actor];
        let mut pushed_to = self.actor;
        for _ in 1..moved {
            pushed_to = pushed_to + dir;
            changed.push(pushed_to);
        }
        let change_type = if moved > 1 {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        };
        debug!(?dir, ?change_type, actor = %self.actor, "moved");

        Ok(MoveReport {
            direction: dir,
            change_type,
            changed,
        })
    }

    /// Puts every cell back the way the start screen had it.
    /// Returns the positions whose display changed.
    pub fn reset(&mut self) -> Result<Vec<Vec2>, PuzzleError> {
        let (grid, actor) = parse_level(self.start_screen())?;
        let changed: Vec<Vec2> = grid
            .iter()
            .filter(|cell| {
                self.grid
                    .get(&cell.pos())
                    .is_none_or(|current| current.display() != cell.display())
            })
            .map(|cell| cell.pos())
            .collect();

        self.grid = grid;
        self.actor = actor;
        info!(changed = changed.len(), "puzzle reset");
        Ok(changed)
    }
}

/// Moves the occupant at `at` one step toward `dir`, first moving whatever is in the way.
/// Returns how many occupants moved.
pub(crate) fn relocate(grid: &mut Grid, at: Vec2, dir: Direction) -> usize {
    let next = at + dir;
    let mut moved = 0;
    if grid.get(&next).is_some_and(|cell| !cell.is_empty()) {
        moved = relocate(grid, next, dir);
    }
    let occupant = grid[&at].take_occupant();
    grid[&next].set_occupant(occupant);
    moved + 1
}
