use crate::core::consts::{ACTOR, BOX, TARGET_ACTOR, TARGET_BOX, WALL};
use crate::core::error::PuzzleError;
use crate::core::geometry::Grid;
use crate::core::models::{Direction, Rules, Vec2};
use crate::core::safety;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OccupantKind {
    Wall,
    Box,
    Actor,
}

/// Something standing on a cell. `cell` always names the cell that owns it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    kind: OccupantKind,
    cell: Vec2,
}

impl Occupant {
    pub fn new(kind: OccupantKind, cell: Vec2) -> Occupant {
        Occupant { kind, cell }
    }

    /// Builds the occupant for `symbol` on a cell whose target flag is `target`.
    pub fn from_symbol(symbol: char, target: bool, cell: Vec2) -> Result<Occupant, PuzzleError> {
        let (kind, on_target) = match symbol {
            WALL => (OccupantKind::Wall, false),
            BOX => (OccupantKind::Box, false),
            TARGET_BOX => (OccupantKind::Box, true),
            ACTOR => (OccupantKind::Actor, false),
            TARGET_ACTOR => (OccupantKind::Actor, true),
            _ => return Err(PuzzleError::InvalidSymbol { symbol, pos: cell }),
        };
        if on_target != target {
            return Err(PuzzleError::TargetMismatch { symbol, pos: cell });
        }
        Ok(Occupant { kind, cell })
    }

    pub fn kind(&self) -> OccupantKind {
        self.kind
    }

    pub fn cell(&self) -> Vec2 {
        self.cell
    }

    pub fn is_actor(&self) -> bool {
        self.kind == OccupantKind::Actor
    }

    pub fn is_box(&self) -> bool {
        self.kind == OccupantKind::Box
    }

    pub fn is_wall(&self) -> bool {
        self.kind == OccupantKind::Wall
    }

    pub fn display_symbol(&self, on_target_cell: bool) -> char {
        match (self.kind, on_target_cell) {
            (OccupantKind::Wall, _) => WALL,
            (OccupantKind::Box, false) => BOX,
            (OccupantKind::Box, true) => TARGET_BOX,
            (OccupantKind::Actor, false) => ACTOR,
            (OccupantKind::Actor, true) => TARGET_ACTOR,
        }
    }

    pub fn is_on_target(&self, grid: &Grid) -> bool {
        self.is_box() && grid.get(&self.cell).is_some_and(|cell| cell.is_target())
    }

    pub fn can_move(&self, grid: &Grid, rules: Rules, dir: Direction) -> bool {
        match self.kind {
            OccupantKind::Wall => false,
            OccupantKind::Box => safety::box_can_move(grid, rules, self.cell, dir),
            OccupantKind::Actor => safety::actor_can_move(grid, rules, self.cell, dir),
        }
    }

    pub fn is_stuck_safe(&self, grid: &Grid, dir: Direction) -> bool {
        match self.kind {
            OccupantKind::Box => safety::is_stuck_safe(grid, self.cell, dir),
            OccupantKind::Wall | OccupantKind::Actor => false,
        }
    }

    pub(crate) fn relocate(&mut self, cell: Vec2) {
        self.cell = cell;
    }
}
