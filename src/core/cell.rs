use std::fmt;
use std::hash::{Hash, Hasher};
use crate::core::consts::{EMPTY, TARGET, TARGET_ACTOR, TARGET_BOX};
use crate::core::error::PuzzleError;
use crate::core::models::Vec2;
use crate::core::occupant::Occupant;

/// One grid position. Identity is the position alone.
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Vec2,
    target: bool,
    occupant: Option<Occupant>,
}

impl Cell {
    pub fn from_symbol(pos: Vec2, symbol: char) -> Result<Cell, PuzzleError> {
        let target = matches!(symbol, TARGET | TARGET_BOX | TARGET_ACTOR);
        let occupant = match symbol {
            EMPTY | TARGET => None,
            _ => Some(Occupant::from_symbol(symbol, target, pos)?),
        };
        Ok(Cell { pos, target, occupant })
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn is_target(&self) -> bool {
        self.target
    }

    pub fn occupant(&self) -> Option<&Occupant> {
        self.occupant.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn has_actor(&self) -> bool {
        self.occupant.as_ref().is_some_and(Occupant::is_actor)
    }

    pub fn has_box(&self) -> bool {
        self.occupant.as_ref().is_some_and(Occupant::is_box)
    }

    pub fn has_wall(&self) -> bool {
        self.occupant.as_ref().is_some_and(Occupant::is_wall)
    }

    /// A box resting on this target.
    pub fn on_target(&self) -> bool {
        self.target && self.has_box()
    }

    pub fn display(&self) -> char {
        match &self.occupant {
            Some(occupant) => occupant.display_symbol(self.target),
            None if self.target => TARGET,
            None => EMPTY,
        }
    }

    pub(crate) fn take_occupant(&mut self) -> Option<Occupant> {
        self.occupant.take()
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<Occupant>) {
        self.occupant = occupant.map(|mut occupant| {
            occupant.relocate(self.pos);
            occupant
        });
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
