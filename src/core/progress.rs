use serde::Serialize;
use crate::core::puzzle::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub targets: usize,
    pub boxes: usize,
    pub on_target: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.on_target == self.targets
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PuzzleStatus {
    Complete,
    /// Not complete, and the actor has no legal move.
    Stuck,
    InProgress,
}

impl Puzzle {
    pub fn num_targets(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_target()).count()
    }

    pub fn num_boxes(&self) -> usize {
        self.grid.iter().filter(|cell| cell.has_box()).count()
    }

    pub fn num_actors(&self) -> usize {
        self.grid.iter().filter(|cell| cell.has_actor()).count()
    }

    pub fn num_on_target(&self) -> usize {
        self.grid.iter().filter(|cell| cell.on_target()).count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            targets: self.num_targets(),
            boxes: self.num_boxes(),
            on_target: self.num_on_target(),
        }
    }

    /// Every target holds a box.
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    pub fn status(&self) -> PuzzleStatus {
        if self.is_complete() {
            PuzzleStatus::Complete
        } else if self.legal_moves().is_empty() {
            PuzzleStatus::Stuck
        } else {
            PuzzleStatus::InProgress
        }
    }
}
