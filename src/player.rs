use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;
use crate::core::{Direction, MoveReport, Puzzle, PuzzleError, PuzzleStatus};

/// Picks one of the currently legal directions.
pub trait MoveChooser {
    fn choose(&mut self, choices: &[Direction]) -> Result<Direction, PuzzleError>;
}

pub struct RandomPlayer<R: Rng = StdRng> {
    rng: R,
}

impl RandomPlayer<StdRng> {
    pub fn new() -> Self {
        RandomPlayer {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomPlayer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveChooser for RandomPlayer<R> {
    fn choose(&mut self, choices: &[Direction]) -> Result<Direction, PuzzleError> {
        choices
            .choose(&mut self.rng)
            .copied()
            .ok_or(PuzzleError::NoChoices)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub status: PuzzleStatus,
    pub moves: usize,
}

/// Lets `chooser` drive the puzzle until it is complete, stuck, or `limit` moves were made.
/// `on_move` sees every committed move.
pub fn play<C, F>(
    puzzle: &mut Puzzle,
    chooser: &mut C,
    limit: usize,
    mut on_move: F,
) -> Result<PlayOutcome, PuzzleError>
where
    C: MoveChooser + ?Sized,
    F: FnMut(&Puzzle, &MoveReport),
{
    let mut moves = 0;
    while moves < limit {
        if puzzle.is_complete() {
            break;
        }
        let choices = puzzle.legal_moves();
        if choices.is_empty() {
            break;
        }
        let dir = chooser.choose(&choices)?;
        let report = puzzle.move_actor(dir)?;
        moves += 1;
        on_move(puzzle, &report);
    }

    let outcome = PlayOutcome {
        status: puzzle.status(),
        moves,
    };
    info!(status = ?outcome.status, moves = outcome.moves, "play finished");
    Ok(outcome)
}
