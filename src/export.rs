use serde::Serialize;
use crate::core::{Direction, Progress, Puzzle, PuzzleStatus, Vec2};

#[derive(Serialize, Debug)]
struct JsonSnapshot {
    rows: Vec<String>,
    actor: Vec2,
    progress: Progress,
    status: PuzzleStatus,
    legal_moves: Vec<Direction>,
}

pub fn get_json_data(puzzle: &Puzzle) -> Result<String, serde_json::Error> {
    let rows = puzzle.to_string().lines().map(str::to_string).collect();
    let snapshot = JsonSnapshot {
        rows,
        actor: puzzle.actor_pos(),
        progress: puzzle.progress(),
        status: puzzle.status(),
        legal_moves: puzzle.legal_moves(),
    };
    serde_json::to_string_pretty(&snapshot)
}
