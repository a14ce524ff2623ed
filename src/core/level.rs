use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::cell::Cell;
use crate::core::consts::EMPTY;
use crate::core::error::PuzzleError;
use crate::core::geometry::Grid;
use crate::core::models::Vec2;

/// Parses a screen into a grid and the actor position.
/// Blank lines are skipped and short rows are padded with empty cells.
pub fn parse_level(screen: &str) -> Result<(Grid, Vec2), PuzzleError> {
    let lines: Vec<Vec<char>> = screen
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();
    let max_width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let bounds = BoundsOriginRoot::new(lines.len() as i32, max_width as i32);

    let grid = BoundedGrid::try_from_fn(bounds, |pos| {
        let symbol = lines[pos.i as usize]
            .get(pos.j as usize)
            .copied()
            .unwrap_or(EMPTY);
        Cell::from_symbol(pos, symbol)
    })?;

    let actor = check_valid(&grid)?;
    Ok((grid, actor))
}

/// Exactly one actor, and as many boxes as targets.
pub fn check_valid(grid: &Grid) -> Result<Vec2, PuzzleError> {
    let boxes = grid.iter().filter(|cell| cell.has_box()).count();
    let targets = grid.iter().filter(|cell| cell.is_target()).count();
    if boxes != targets {
        return Err(PuzzleError::BoxTargetMismatch { boxes, targets });
    }

    let mut actors = grid.iter().filter(|cell| cell.has_actor()).map(Cell::pos);
    match (actors.next(), actors.count()) {
        (Some(actor), 0) => Ok(actor),
        (None, _) => Err(PuzzleError::ActorCount(0)),
        (Some(_), rest) => Err(PuzzleError::ActorCount(rest + 1)),
    }
}
