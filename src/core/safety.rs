//! Local deadlock avoidance for box pushes.
//!
//! A push is rejected when the box would land in a non-target corner, or next to another box
//! when neither of the two can get out of the way afterwards. Nothing here looks more than one
//! push ahead, so a legal push can still lead to an unsolvable puzzle.

use std::collections::HashSet;
use tracing::trace;
use crate::core::cell::Cell;
use crate::core::geometry::Grid;
use crate::core::models::{Direction, Rules, Vec2};
use crate::core::update::relocate;

pub fn actor_can_move(grid: &Grid, rules: Rules, at: Vec2, dir: Direction) -> bool {
    let Some(next) = grid.neighbor(at, dir) else {
        return false;
    };
    match next.occupant() {
        None => true,
        Some(occupant) => occupant.can_move(grid, rules, dir),
    }
}

pub fn box_can_move(grid: &Grid, rules: Rules, at: Vec2, dir: Direction) -> bool {
    box_can_move_from(grid, rules, at, at, dir)
}

/// `origin` is the box the actor pushes directly. Once the whole chain has moved, only that
/// cell is vacated; every other chain cell is refilled by the box behind it.
fn box_can_move_from(grid: &Grid, rules: Rules, at: Vec2, origin: Vec2, dir: Direction) -> bool {
    let Some(next) = grid.neighbor(at, dir) else {
        return false;
    };
    if next.is_empty() {
        return grid.is_wall_safe(next.pos()) && stuck_safe_from(grid, at, origin, dir);
    }
    if !rules.chain_pushes || !next.has_box() || !grid.is_wall_safe(next.pos()) {
        return false;
    }
    if !box_can_move_from(grid, rules, next.pos(), origin, dir) {
        return false;
    }

    // the trailing box lands right behind the one it pushed
    let mut shifted = grid.clone();
    relocate(&mut shifted, next.pos(), dir);
    stuck_safe_from(&shifted, at, origin, dir)
}

/// Whether pushing the box at `at` toward `dir` avoids wedging it against another box.
///
/// The landing cell must exist, be empty and be wall-safe, otherwise the push is never safe.
/// Landing on a target is always safe. Otherwise each box next to the landing cell (ahead,
/// left or right) blocks the push until it is shown that either the pushed box or that
/// neighbor could still step aside. One escapable neighbor is enough to clear the verdict.
pub fn is_stuck_safe(grid: &Grid, at: Vec2, dir: Direction) -> bool {
    stuck_safe_from(grid, at, at, dir)
}

fn stuck_safe_from(grid: &Grid, at: Vec2, origin: Vec2, dir: Direction) -> bool {
    let Some(next) = grid.neighbor(at, dir) else {
        return false;
    };
    if !next.is_empty() || !grid.is_wall_safe(next.pos()) {
        return false;
    }
    if next.is_target() {
        return true;
    }

    let next = next.pos();
    let sides = [dir, dir.left(), dir.right()];
    let has_box = |side: Direction| grid.neighbor(next, side).is_some_and(Cell::has_box);

    let mut stuck_safe = !sides.iter().any(|&side| has_box(side));
    for side in sides {
        if has_box(side)
            && (is_moveable_box_location(grid, next, origin, side)
                || is_moveable_box_location_avoiding(grid, next + side, origin, next, side))
        {
            stuck_safe = true;
        }
    }
    trace!(?at, ?dir, stuck_safe, "stuck safety");
    stuck_safe
}

/// Whether whatever sits at `at` could step sideways out of a line running along `dir`,
/// moving other boxes out of the way if it has to. `origin` counts as free, since the box
/// being pushed is about to leave it.
pub fn is_moveable_box_location(grid: &Grid, at: Vec2, origin: Vec2, dir: Direction) -> bool {
    let mut visited = HashSet::new();
    search(grid, at, origin, dir, &mut visited)
}

/// As `is_moveable_box_location`, but the search may never use `taboo`.
pub fn is_moveable_box_location_avoiding(
    grid: &Grid,
    at: Vec2,
    origin: Vec2,
    taboo: Vec2,
    dir: Direction,
) -> bool {
    if taboo == at {
        return false;
    }
    let mut visited = HashSet::from([taboo]);
    search(grid, at, origin, dir, &mut visited)
}

fn search(grid: &Grid, at: Vec2, origin: Vec2, dir: Direction, visited: &mut HashSet<Vec2>) -> bool {
    if !visited.insert(at) {
        return false;
    }
    let left = grid.neighbor(at, dir.left());
    let right = grid.neighbor(at, dir.right());
    // snapshot before recursing, both attempts use the same flags
    let visited_left = left.is_some_and(|cell| visited.contains(&cell.pos()));
    let visited_right = right.is_some_and(|cell| visited.contains(&cell.pos()));

    let moves_left = make_room(grid, left, visited_left, origin, dir.left(), true, visited)
        && make_room(grid, right, visited_right, origin, dir.right(), false, visited);
    let moveable = moves_left
        || (make_room(grid, right, visited_right, origin, dir.right(), true, visited)
            && make_room(grid, left, visited_left, origin, dir.left(), false, visited));

    trace!(?at, ?dir, moveable, depth = visited.len(), "moveable box search");
    moveable
}

/// One side of a sideways step: the cell must be free (the actor and `origin` count as free)
/// or hold a box that can itself step aside toward `dir`. The side the box moves into must
/// also be wall-safe.
fn make_room(
    grid: &Grid,
    cell: Option<&Cell>,
    was_visited: bool,
    origin: Vec2,
    dir: Direction,
    landing: bool,
    visited: &mut HashSet<Vec2>,
) -> bool {
    let Some(cell) = cell else {
        return false;
    };
    if was_visited {
        return false;
    }
    let free = cell.is_empty() || cell.has_actor() || cell.pos() == origin;
    (free && (!landing || grid.is_wall_safe(cell.pos())))
        || (cell.has_box() && search(grid, cell.pos(), origin, dir, visited))
}
