mod bounded_grid;
mod bounds;
mod cell;
mod consts;
mod error;
mod geometry;
mod level;
mod models;
mod occupant;
mod progress;
mod puzzle;
mod safety;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use cell::Cell;
pub use consts::*;
pub use error::PuzzleError;
pub use geometry::Grid;
pub use level::{check_valid, parse_level};
pub use models::{Direction, GameChangeType, MoveReport, Rules, Vec2};
pub use occupant::{Occupant, OccupantKind};
pub use progress::{Progress, PuzzleStatus};
pub use puzzle::Puzzle;
pub use safety::{is_moveable_box_location, is_moveable_box_location_avoiding, is_stuck_safe};
