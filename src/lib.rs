// Sokoban rules engine that refuses pushes which would immediately deadlock a box.
// Tiles: '#' wall, '@' actor, '$' box, '.' target, '*' box on target, '+' actor on target, ' ' floor.

pub mod console_interface;
pub mod core;
pub mod export;
pub mod logging;
pub mod models;
pub mod player;

#[cfg(test)]
mod test;
