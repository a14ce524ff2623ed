pub const WALL: char = '#';
pub const BOX: char = '$';
pub const ACTOR: char = '@';
pub const TARGET: char = '.';
pub const EMPTY: char = ' ';
pub const TARGET_BOX: char = '*';
pub const TARGET_ACTOR: char = '+';

/// Default for `Rules::chain_pushes`. Classic rules never let a box push another box.
pub const CHAIN_PUSHES: bool = false;

/// Upper bound on the number of moves a chooser gets in `player::play`.
pub const RANDOM_MOVE_LIMIT: usize = 10_000;
