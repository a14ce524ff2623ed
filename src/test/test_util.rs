pub use dissimilar::diff as __diff;
use crate::core::{Direction, MoveReport, Puzzle, PuzzleError, Rules, Vec2};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub puzzle: Puzzle,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        let puzzle = Puzzle::from_screen(level)
            .unwrap_or_else(|err| panic!("invalid test level: {}\n{}", err, level));
        Self { puzzle }
    }

    pub fn with_rules(level: &str, rules: Rules) -> Self {
        let puzzle = Puzzle::with_rules(level, rules)
            .unwrap_or_else(|err| panic!("invalid test level: {}\n{}", err, level));
        Self { puzzle }
    }

    pub fn game_to_string(&self) -> String {
        self.puzzle.to_string().trim_matches('\n').into()
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveReport {
        match self.puzzle.move_actor(direction) {
            Ok(report) => report,
            Err(err) => panic!("Expected {:?} to move, got {}, in map\n{}", direction, err, self.game_to_string()),
        }
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> Result<MoveReport, PuzzleError> {
        self.puzzle.move_actor(direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }

    pub fn assert_legal(&self, expected: &[Direction]) {
        assert_eq!(
            self.puzzle.legal_moves(),
            expected,
            "legal moves differ, in map\n{}",
            self.game_to_string()
        );
    }

    pub fn render_symbols<F>(&self, get_char: F) -> String
    where
        F: Fn(Vec2) -> char,
    {
        let mut result = String::new();
        for i in 0..self.puzzle.rows() {
            for j in 0..self.puzzle.cols() {
                result.push(get_char(Vec2 { i, j }));
            }
            result.push('\n');
        }
        result
    }

    pub fn render_where<F>(&self, predicate: F, present: char, absent: char) -> String
    where
        F: Fn(Vec2) -> bool,
    {
        self.render_symbols(|pos| if predicate(pos) { present } else { absent })
    }

    /// Occupants must name the cell that holds them.
    pub fn assert_back_references(&self) {
        for cell in self.puzzle.grid().iter() {
            if let Some(occupant) = cell.occupant() {
                assert_eq!(occupant.cell(), cell.pos(), "stale occupant position");
            }
        }
    }
}

pub fn assert_symbols_match(expected: &str, actual: &str) {
    assert_eq_text!(expected.trim_matches('\n'), actual.trim_matches('\n'));
}
