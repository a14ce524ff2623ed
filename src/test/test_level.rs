#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        let game = GameTestState::new(r#"
#####
#@ .#
#$
"#);
        assert_eq!(game.puzzle.rows(), 3);
        assert_eq!(game.puzzle.cols(), 5);
        let padded = game.puzzle.cell_at(2, 4).unwrap();
        assert!(padded.is_empty());
        assert!(!padded.is_target());
        game.assert_matches("#####\n#@ .#\n#$   ");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let game = GameTestState::new("\n\n#@#\n\n#.#\n#$#\n");
        assert_eq!(game.puzzle.rows(), 3);
        assert!(game.puzzle.cell_at(1, 1).unwrap().is_target());
    }

    #[test]
    fn combined_symbols_set_target_and_occupant() {
        let game = GameTestState::new(r#"
#+*$$.#
"#);
        let actor = game.puzzle.cell_at(0, 1).unwrap();
        assert!(actor.is_target() && actor.has_actor());
        let placed = game.puzzle.cell_at(0, 2).unwrap();
        assert!(placed.is_target() && placed.has_box() && placed.on_target());

        assert_eq!(game.puzzle.actor_pos(), Vec2::new(0, 1));
        assert_eq!(game.puzzle.num_targets(), 3);
        assert_eq!(game.puzzle.num_boxes(), 3);
        assert_eq!(game.puzzle.num_on_target(), 1);
        assert_eq!(game.puzzle.num_actors(), 1);
    }

    #[test]
    fn occupants_know_their_cells_after_parsing() {
        let game = GameTestState::new(r#"
#####
#@$.#
#####
"#);
        game.assert_back_references();
    }

    #[test]
    fn rejects_unknown_symbol() {
        let err = Puzzle::from_screen("#@x#").unwrap_err();
        assert!(
            matches!(err, PuzzleError::InvalidSymbol { symbol: 'x', pos } if pos == Vec2::new(0, 2)),
            "unexpected error {:?}",
            err
        );
    }

    #[test]
    fn rejects_box_target_mismatch() {
        let err = Puzzle::from_screen("#@$ #").unwrap_err();
        assert!(matches!(err, PuzzleError::BoxTargetMismatch { boxes: 1, targets: 0 }));

        let err = Puzzle::from_screen("#@..$#").unwrap_err();
        assert!(matches!(err, PuzzleError::BoxTargetMismatch { boxes: 1, targets: 2 }));
    }

    #[test]
    fn rejects_wrong_actor_count() {
        let err = Puzzle::from_screen("# $.#").unwrap_err();
        assert!(matches!(err, PuzzleError::ActorCount(0)));

        let err = Puzzle::from_screen("#@ +$#").unwrap_err();
        assert!(matches!(err, PuzzleError::ActorCount(2)));

        let err = Puzzle::from_screen("").unwrap_err();
        assert!(matches!(err, PuzzleError::ActorCount(0)));
    }

    #[test]
    fn rejects_occupant_that_disagrees_with_target_flag() {
        let pos = Vec2::new(4, 2);
        for symbol in ['#', '$', '@'] {
            let err = Occupant::from_symbol(symbol, true, pos).unwrap_err();
            assert!(matches!(err, PuzzleError::TargetMismatch { pos: p, .. } if p == pos));
        }
        let err = Occupant::from_symbol('*', false, pos).unwrap_err();
        assert!(matches!(err, PuzzleError::TargetMismatch { symbol: '*', .. }));

        let wall = Occupant::from_symbol('#', false, pos).unwrap();
        assert_eq!(wall.kind(), OccupantKind::Wall);
        assert_eq!(wall.cell(), pos);
    }

    #[test]
    fn empty_and_target_symbols_have_no_occupant() {
        let err = Occupant::from_symbol(' ', false, Vec2::new(0, 0)).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidSymbol { symbol: ' ', .. }));
        assert!(Cell::from_symbol(Vec2::new(0, 0), '.').unwrap().occupant().is_none());
    }

    #[test]
    fn missing_level_file_is_an_io_error() {
        let err = Puzzle::from_file("levels/does-not-exist.txt").unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }

    #[test]
    fn errors_describe_the_offending_cell() {
        let err = Puzzle::from_screen("#@x#").unwrap_err();
        assert_eq!(err.to_string(), "invalid symbol 'x' at (0, 2)");
        assert_eq!(
            PuzzleError::IllegalMove(Direction::East).to_string(),
            "cannot move East"
        );
    }
}
