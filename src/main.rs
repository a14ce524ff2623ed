// Sokoban with deadlock-aware move legality
// Usage: SokobanSafety [interactive|random|export] [level-file]
// Controls: W/A/S/D or arrow keys, P lets the random player move, R resets, Q quits.

use SokobanSafety::console_interface::ConsoleInput::*;
use SokobanSafety::console_interface::{
    cleanup_terminal, handle_input, render_game, render_state, setup_terminal, with_cleanup,
};
use SokobanSafety::core::{Puzzle, RANDOM_MOVE_LIMIT};
use SokobanSafety::export::get_json_data;
use SokobanSafety::logging;
use SokobanSafety::player::{play, MoveChooser, RandomPlayer};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());
    let level_path = std::env::args().nth(2);

    let level = r#"
  #######
  #  .  #
  #  $  #
### $# ###
#   @   #
###   ###
  #  .  #
  #######
"#;
    //     let level = r#"
    // ########
    // # @$  .#
    // # $  $ #
    // # .# $ #
    // #..#   #
    // ########
    //     "#;

    let puzzle = match &level_path {
        Some(path) => Puzzle::from_file(path)?,
        None => Puzzle::from_screen(level)?,
    };

    match switch.as_str() {
        "interactive" => {
            logging::init_file(Path::new(logging::LOG_PATH))?;
            let mut terminal = setup_terminal()?;
            with_cleanup(|| run_interactive(puzzle, &mut terminal), cleanup_terminal)?;
        }
        "random" => {
            logging::init_stderr();
            run_random(puzzle)?;
        }
        "export" => {
            logging::init_stderr();
            println!("{}", get_json_data(&puzzle)?);
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive', 'random' or 'export'.",
                switch
            );
        }
    }

    Ok(())
}

fn run_random(mut puzzle: Puzzle) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", puzzle);
    let mut player = RandomPlayer::new();
    let outcome = play(&mut puzzle, &mut player, RANDOM_MOVE_LIMIT, |_, _| {})?;
    print!("{}", puzzle);
    println!(
        "{:?} after {} moves, {}/{} boxes on target",
        outcome.status,
        outcome.moves,
        puzzle.num_on_target(),
        puzzle.num_targets()
    );
    Ok(())
}

fn run_interactive(
    mut puzzle: Puzzle,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut player = RandomPlayer::new();
    render_game(terminal, &render_state(&puzzle))?;

    loop {
        let input = match handle_input() {
            Ok(input) => input,
            Err(_) => {
                println!("error reading input");
                break;
            }
        };

        let result = match input {
            Quit => break,
            Move(dir) => puzzle.move_actor(dir).map(Some),
            PlayerMove => {
                let choices = puzzle.legal_moves();
                player
                    .choose(&choices)
                    .and_then(|dir| puzzle.move_actor(dir))
                    .map(Some)
            }
            Reset => puzzle.reset().map(|_| None),
            Timeout | Unknown => continue,
        };

        let mut to_render = render_state(&puzzle);
        match result {
            Ok(report) => to_render.last_change = report.map(|report| report.change_type),
            Err(err) => to_render.error = Some(err.to_string()),
        }
        render_game(terminal, &to_render)?;

        if to_render.progress.is_complete() {
            // Keep showing the win screen until user inputs
            loop {
                match handle_input() {
                    Ok(Timeout) => {}
                    Ok(_) => break,
                    Err(_) => {
                        println!("error reading input");
                        break;
                    }
                }
            }
            break;
        }
    }

    Ok(())
}
