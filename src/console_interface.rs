use crate::core::{Direction, Puzzle};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `session`, then `cleanup` whether or not the session failed.
/// A session error takes precedence over a cleanup error.
pub fn with_cleanup<T, S, C>(session: S, cleanup: C) -> Result<T, Box<dyn std::error::Error>>
where
    S: FnOnce() -> Result<T, Box<dyn std::error::Error>>,
    C: FnOnce() -> Result<(), Box<dyn std::error::Error>>,
{
    let result = session();
    let cleaned = cleanup();
    let value = result?;
    cleaned?;
    Ok(value)
}

pub fn render_state(puzzle: &Puzzle) -> GameRenderState {
    GameRenderState {
        board: puzzle.to_string(),
        progress: puzzle.progress(),
        legal_moves: puzzle.legal_moves(),
        error: None,
        last_change: None,
    }
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(state.board.as_str())
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status = format!(
            "Boxes on target: {}/{} | Legal: {}",
            state.progress.on_target,
            state.progress.targets,
            describe_moves(&state.legal_moves),
        );
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instructions = if state.progress.is_complete() {
            "Puzzle complete! Press any key to quit."
        } else if state.legal_moves.is_empty() {
            "Stuck. R to reset, Q to quit"
        } else {
            "WASD or arrows to move, P random move, R reset, Q quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn describe_moves(moves: &[Direction]) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(|dir| format!("{:?}", dir))
        .collect::<Vec<_>>()
        .join(", ")
}

pub enum ConsoleInput {
    Move(Direction),
    PlayerMove,
    Reset,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::North)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::South)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::West)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::East)
                }
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::PlayerMove,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
