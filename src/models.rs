use crate::core::{Direction, GameChangeType, Progress};

pub struct GameRenderState {
    pub board: String,
    pub progress: Progress,
    pub legal_moves: Vec<Direction>,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
}
