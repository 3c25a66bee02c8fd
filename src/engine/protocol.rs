use crate::model::game_state::{Answer, GameSnapshot};

/// Inputs the presentation layer sends to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    StartNewGame,
    Answer(Answer),
    ConfirmGuess { correct: bool },
}

/// Result of one command: whether it was accepted, plus everything there is to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResponse {
    pub accepted: bool,
    pub snapshot: GameSnapshot,
}
