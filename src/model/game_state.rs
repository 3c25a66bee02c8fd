use std::fmt;

use serde::{Deserialize, Serialize};

/// Question budget shared by every session.
pub const MAX_QUESTIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => f.write_str("YES"),
            Answer::No => f.write_str("NO"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    NotStarted,
    /// Asking questions.
    Playing,
    /// A subject leaf was reached, waiting for confirmation.
    Guessing,
    Won,
    Lost,
    /// Traversal hit a missing branch. Only a new game recovers.
    Error,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost | GameState::Error)
    }
}

/// A full copy of what the engine exposes after an interaction.
/// This is READ-ONLY outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub status: String,

    /// Only set while `Playing`.
    pub question: Option<String>,

    /// Set once a leaf is reached, kept after Won/Lost.
    pub guess: Option<String>,

    pub question_count: usize,
    pub remaining_questions: usize,
    pub max_questions: usize,
    pub answer_path: Vec<Answer>,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }
}
