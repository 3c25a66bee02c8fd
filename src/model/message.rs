use crate::model::game_state::Answer;

/// One line of the on-screen game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Asked { number: usize, question: String },
    Answered(Answer),
    Guessed(String),
    System(String),
}

impl Message {
    pub fn text(&self) -> String {
        match self {
            Message::Asked { number, question } => format!("Q{number}: {question}"),
            Message::Answered(answer) => format!("  → {answer}"),
            Message::Guessed(subject) => format!("Guess: {subject}"),
            Message::System(text) => text.clone(),
        }
    }
}
