use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::decision_tree::{format_path, DecisionTree, TreeNode};
use crate::model::game_state::{Answer, GameSnapshot, GameState, MAX_QUESTIONS};

/// Mutable state of one game. Replaced wholesale on every new game.
#[derive(Debug, Default)]
struct Session {
    state: GameState,
    /// Append-only; doubles as the position in the tree.
    answer_path: Vec<Answer>,
    current_guess: Option<String>,
    question_count: usize,
}

/// Drives one session over a shared, read-only decision tree.
#[derive(Debug)]
pub struct GameEngine {
    tree: Arc<DecisionTree>,
    session: Session,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Arc::new(DecisionTree::team_members()))
    }
}

impl GameEngine {
    pub fn new(tree: Arc<DecisionTree>) -> Self {
        Self {
            tree,
            session: Session::default(),
        }
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn handle(&mut self, cmd: EngineCommand) -> EngineResponse {
        let accepted = match cmd {
            EngineCommand::StartNewGame => {
                self.start_new_game();
                true
            }
            EngineCommand::Answer(answer) => self.answer(answer),
            EngineCommand::ConfirmGuess { correct: true } => self.confirm_guess_correct(),
            EngineCommand::ConfirmGuess { correct: false } => self.confirm_guess_incorrect(),
        };

        EngineResponse {
            accepted,
            snapshot: self.snapshot(),
        }
    }

    /* =========================
       Inputs
       ========================= */

    pub fn start_new_game(&mut self) {
        self.session = Session {
            state: GameState::Playing,
            ..Session::default()
        };
        info!("new game started");
    }

    pub fn answer_yes(&mut self) -> bool {
        self.answer(Answer::Yes)
    }

    pub fn answer_no(&mut self) -> bool {
        self.answer(Answer::No)
    }

    pub fn answer(&mut self, answer: Answer) -> bool {
        if self.session.state != GameState::Playing {
            warn!(state = ?self.session.state, %answer, "answer rejected");
            return false;
        }

        self.session.answer_path.push(answer);
        self.session.question_count += 1;

        let Some(node) = self.tree.descend(&self.session.answer_path) else {
            self.session.state = GameState::Error;
            warn!(
                path = %format_path(&self.session.answer_path),
                "decision tree has no branch here"
            );
            return false;
        };

        if let Some(subject) = node.subject() {
            self.session.current_guess = Some(subject.to_string());
            self.session.state = GameState::Guessing;
            debug!(subject, count = self.session.question_count, "reached a guess");
            return true;
        }

        // Unreachable with the team-member tree (depth 3), kept for deeper trees.
        if self.session.question_count >= MAX_QUESTIONS {
            self.session.state = GameState::Lost;
            info!("ran out of questions");
            return true;
        }

        debug!(%answer, count = self.session.question_count, "still asking");
        true
    }

    pub fn confirm_guess_correct(&mut self) -> bool {
        self.finish_guess(GameState::Won)
    }

    pub fn confirm_guess_incorrect(&mut self) -> bool {
        self.finish_guess(GameState::Lost)
    }

    fn finish_guess(&mut self, outcome: GameState) -> bool {
        if self.session.state != GameState::Guessing {
            warn!(state = ?self.session.state, "guess confirmation rejected");
            return false;
        }

        self.session.state = outcome;
        info!(
            ?outcome,
            guess = self.session.current_guess.as_deref().unwrap_or_default(),
            questions = self.session.question_count,
            "game over"
        );
        true
    }

    /* =========================
       Outputs
       ========================= */

    pub fn state(&self) -> GameState {
        self.session.state
    }

    fn current_node(&self) -> Option<&TreeNode> {
        self.tree.descend(&self.session.answer_path)
    }

    pub fn current_question(&self) -> Option<&str> {
        if self.session.state != GameState::Playing {
            return None;
        }
        self.current_node().and_then(TreeNode::question)
    }

    pub fn current_guess_subject(&self) -> Option<&str> {
        self.session.current_guess.as_deref()
    }

    pub fn question_count(&self) -> usize {
        self.session.question_count
    }

    pub fn max_questions(&self) -> usize {
        MAX_QUESTIONS
    }

    pub fn remaining_questions(&self) -> usize {
        MAX_QUESTIONS.saturating_sub(self.session.question_count)
    }

    /// A copy of the recorded answers.
    pub fn answer_path(&self) -> Vec<Answer> {
        self.session.answer_path.clone()
    }

    pub fn answer_path_string(&self) -> String {
        self.session
            .answer_path
            .iter()
            .map(Answer::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn is_game_over(&self) -> bool {
        self.session.state.is_terminal()
    }

    pub fn is_playing(&self) -> bool {
        self.session.state == GameState::Playing
    }

    pub fn is_guessing(&self) -> bool {
        self.session.state == GameState::Guessing
    }

    pub fn status_message(&self) -> String {
        let count = self.session.question_count;

        match self.session.state {
            GameState::NotStarted => "Click 'Start Game' to begin!".to_string(),
            GameState::Playing => format!("Question {} of {}", count + 1, MAX_QUESTIONS),
            GameState::Guessing => "Is my guess correct?".to_string(),
            GameState::Won => {
                format!("I won! I guessed your team member in {count} questions!")
            }
            GameState::Lost if count >= MAX_QUESTIONS => {
                "You stumped me! I ran out of questions.".to_string()
            }
            GameState::Lost => "You got me! I couldn't guess your team member.".to_string(),
            GameState::Error => "Oops! Something went wrong. Please start a new game.".to_string(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state(),
            status: self.status_message(),
            question: self.current_question().map(str::to_owned),
            guess: self.current_guess_subject().map(str::to_owned),
            question_count: self.question_count(),
            remaining_questions: self.remaining_questions(),
            max_questions: MAX_QUESTIONS,
            answer_path: self.answer_path(),
        }
    }

    pub fn log_debug_info(&self) {
        let node = match self.current_node() {
            Some(TreeNode::Question { question, .. }) => format!("Question: {question}"),
            Some(TreeNode::Subject { subject }) => format!("Subject: {subject}"),
            None => "none".to_string(),
        };

        debug!(
            state = ?self.session.state,
            questions = self.session.question_count,
            node = %node,
            path = %self.answer_path_string(),
            guess = ?self.session.current_guess,
            "game debug info"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_tree() -> Arc<DecisionTree> {
        Arc::new(DecisionTree::new(TreeNode::Question {
            question: "Is it blue?".into(),
            yes: Some(Box::new(TreeNode::leaf("Sky"))),
            no: None,
        }))
    }

    #[test]
    fn fresh_engine_is_not_started() {
        let engine = GameEngine::default();

        assert_eq!(engine.state(), GameState::NotStarted);
        assert_eq!(engine.status_message(), "Click 'Start Game' to begin!");
        assert_eq!(engine.current_question(), None);
        assert_eq!(engine.remaining_questions(), MAX_QUESTIONS);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn start_puts_engine_at_root() {
        let mut engine = GameEngine::default();
        engine.start_new_game();

        assert!(engine.is_playing());
        assert_eq!(engine.current_question(), Some("Is the person female?"));
        assert_eq!(engine.status_message(), "Question 1 of 20");
    }

    #[test]
    fn answers_rejected_before_start() {
        let mut engine = GameEngine::default();

        assert!(!engine.answer_yes());
        assert!(!engine.answer_no());
        assert_eq!(engine.question_count(), 0);
        assert!(engine.answer_path().is_empty());
    }

    #[test]
    fn confirm_rejected_while_playing() {
        let mut engine = GameEngine::default();
        engine.start_new_game();

        assert!(!engine.confirm_guess_correct());
        assert!(!engine.confirm_guess_incorrect());
        assert_eq!(engine.state(), GameState::Playing);
    }

    #[test]
    fn missing_branch_is_an_error() {
        let mut engine = GameEngine::new(broken_tree());
        engine.start_new_game();

        assert!(!engine.answer_no());
        assert_eq!(engine.state(), GameState::Error);
        assert!(engine.is_game_over());
        assert_eq!(engine.question_count(), 1);
        assert_eq!(engine.answer_path(), vec![Answer::No]);
        assert_eq!(engine.current_question(), None);
        assert_eq!(
            engine.status_message(),
            "Oops! Something went wrong. Please start a new game."
        );

        assert!(!engine.answer_yes());
        assert_eq!(engine.question_count(), 1);
    }

    #[test]
    fn new_game_recovers_from_error() {
        let mut engine = GameEngine::new(broken_tree());
        engine.start_new_game();
        engine.answer_no();

        engine.start_new_game();
        assert!(engine.is_playing());
        assert_eq!(engine.question_count(), 0);
        assert!(engine.answer_yes());
        assert_eq!(engine.current_guess_subject(), Some("Sky"));
    }

    #[test]
    fn answer_path_string_joins_answers() {
        let mut engine = GameEngine::default();
        engine.start_new_game();
        engine.answer_no();
        engine.answer_yes();

        assert_eq!(engine.answer_path_string(), "NO -> YES");
    }

    #[test]
    fn handle_reports_acceptance_and_snapshot() {
        let mut engine = GameEngine::default();

        let rejected = engine.handle(EngineCommand::Answer(Answer::Yes));
        assert!(!rejected.accepted);
        assert_eq!(rejected.snapshot.state, GameState::NotStarted);

        let started = engine.handle(EngineCommand::StartNewGame);
        assert!(started.accepted);
        assert_eq!(
            started.snapshot.question.as_deref(),
            Some("Is the person female?")
        );

        engine.handle(EngineCommand::Answer(Answer::Yes));
        let guess = engine.handle(EngineCommand::Answer(Answer::No));
        assert!(guess.accepted);
        assert_eq!(guess.snapshot.state, GameState::Guessing);
        assert_eq!(guess.snapshot.guess.as_deref(), Some("Alleah Jane"));
        assert_eq!(guess.snapshot.question, None);

        let done = engine.handle(EngineCommand::ConfirmGuess { correct: true });
        assert!(done.accepted);
        assert!(done.snapshot.is_game_over());
        assert_eq!(done.snapshot.answer_path, vec![Answer::Yes, Answer::No]);
    }
}
