use std::sync::Arc;

use eframe::egui;
use tracing::{error, info};

use chara_quest::engine::{EngineCommand, EngineResponse, GameEngine};
use chara_quest::model::decision_tree::DecisionTree;
use chara_quest::model::game_state::{GameSnapshot, GameState};
use chara_quest::model::message::Message;

use super::center_panel::{draw_result_screen, draw_welcome_screen, draw_game_screen};
use super::right_panel::draw_history_panel;
use super::settings::{draw_settings_window, UiSettings};
use super::settings_io::{load_settings, save_settings};

pub const GAME_VERSION: &str = "CharaQuest v1.0 - Team Member Guessing Game";

/* =========================
   Screens
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Game,
    Result,
}

impl Screen {
    pub fn for_state(state: GameState) -> Self {
        match state {
            GameState::NotStarted => Screen::Welcome,
            GameState::Playing | GameState::Guessing => Screen::Game,
            GameState::Won | GameState::Lost | GameState::Error => Screen::Result,
        }
    }
}

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    pub screen: Screen,
    pub history: Vec<Message>,
    pub show_about: bool,
    pub show_settings: bool,
}

impl UiState {
    /// Extends the transcript with what changed in `resp`.
    pub fn record(&mut self, cmd: EngineCommand, resp: &EngineResponse) {
        if !resp.accepted {
            return;
        }

        let snap = &resp.snapshot;
        match cmd {
            EngineCommand::StartNewGame => self.history.clear(),
            EngineCommand::Answer(answer) => self.history.push(Message::Answered(answer)),
            EngineCommand::ConfirmGuess { correct } => {
                let verdict = if correct { "Correct!" } else { "Wrong guess." };
                self.history.push(Message::System(verdict.to_string()));
            }
        }

        match snap.state {
            GameState::Playing => {
                if let Some(question) = &snap.question {
                    self.history.push(Message::Asked {
                        number: snap.question_count + 1,
                        question: question.clone(),
                    });
                }
            }
            GameState::Guessing => {
                if let Some(guess) = &snap.guess {
                    self.history.push(Message::Guessed(guess.clone()));
                }
            }
            GameState::Lost if snap.guess.is_none() => {
                self.history.push(Message::System(snap.status.clone()));
            }
            _ => {}
        }

        self.screen = Screen::for_state(snap.state);
    }
}

/* =========================
   App
   ========================= */

pub struct CharaQuestApp {
    pub(super) ui: UiState,
    pub(super) settings: UiSettings,

    tree: Arc<DecisionTree>,
    engine: GameEngine,
    snapshot: GameSnapshot,
}

impl CharaQuestApp {
    pub fn new() -> Self {
        let tree = Arc::new(DecisionTree::team_members());
        if let Err(e) = tree.validate() {
            error!(error = %e, "decision tree is malformed");
        }

        let engine = GameEngine::new(Arc::clone(&tree));
        let snapshot = engine.snapshot();

        Self {
            ui: UiState::default(),
            settings: load_settings(),
            tree,
            engine,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn send_command(&mut self, cmd: EngineCommand) {
        let resp = self.engine.handle(cmd);
        self.engine.log_debug_info();
        self.ui.record(cmd, &resp);
        self.snapshot = resp.snapshot;
    }

    /// Drops the current session and returns to the welcome screen.
    pub fn restart(&mut self) {
        info!("restarting");
        self.engine = GameEngine::new(Arc::clone(&self.tree));
        self.snapshot = self.engine.snapshot();
        self.ui.history.clear();
        self.ui.screen = Screen::Welcome;
    }

    pub fn game_description(&self) -> String {
        let mut text = String::from(
            "Think of a team member from our development team,\n\
             and I'll try to guess who it is by asking up to 20 questions!\n\n\
             Team members I can guess:\n",
        );
        for subject in self.tree.subjects() {
            text.push_str(&format!("• {subject}\n"));
        }
        text
    }

    fn draw_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Start New Game").clicked() {
                        self.restart();
                    }
                    ui.separator();
                    if ui.button("Settings").clicked() {
                        self.ui.show_settings = true;
                    }
                    if ui.button("About").clicked() {
                        self.ui.show_about = true;
                    }
                    if ui.button("Exit").clicked() {
                        info!("Thanks for playing CharaQuest!");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn draw_about(&mut self, ctx: &egui::Context) {
        let description = self.game_description();

        egui::Window::new(GAME_VERSION)
            .open(&mut self.ui.show_about)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(description);
            });
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for CharaQuestApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.settings.apply(ctx);

        self.draw_menu(ctx);
        self.draw_about(ctx);

        if draw_settings_window(ctx, &mut self.ui.show_settings, &mut self.settings) {
            if let Err(e) = save_settings(&self.settings) {
                error!(error = %e, "failed to save ui settings");
            }
        }

        match self.ui.screen {
            Screen::Welcome => draw_welcome_screen(ctx, self),
            Screen::Game => {
                draw_history_panel(ctx, self);
                draw_game_screen(ctx, self);
            }
            Screen::Result => draw_result_screen(ctx, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chara_quest::model::game_state::Answer;

    fn run(engine: &mut GameEngine, ui: &mut UiState, cmd: EngineCommand) {
        let resp = engine.handle(cmd);
        ui.record(cmd, &resp);
    }

    #[test]
    fn screen_follows_state() {
        assert_eq!(Screen::for_state(GameState::NotStarted), Screen::Welcome);
        assert_eq!(Screen::for_state(GameState::Guessing), Screen::Game);
        assert_eq!(Screen::for_state(GameState::Error), Screen::Result);
    }

    #[test]
    fn transcript_tracks_questions_and_guess() {
        let mut engine = GameEngine::default();
        let mut ui = UiState::default();

        run(&mut engine, &mut ui, EngineCommand::StartNewGame);
        run(&mut engine, &mut ui, EngineCommand::Answer(Answer::No));
        run(&mut engine, &mut ui, EngineCommand::Answer(Answer::No));

        let lines: Vec<String> = ui.history.iter().map(Message::text).collect();
        assert_eq!(
            lines,
            vec![
                "Q1: Is the person female?",
                "  → NO",
                "Q2: Is the person's height above 5'7\"?",
                "  → NO",
                "Guess: Tommy Lee",
            ]
        );
        assert_eq!(ui.screen, Screen::Game);

        run(&mut engine, &mut ui, EngineCommand::ConfirmGuess { correct: false });
        assert_eq!(ui.screen, Screen::Result);
    }

    #[test]
    fn rejected_commands_leave_transcript_alone() {
        let mut engine = GameEngine::default();
        let mut ui = UiState::default();

        run(&mut engine, &mut ui, EngineCommand::Answer(Answer::Yes));

        assert!(ui.history.is_empty());
        assert_eq!(ui.screen, Screen::Welcome);
    }
}
