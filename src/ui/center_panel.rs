use eframe::egui;

use chara_quest::engine::EngineCommand;
use chara_quest::model::game_state::{Answer, GameState};

use super::app::CharaQuestApp;

const BUTTON_SIZE: [f32; 2] = [160.0, 32.0];

fn big_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add(egui::Button::new(label).min_size(BUTTON_SIZE.into()))
        .clicked()
}

/* =========================
   Welcome
   ========================= */

pub fn draw_welcome_screen(ctx: &egui::Context, app: &mut CharaQuestApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("CharaQuest")
                    .size(32.0)
                    .strong()
                    .color(egui::Color32::LIGHT_BLUE),
            );
            ui.add_space(12.0);
            ui.label("Think of a team member. I'll guess who it is!");
            ui.label(app.snapshot().status.as_str());
            ui.add_space(24.0);

            if big_button(ui, "Start Game") {
                app.send_command(EngineCommand::StartNewGame);
            }
        });
    });
}

/* =========================
   Game
   ========================= */

pub fn draw_game_screen(ctx: &egui::Context, app: &mut CharaQuestApp) {
    let snap = app.snapshot().clone();
    let mut command = None;

    egui::TopBottomPanel::top("status").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(&snap.status).size(16.0).strong());
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            let prompt = match (snap.state, &snap.question, &snap.guess) {
                (GameState::Playing, Some(question), _) => question.clone(),
                (GameState::Guessing, _, Some(guess)) => format!("Is your team member {guess}?"),
                _ => String::new(),
            };
            ui.label(egui::RichText::new(prompt).size(20.0));

            ui.add_space(40.0);

            ui.horizontal(|ui| {
                match snap.state {
                    GameState::Playing => {
                        if big_button(ui, "Yes") {
                            command = Some(EngineCommand::Answer(Answer::Yes));
                        }
                        if big_button(ui, "No") {
                            command = Some(EngineCommand::Answer(Answer::No));
                        }
                    }
                    GameState::Guessing => {
                        if big_button(ui, "Yes, that's correct!") {
                            command = Some(EngineCommand::ConfirmGuess { correct: true });
                        }
                        if big_button(ui, "No, you're wrong!") {
                            command = Some(EngineCommand::ConfirmGuess { correct: false });
                        }
                    }
                    _ => {}
                }
            });
        });
    });

    if let Some(cmd) = command {
        app.send_command(cmd);
    }
}

/* =========================
   Result
   ========================= */

pub fn draw_result_screen(ctx: &egui::Context, app: &mut CharaQuestApp) {
    let snap = app.snapshot().clone();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);

            match snap.state {
                GameState::Won => {
                    ui.heading("🎉 I Won! 🎉");
                    ui.label(format!(
                        "I guessed your team member in {} questions!",
                        snap.question_count
                    ));
                    if let Some(guess) = &snap.guess {
                        ui.label(egui::RichText::new(format!("It was: {guess}")).strong());
                    }
                }
                GameState::Error => {
                    ui.heading("Oops!");
                    ui.label(&snap.status);
                }
                _ => {
                    ui.heading("😅 You Got Me! 😅");
                    ui.label(&snap.status);
                    ui.label("Try thinking of one of the other members!");
                }
            }

            ui.add_space(30.0);
            if big_button(ui, "Play Again") {
                app.restart();
            }
        });
    });
}
