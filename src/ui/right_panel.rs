use eframe::egui;

use super::app::CharaQuestApp;

pub fn draw_history_panel(ctx: &egui::Context, app: &CharaQuestApp) {
    let snap = app.snapshot();

    egui::SidePanel::right("history")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Game History");
            ui.separator();

            ui.label(format!("Questions Asked: {}", snap.question_count));
            ui.label(format!("Remaining: {}", snap.remaining_questions));

            if !snap.answer_path.is_empty() {
                ui.add_space(6.0);
                ui.label("Your Answers:");
                let path = snap
                    .answer_path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                ui.add(egui::Label::new(egui::RichText::new(path).monospace()).wrap());
            }

            ui.separator();

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for msg in &app.ui.history {
                        ui.label(egui::RichText::new(msg.text()).monospace());
                    }
                });
        });
}
