mod ui;

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::app::GAME_VERSION)
            .with_inner_size([680.0, 420.0])
            .with_resizable(false),
        ..Default::default()
    };

    info!("CharaQuest started. Think of a team member and I'll try to guess who it is!");

    eframe::run_native(
        ui::app::GAME_VERSION,
        options,
        Box::new(|_cc| Ok(Box::new(ui::app::CharaQuestApp::new()))),
    )
}
