use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    pub ui_scale: f32,
    pub dark_mode: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            dark_mode: true,
        }
    }
}

impl UiSettings {
    pub const MIN_SCALE: f32 = 0.75;
    pub const MAX_SCALE: f32 = 2.0;

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_pixels_per_point(self.ui_scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE));
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }
}

/// Returns true when a setting changed this frame.
pub fn draw_settings_window(ctx: &egui::Context, open: &mut bool, settings: &mut UiSettings) -> bool {
    let mut changed = false;

    egui::Window::new("Settings")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("UI Scale");
            changed |= ui
                .add(egui::Slider::new(
                    &mut settings.ui_scale,
                    UiSettings::MIN_SCALE..=UiSettings::MAX_SCALE,
                ))
                .changed();

            changed |= ui.checkbox(&mut settings.dark_mode, "Dark mode").changed();

            ui.separator();
            if ui.button("Reset to defaults").clicked() {
                *settings = UiSettings::default();
                changed = true;
            }
        });

    changed
}
