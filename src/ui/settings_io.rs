use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::ui::settings::UiSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chara_quest");
    path.push("ui_settings.json");
    path
}

/// Falls back to defaults when the file is missing or unreadable.
pub fn load_settings() -> UiSettings {
    let path = settings_path();

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no saved ui settings");
            return UiSettings::default();
        }
    };

    parse_settings(&raw).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring corrupt ui settings");
        UiSettings::default()
    })
}

pub fn parse_settings(raw: &str) -> Result<UiSettings> {
    serde_json::from_str(raw).context("invalid ui settings json")
}

pub fn save_settings(settings: &UiSettings) -> Result<()> {
    let path = settings_path();

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
