use crate::color::Color;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "artboard_settings.json";

/// Persisted application settings. Missing fields fall back to their
/// defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub debug_logging: bool,
    #[serde(default)]
    pub randomize_palette: bool,
    #[serde(default = "default_brush_color")]
    pub brush_color: Color,
    #[serde(default = "default_brush_size")]
    pub brush_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            randomize_palette: false,
            brush_color: default_brush_color(),
            brush_size: default_brush_size(),
        }
    }
}

fn default_brush_color() -> Color {
    Color::BLACK
}

fn default_brush_size() -> f32 {
    1.0
}

pub fn settings_path_from_exe_path(exe_path: &Path) -> Result<PathBuf> {
    let parent = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {}", exe_path.display()))?;
    Ok(parent.join(SETTINGS_FILE_NAME))
}

pub fn resolve_settings_path() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().context("resolve current executable")?;
    settings_path_from_exe_path(&exe_path)
}

pub fn load() -> Result<Settings> {
    let path = resolve_settings_path()?;
    load_from_path(&path)
}

pub fn save(settings: &Settings) -> Result<PathBuf> {
    let path = resolve_settings_path()?;
    save_to_path(&path, settings)?;
    Ok(path)
}

fn load_from_path(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("deserialize settings file {}", path.display()))
}

fn save_to_path(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create settings parent folder {}", parent.display()))?;
    }
    let content = serde_json::to_string_pretty(settings).context("serialize settings")?;
    std::fs::write(path, content)
        .with_context(|| format!("write settings file {}", path.display()))
}
