use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use serde::Deserialize;
use shared::domain::ViewportSize;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "viewer.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    pub image_path: PathBuf,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub tick_ms: u64,
    pub crop_dir: PathBuf,
    pub command_queue: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8765".into(),
            image_path: "sample.png".into(),
            viewport_width: 1100,
            viewport_height: 700,
            tick_ms: 16,
            crop_dir: ".".into(),
            command_queue: 256,
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> ViewportSize {
        ViewportSize::new(self.viewport_width, self.viewport_height)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    image_path: Option<PathBuf>,
    viewport_width: Option<u32>,
    viewport_height: Option<u32>,
    tick_ms: Option<u64>,
    crop_dir: Option<PathBuf>,
    command_queue: Option<usize>,
}

/// Defaults, then the config file (`viewer.toml` unless given), then
/// environment overrides.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    if let Ok(raw) = fs::read_to_string(path) {
        apply_file(&mut settings, &raw);
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file = match toml::from_str::<FileSettings>(raw) {
        Ok(file) => file,
        Err(error) => {
            warn!(%error, "ignoring invalid config file");
            return;
        }
    };

    if let Some(v) = file.bind_addr {
        settings.bind_addr = v;
    }
    if let Some(v) = file.image_path {
        settings.image_path = v;
    }
    if let Some(v) = file.viewport_width {
        settings.viewport_width = v;
    }
    if let Some(v) = file.viewport_height {
        settings.viewport_height = v;
    }
    if let Some(v) = file.tick_ms {
        settings.tick_ms = v;
    }
    if let Some(v) = file.crop_dir {
        settings.crop_dir = v;
    }
    if let Some(v) = file.command_queue {
        settings.command_queue = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("VIEWER_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = lookup("APP__IMAGE_PATH") {
        settings.image_path = v.into();
    }
    if let Some(v) = lookup("APP__CROP_DIR") {
        settings.crop_dir = v.into();
    }

    parse_into(&lookup, "APP__VIEWPORT_WIDTH", &mut settings.viewport_width);
    parse_into(&lookup, "APP__VIEWPORT_HEIGHT", &mut settings.viewport_height);
    parse_into(&lookup, "APP__TICK_MS", &mut settings.tick_ms);
    parse_into(&lookup, "APP__COMMAND_QUEUE", &mut settings.command_queue);
}

fn parse_into<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) {
    if let Some(parsed) = lookup(key).and_then(|v| v.trim().parse().ok()) {
        *slot = parsed;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
