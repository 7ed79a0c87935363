use std::env::VarError;

use json::JsonValue;
use log::{info, warn};

use pwgen_lib::{generator::DEFAULT_LENGTH, CharacterClass, ClassSet, GenerationConfig};

use crate::theme::Theme;

/// Startup defaults. Read once, never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    pub theme: Theme,
    pub scale: f32,
    pub generation: GenerationConfig,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            scale: 1.5,
            generation: GenerationConfig::default(),
        }
    }
}

fn class_key(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Uppercase => "uppercase",
        CharacterClass::Lowercase => "lowercase",
        CharacterClass::Digit => "digits",
        CharacterClass::Special => "special",
    }
}

impl GuiConfig {
    pub fn from_json(value: &JsonValue) -> GuiConfig {
        let defaults = GuiConfig::default();

        let theme = match value["dark"].as_bool() {
            Some(true) => Theme::Dark,
            Some(false) => Theme::Light,
            None => defaults.theme,
        };

        let scale = value["scale"]
            .as_f32()
            .filter(|scale| (1.0..=3.0).contains(scale))
            .unwrap_or(defaults.scale);

        let length = value["length"].as_i64().unwrap_or(DEFAULT_LENGTH);

        let mut classes = ClassSet::all();
        for class in CharacterClass::ALL {
            if let Some(enabled) = value[class_key(class)].as_bool() {
                classes.set(class, enabled);
            }
        }

        GuiConfig {
            theme,
            scale,
            generation: GenerationConfig::new(classes, length),
        }
    }
}

fn get_config_dir() -> Result<std::path::PathBuf, VarError> {
    #[cfg(unix)]
    let app_data = std::env::var("HOME")? + "/.config";

    #[cfg(windows)]
    let app_data = std::env::var("APP_DATA")?;

    let mut path = std::path::PathBuf::from(app_data);
    path.push("pwgen");

    Ok(path)
}

fn get_config_file() -> Result<std::path::PathBuf, VarError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.json");

    Ok(config_dir)
}

pub fn parse_config(contents: &str) -> GuiConfig {
    match json::parse(contents) {
        Ok(value) => GuiConfig::from_json(&value),
        Err(error) => {
            warn!("failed to parse config: {}", error.to_string());
            GuiConfig::default()
        }
    }
}

pub fn get_config() -> GuiConfig {
    let file = match get_config_file() {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to get config: {}", error.to_string());
            return GuiConfig::default();
        }
    };

    if !file.exists() {
        info!("no config at \"{}\", using defaults", file.display().to_string());
        return GuiConfig::default();
    }

    info!("reading from file \"{}\"", file.display().to_string());

    let file = match std::fs::read_to_string(file) {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to get config: {}", error.to_string());
            return GuiConfig::default();
        }
    };

    parse_config(file.as_str())
}
