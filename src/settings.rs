//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Anything missing or malformed
//! falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audio::SoundEffect;
use crate::consts::STARTING_LIVES;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "STREET_BUDS_SETTINGS";
/// Settings file used when the variable is unset
pub const DEFAULT_SETTINGS_PATH: &str = "street_buds_settings.json";

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 60,
            QualityPreset::Medium => 250,
            QualityPreset::High => 1000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle bursts on pickups
    pub particles: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
    /// Looping track started with each level
    pub background_music: Option<String>,
    /// Cue name to sound file
    pub sounds: Vec<(String, String)>,

    // === Session ===
    /// Lives at the start of a run
    pub starting_lives: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            background_music: None,
            sounds: SoundEffect::ALL
                .iter()
                .map(|e| (e.name().to_string(), format!("assets/sounds/{}.wav", e.name())))
                .collect(),

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Settings {
    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Load from `$STREET_BUDS_SETTINGS` or the default path
    pub fn load() -> Self {
        let path =
            std::env::var(SETTINGS_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
        Self::load_from(path)
    }

    /// Load from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                Self::default()
            }),
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse and sanitize settings JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        settings.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.starting_lives = settings.starting_lives.max(1);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "quality": "High", "starting_lives": 5 }"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.starting_lives, 5);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.sounds.len(), SoundEffect::ALL.len());
    }

    #[test]
    fn test_values_are_sanitized() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 4.0, "sfx_volume": -2, "starting_lives": 0 }"#)
                .unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
        assert_eq!(settings.starting_lives, 1);
    }

    #[test]
    fn test_bad_file_falls_back() {
        let path = std::env::temp_dir().join(format!("street_buds_bad_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        std::fs::remove_file(&path).ok();

        assert_eq!(
            Settings::load_from("/definitely/not/settings.json"),
            Settings::default()
        );
    }

    #[test]
    fn test_particle_cap() {
        let mut settings = Settings {
            quality: QualityPreset::Low,
            ..Settings::default()
        };
        assert_eq!(settings.max_particles(), 60);
        settings.particles = false;
        assert_eq!(settings.max_particles(), 0);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }
}
