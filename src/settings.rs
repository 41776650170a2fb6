//! Game settings and tuning
//!
//! Loaded from a JSON file; every field falls back to its default when
//! missing.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::{SceneConfig, TrackingConfig};
use crate::sim::ThrowTuning;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Dice ===
    /// Dice in hand at session start
    pub initial_dice: u32,
    /// Number of selectable dice styles
    pub dice_styles: u8,
    /// Spawn offsets from the camera; caps how many dice one swipe throws
    pub dice_offsets: Vec<Vec3>,

    // === Throw ===
    pub throw: ThrowTuning,

    // === Lifecycle ===
    /// Dice below this height are returned to the hand
    pub fall_out_y: f32,

    // === Focus ===
    /// Anchor drop below screen center, as a fraction of half-height
    pub focus_anchor_drop: f32,
    /// Initial viewport size (points) until the host reports one
    pub viewport: Vec2,

    // === Session ===
    /// RNG seed for dice rotations (random when absent)
    pub seed: Option<u64>,
    pub tracking: TrackingConfig,
    pub scene: SceneConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_dice: INITIAL_DICE_COUNT,
            dice_styles: DICE_STYLE_COUNT,
            dice_offsets: DICE_OFFSETS.to_vec(),

            throw: ThrowTuning::default(),

            fall_out_y: FALL_OUT_Y,

            focus_anchor_drop: FOCUS_ANCHOR_DROP,
            viewport: Vec2::new(375.0, 812.0),

            seed: None,
            tracking: TrackingConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.dice_styles == 0 {
            return Err(SettingsError::Invalid("dice_styles must be at least 1"));
        }
        if self.dice_offsets.is_empty() {
            return Err(SettingsError::Invalid("dice_offsets must not be empty"));
        }
        if !self.dice_offsets.iter().all(|o| o.is_finite()) {
            return Err(SettingsError::Invalid("dice_offsets must be finite"));
        }
        if !self.throw.impulse_per_distance.is_finite() || self.throw.impulse_per_distance < 0.0 {
            return Err(SettingsError::Invalid(
                "throw.impulse_per_distance must be finite and non-negative",
            ));
        }
        if !self.throw.pitch_bias.is_finite() {
            return Err(SettingsError::Invalid("throw.pitch_bias must be finite"));
        }
        if !self.fall_out_y.is_finite() {
            return Err(SettingsError::Invalid("fall_out_y must be finite"));
        }
        if !self.focus_anchor_drop.is_finite() {
            return Err(SettingsError::Invalid("focus_anchor_drop must be finite"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }
}
