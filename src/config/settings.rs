//! Runtime settings.
//!
//! Every field defaults to the matching constant in `config::scene`, so a
//! settings file only needs the values it overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::scene::{
    CANVAS_HEIGHT, CANVAS_WIDTH, CHEF_BOTTOM_OFFSET, CHEF_HALF_WIDTH, CHEF_SPEED,
    CHEF_TOP_OFFSET, DISCRETE_STEP, FRAME_RATE, SPAWN_OFFSET, UNITS_PER_PIXEL,
};
use crate::error::SceneError;
use crate::game::bounds::CharacterExtents;

/// How position updates are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Continuous when the terminal reports key releases, discrete otherwise.
    #[default]
    Auto,
    /// Held-key tracking with a per-frame integration step.
    Continuous,
    /// One fixed step per key-down event, no frame loop.
    Discrete,
}

impl RunMode {
    /// Resolve `Auto` against whether the terminal can report key releases.
    pub fn resolve(self, releases_supported: bool) -> RunMode {
        match self {
            RunMode::Auto if releases_supported => RunMode::Continuous,
            RunMode::Auto => RunMode::Discrete,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub mode: RunMode,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub half_width: f64,
    pub top_offset: f64,
    pub bottom_offset: f64,
    pub speed: f64,
    pub spawn_offset: f64,
    pub frame_rate: u32,
    pub discrete_step: f64,
    pub units_per_pixel: f64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            mode: RunMode::Auto,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            half_width: CHEF_HALF_WIDTH,
            top_offset: CHEF_TOP_OFFSET,
            bottom_offset: CHEF_BOTTOM_OFFSET,
            speed: CHEF_SPEED,
            spawn_offset: SPAWN_OFFSET,
            frame_rate: FRAME_RATE,
            discrete_step: DISCRETE_STEP,
            units_per_pixel: UNITS_PER_PIXEL,
        }
    }
}

impl SceneSettings {
    /// Load settings from a JSON file and validate them.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let raw = fs::read_to_string(path).map_err(|source| SceneError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&raw).map_err(|source| SceneError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        info!("[Config] Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values that would make the scene meaningless.
    pub fn validate(&self) -> Result<(), SceneError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("speed", self.speed),
            ("discrete_step", self.discrete_step),
            ("units_per_pixel", self.units_per_pixel),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::InvalidSettings(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let non_negative = [
            ("half_width", self.half_width),
            ("top_offset", self.top_offset),
            ("bottom_offset", self.bottom_offset),
            ("spawn_offset", self.spawn_offset),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SceneError::InvalidSettings(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.frame_rate == 0 {
            return Err(SceneError::InvalidSettings(
                "frame_rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn extents(&self) -> CharacterExtents {
        CharacterExtents {
            half_width: self.half_width,
            top_offset: self.top_offset,
            bottom_offset: self.bottom_offset,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate))
    }
}
