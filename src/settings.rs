//! Scene settings
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Scene and ball configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Width of the area segments are scattered over
    pub canvas_width: f32,
    /// Height of the area segments are scattered over
    pub canvas_height: f32,
    /// Number of random segments
    pub segment_count: usize,

    // === Ball ===
    /// Ball radius
    pub ball_radius: f32,
    /// Ball speed (pixels per tick) once aimed
    pub ball_speed: f32,
    /// Initial ball center
    pub ball_start: [f32; 2],

    /// Scene seed; the same seed always yields the same segments
    pub seed: u64,
    /// Start with the debug overlay on
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            segment_count: SEGMENT_COUNT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_start: [0.0, 0.0],

            seed: 0,
            debug: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values the simulation cannot use
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0)
            || !self.canvas_width.is_finite()
            || !self.canvas_height.is_finite()
        {
            return Err(SettingsError::Invalid(format!(
                "canvas must be positive and finite, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.ball_radius < 0.0 || !self.ball_radius.is_finite() {
            return Err(SettingsError::Invalid(format!(
                "ball_radius must be non-negative, got {}",
                self.ball_radius
            )));
        }
        if !self.ball_speed.is_finite() {
            return Err(SettingsError::Invalid("ball_speed must be finite".into()));
        }
        if !self.ball_start.iter().all(|c| c.is_finite()) {
            return Err(SettingsError::Invalid("ball_start must be finite".into()));
        }
        Ok(())
    }

    /// Initial ball center as a point
    pub fn ball_start_point(&self) -> Vec2 {
        Vec2::from_array(self.ball_start)
    }

    /// Center of the canvas
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height) / 2.0
    }
}
