//! Gallery Configuration
//!
//! Centralized tunables for walking the gallery and rating exhibits.
//! `Default` returns the values the gallery ships with; a JSON file can
//! override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{DEFAULT_SENSITIVITY, WALK_SPEED};
use crate::physics::DEFAULT_SMOOTHING;

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Geometry of the star tray shown while rating (window pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingTrayConfig {
    /// Width of the tray, centered horizontally on the window
    pub width: f32,
    /// Number of stars in the tray
    pub stars: u8,
    /// The cursor must be below this fraction of the window height
    pub active_from_height: f32,
    /// Slack before the right end that already counts as a full rating
    pub right_slack: f32,
}

impl Default for RatingTrayConfig {
    fn default() -> Self {
        Self {
            width: 512.0,
            stars: 5,
            active_from_height: 2.0 / 3.0,
            right_slack: 3.0,
        }
    }
}

/// Central configuration for the walkthrough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Base walking speed in m/s
    pub walk_speed: f32,
    /// Drag-to-look sensitivity in radians per pixel
    pub mouse_sensitivity: f32,
    /// Blend toward the corrected position each frame (1.0 = no smoothing)
    pub smoothing: f32,
    /// Floor distance within which an exhibit can be rated (meters)
    pub exhibit_radius: f32,
    /// Star tray geometry
    pub rating_tray: RatingTrayConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            smoothing: DEFAULT_SMOOTHING,
            exhibit_radius: 2.5,
            rating_tray: RatingTrayConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse a config from JSON text. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file.
    pub fn load_json(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
