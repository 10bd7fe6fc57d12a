//! Viewer configuration: colors, zoom behaviour and grid dimensions.
//!
//! Every field has a default from [`crate::consts`]. The host may pass a partial
//! JSON overlay; missing fields keep their defaults and the merged result is
//! validated before use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::grid::line_count;

use crate::consts::{
    CLEAR_COLOR, CROSSHAIR_COLOR, CURSOR_COLOR, GRID_COLOR, GRID_RADIUS, MAX_GRID_LINES, TILE_SIZE, ZOOM_MAX, ZOOM_MIN,
    ZOOM_STEP,
};

/// Errors produced while loading a [`ViewerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("zoom.min ({min}) must not exceed zoom.max ({max})")]
    InvalidZoomRange { min: f64, max: f64 },
    #[error("grid.radius / grid.tile_size yields {count} grid lines, more than {max}")]
    TooManyGridLines { count: usize, max: usize },
}

/// Zoom step and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Fraction of the current zoom applied per wheel step.
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self { step: ZOOM_STEP, min: ZOOM_MIN, max: ZOOM_MAX }
    }
}

/// Grid dimensions and stroke color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub tile_size: f64,
    pub radius: f64,
    pub color: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { tile_size: TILE_SIZE, radius: GRID_RADIUS, color: GRID_COLOR.to_owned() }
    }
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub clear_color: String,
    pub cursor_color: String,
    pub crosshair_color: String,
    pub zoom: ZoomSettings,
    pub grid: GridSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            clear_color: CLEAR_COLOR.to_owned(),
            cursor_color: CURSOR_COLOR.to_owned(),
            crosshair_color: CROSSHAIR_COLOR.to_owned(),
            zoom: ZoomSettings::default(),
            grid: GridSettings::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a (possibly partial) JSON overlay on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`ViewerConfig::validate`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check numeric fields: all must be positive and finite, the zoom range
    /// must not be inverted, and the grid must stay within [`MAX_GRID_LINES`].
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("zoom.step", self.zoom.step)?;
        positive("zoom.min", self.zoom.min)?;
        positive("zoom.max", self.zoom.max)?;
        positive("grid.tile_size", self.grid.tile_size)?;
        positive("grid.radius", self.grid.radius)?;
        if self.zoom.min > self.zoom.max {
            return Err(ConfigError::InvalidZoomRange { min: self.zoom.min, max: self.zoom.max });
        }
        let count = line_count(self.grid.radius, self.grid.tile_size);
        if count > MAX_GRID_LINES {
            return Err(ConfigError::TooManyGridLines { count, max: MAX_GRID_LINES });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
