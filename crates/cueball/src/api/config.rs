use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::table::rack::RackLayout;

/// Simulation parameters, provided by the game.
/// Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Playing length (west to east) in table units (default: 1000).
    pub length: f64,
    /// Playing width (south to north). `None` uses the 2:1 ratio of a real table.
    pub width: Option<f64>,
    /// Radius shared by every ball (default: 15).
    pub ball_radius: f64,
    /// Mass shared by every ball (default: 10).
    pub ball_mass: f64,
    /// Pocket capture radius as a multiple of `ball_radius` (default: 3.25).
    pub pocket_radius_factor: f64,
    /// How far north of the centerline the cue ball is placed when racked.
    pub cue_offset: f64,
    /// Velocity kept after each frame, in `(0, 1]`. 1.0 disables rolling friction.
    pub damping: f64,
    /// Force applied by a strike along the cue angle (default: 50).
    pub strike_magnitude: f64,
    /// Speed at or below which a ball counts as stopped.
    pub rest_speed: f64,
    /// Layout racked when the table is created.
    pub layout: RackLayout,
    /// Simulation frames per second of wall-clock time (default: 60).
    pub frames_per_second: f64,
    /// Most frames run to catch up after a stall (default: 10).
    pub max_catch_up_frames: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            length: 1000.0,
            width: None,
            ball_radius: 15.0,
            ball_mass: 10.0,
            pocket_radius_factor: 3.25,
            cue_offset: 20.0,
            damping: 0.99,
            strike_magnitude: 50.0,
            rest_speed: 0.05,
            layout: RackLayout::NineBall,
            frames_per_second: 60.0,
            max_catch_up_frames: 10,
        }
    }
}

impl TableConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Playing width, falling back to half the length.
    pub fn table_width(&self) -> f64 {
        self.width.unwrap_or(self.length / 2.0)
    }

    pub fn hole_radius(&self) -> f64 {
        self.pocket_radius_factor * self.ball_radius
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("length", self.length),
            ("width", self.table_width()),
            ("ball_radius", self.ball_radius),
            ("ball_mass", self.ball_mass),
            ("pocket_radius_factor", self.pocket_radius_factor),
            ("frames_per_second", self.frames_per_second),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if !(self.rest_speed.is_finite() && self.rest_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "rest_speed must be non-negative, got {}",
                self.rest_speed
            )));
        }
        if !self.strike_magnitude.is_finite() || !self.cue_offset.is_finite() {
            return Err(ConfigError::Invalid("strike_magnitude and cue_offset must be finite".into()));
        }
        // The rack and the cue ball must start clear of every cushion.
        let (depth, half_width) = self.layout.footprint(self.ball_radius);
        let half_table = self.table_width() / 2.0;
        if self.length * 0.75 + depth >= self.length {
            return Err(ConfigError::Invalid(format!(
                "ball_radius {} is too large for a table of length {}",
                self.ball_radius, self.length
            )));
        }
        if half_width >= half_table {
            return Err(ConfigError::Invalid(format!(
                "{:?} rack does not fit across a table of width {}",
                self.layout,
                self.table_width()
            )));
        }
        if self.cue_offset.abs() + self.ball_radius >= half_table {
            return Err(ConfigError::Invalid(format!(
                "cue_offset {} puts the cue ball into a cushion",
                self.cue_offset
            )));
        }
        Ok(())
    }
}
