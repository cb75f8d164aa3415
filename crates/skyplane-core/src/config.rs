//! Game parameters and their query-string overrides.
//!
//! Defaults mirror the tuning constants. Front-ends can override a subset
//! from a `key=value&key=value` string (the page query on the web, command
//! line arguments on native) via [`GameConfig::apply_query`].

use crate::constants::*;
use crate::error::ConfigError;
use crate::spring::SpringConfig;
use std::time::Duration;

/// Which screen axes follow the orientation stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// Horizontal movement only, driven by rotation around Z (steering wheel).
    #[default]
    SingleAxis,
    /// Horizontal driven by Z, vertical driven by X.
    TwoAxis,
}

impl ControlMode {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "single" | "single-axis" | "1" => Ok(Self::SingleAxis),
            "two" | "two-axis" | "2" => Ok(Self::TwoAxis),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            Self::SingleAxis => "Turn the device like a steering wheel to fly the plane",
            Self::TwoAxis => "Turn the device to steer, tilt it forward and back to climb or dive",
        }
    }
}

/// Sprite dimensions that feed the position bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteMetrics {
    pub extent: f32,
    pub draw_size: f32,
    pub bottom_margin: f32,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            extent: SPRITE_EXTENT,
            draw_size: SPRITE_DRAW_SIZE,
            bottom_margin: SPRITE_BOTTOM_MARGIN,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub mode: ControlMode,
    pub sensitivity: f32,
    pub spring: SpringConfig,
    pub sample_interval: Duration,
    pub sensor_timeout: Duration,
    pub scroll_step: f32,
    pub sprite: SpriteMetrics,
    pub vertical_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::default(),
            sensitivity: SENSITIVITY,
            spring: SpringConfig::default(),
            sample_interval: Duration::from_millis(SAMPLE_INTERVAL_MS),
            sensor_timeout: Duration::from_millis(SENSOR_TIMEOUT_MS),
            scroll_step: SCROLL_STEP,
            sprite: SpriteMetrics::default(),
            vertical_margin: VERTICAL_MARGIN,
        }
    }
}

impl GameConfig {
    /// Parse overrides on top of the defaults.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        cfg.apply_query(query)?;
        Ok(cfg)
    }

    /// Apply `key=value` pairs separated by `&`. A leading `?` is ignored.
    /// On error the config is left partially updated; callers that want
    /// all-or-nothing should apply to a clone.
    pub fn apply_query(&mut self, query: &str) -> Result<(), ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            self.set(key.trim(), value.trim())?;
        }
        self.validate()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "mode" => self.mode = ControlMode::parse(value)?,
            "sensitivity" => self.sensitivity = parse_f32(key, value)?,
            "damping" => self.spring.damping = parse_f32(key, value)?,
            "stiffness" => self.spring.stiffness = parse_f32(key, value)?,
            "mass" => self.spring.mass = parse_f32(key, value)?,
            "scroll_step" => self.scroll_step = parse_f32(key, value)?,
            "interval_ms" => {
                let ms = value.parse::<u64>().map_err(|_| invalid(key, value))?;
                self.sample_interval = Duration::from_millis(ms);
            }
            "timeout_ms" => {
                let ms = value.parse::<u64>().map_err(|_| invalid(key, value))?;
                self.sensor_timeout = Duration::from_millis(ms);
            }
            // Query strings from the browser may carry unrelated keys.
            "" => {}
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sensitivity.is_finite() {
            return Err(ConfigError::OutOfRange {
                key: "sensitivity",
                reason: "must be finite",
            });
        }
        if !(self.spring.stiffness > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "stiffness",
                reason: "must be positive",
            });
        }
        if !(self.spring.mass > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "mass",
                reason: "must be positive",
            });
        }
        if !(self.spring.damping >= 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "damping",
                reason: "must not be negative",
            });
        }
        if !(self.scroll_step >= 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "scroll_step",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

fn parse_f32(key: &str, value: &str) -> Result<f32, ConfigError> {
    value.parse::<f32>().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
