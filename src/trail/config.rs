use std::fmt;
use std::path::Path;

use bevy::log::debug;
use bevy::prelude::Resource;
use serde::Deserialize;

use super::gate::DEFAULT_THRESHOLD;
use super::smoothing::DEFAULT_SMOOTHING;

/// Where the app looks for overrides
pub const CONFIG_PATH: &str = "assets/trail.json";

/// Error types for loading a trail config
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Could not read trail config: {}", e),
            ConfigError::Parse(e) => write!(f, "Malformed trail config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "Invalid trail config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Timing of one reveal, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// Anchor -> cursor glide
    pub move_duration: f32,
    /// Delay from reveal start until fade and scale-up begin
    pub fade_delay: f32,
    pub fade_duration: f32,
    pub scale_duration: f32,
    pub scale_target: f32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        RevealTiming {
            move_duration: 1.8,
            fade_delay: 0.8,
            fade_duration: 0.8,
            scale_duration: 0.8,
            scale_target: 2.0,
        }
    }
}

/// All tunables of the trail effect
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Pointer travel between reveals (logical pixels)
    pub threshold: f32,
    /// Fraction of the gap the spawn anchor closes per frame
    pub smoothing: f32,
    pub reveal: RevealTiming,
    /// Image asset paths, in reveal order. Empty means placeholder tiles.
    pub images: Vec<String>,
    /// Displayed image width as a fraction of the window width
    pub image_width: f32,
    /// Distance between the window edge and the hit region
    pub region_inset: f32,
    pub placeholder_count: usize,
    /// Width / height of generated placeholder tiles
    pub placeholder_aspect: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        TrailConfig {
            threshold: DEFAULT_THRESHOLD,
            smoothing: DEFAULT_SMOOTHING,
            reveal: RevealTiming::default(),
            images: Vec::new(),
            image_width: 0.15,
            region_inset: 0.0,
            placeholder_count: 8,
            placeholder_aspect: 0.75,
        }
    }
}

impl TrailConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!("read trail config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: TrailConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.to_string(),
            })
        }

        if is_negative(self.threshold) {
            return invalid("threshold", "must be zero or positive");
        }
        if !in_unit_range(self.smoothing) {
            return invalid("smoothing", "must be in (0, 1]");
        }
        let timing = &self.reveal;
        for (field, value) in [
            ("reveal.move_duration", timing.move_duration),
            ("reveal.fade_delay", timing.fade_delay),
            ("reveal.fade_duration", timing.fade_duration),
            ("reveal.scale_duration", timing.scale_duration),
        ] {
            if is_negative(value) {
                return invalid(field, "must be zero or positive");
            }
        }
        if !is_positive(timing.scale_target) {
            return invalid("reveal.scale_target", "must be positive");
        }
        if !in_unit_range(self.image_width) {
            return invalid("image_width", "must be in (0, 1]");
        }
        if is_negative(self.region_inset) {
            return invalid("region_inset", "must be zero or positive");
        }
        if !is_positive(self.placeholder_aspect) {
            return invalid("placeholder_aspect", "must be positive");
        }
        Ok(())
    }
}

/// NaN counts as negative
fn is_negative(value: f32) -> bool {
    value.is_nan() || value < 0.0
}

fn is_positive(value: f32) -> bool {
    !value.is_nan() && value > 0.0
}

/// In (0, 1], NaN excluded
fn in_unit_range(value: f32) -> bool {
    is_positive(value) && value <= 1.0
}
