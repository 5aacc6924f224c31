//! Gallery configuration: arena geometry, timing constants and spring tuning.
//!
//! Every field has a default equal to the reference gallery, so a JSON file
//! only needs to name the values it overrides.

use std::path::Path;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::spring::SpringParams;
use crate::timer::Duration;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Size of the drag arena and placement of its anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    /// Gap between an arena edge and the outer edge of its anchor target.
    pub anchor_inset: f64,
    /// Radius of an anchor target.
    pub anchor_radius: f64,
    /// Half the side of the draggable element.
    pub element_half_size: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            anchor_inset: 16.0,
            anchor_radius: 8.0,
            element_half_size: 8.0,
        }
    }
}

impl ArenaConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Distance from an edge to the center of the anchor on that edge.
    pub fn anchor_edge_distance(&self) -> f64 {
        self.anchor_inset + self.anchor_radius
    }
}

/// Longest accepted delay (one hour).
pub const MAX_DELAY_MS: u64 = 60 * 60 * 1000;

/// Delays driving the timed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub processing_delay_ms: u64,
    pub feedback_delay_ms: u64,
    /// Delay after drag release before the drag highlight is cleared.
    pub release_grace_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 800,
            feedback_delay_ms: 1000,
            release_grace_ms: 100,
        }
    }
}

impl TimingConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn release_grace(&self) -> Duration {
        Duration::from_millis(self.release_grace_ms)
    }
}

/// Top-level gallery configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub arena: ArenaConfig,
    pub timing: TimingConfig,
    pub snap_spring: SpringParams,
    /// Key that drives the mounted indicator (compared case-insensitively).
    pub activate_key: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            timing: TimingConfig::default(),
            snap_spring: SpringParams::SNAP,
            activate_key: "p".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded gallery config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that the geometry and spring values are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        let arena = &self.arena;
        if !(arena.width > 0.0 && arena.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena must have a positive size, got {}x{}",
                arena.width, arena.height
            )));
        }
        if arena.anchor_inset < 0.0 || arena.anchor_radius < 0.0 || arena.element_half_size < 0.0 {
            return Err(ConfigError::Invalid(
                "anchor inset, anchor radius and element size must not be negative".to_string(),
            ));
        }
        let footprint = 2.0 * arena.element_half_size;
        if footprint > arena.width || footprint > arena.height {
            return Err(ConfigError::Invalid(format!(
                "element of size {} does not fit a {}x{} arena",
                footprint, arena.width, arena.height
            )));
        }
        let edge = arena.anchor_edge_distance();
        if 2.0 * edge > arena.width || 2.0 * edge > arena.height {
            return Err(ConfigError::Invalid(format!(
                "anchors {} from the edge fall outside a {}x{} arena",
                edge, arena.width, arena.height
            )));
        }
        let timing = &self.timing;
        for (name, ms) in [
            ("processing_delay_ms", timing.processing_delay_ms),
            ("feedback_delay_ms", timing.feedback_delay_ms),
            ("release_grace_ms", timing.release_grace_ms),
        ] {
            if ms > MAX_DELAY_MS {
                return Err(ConfigError::Invalid(format!(
                    "{} of {} ms exceeds the {} ms limit",
                    name, ms, MAX_DELAY_MS
                )));
            }
        }
        let spring = &self.snap_spring;
        if !(spring.stiffness > 0.0 && spring.mass > 0.0) || spring.damping < 0.0 {
            return Err(ConfigError::Invalid(
                "snap spring needs positive stiffness and mass and non-negative damping"
                    .to_string(),
            ));
        }
        if self.activate_key.trim().is_empty() {
            return Err(ConfigError::Invalid("activate key must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference() {
        let config = GalleryConfig::default();
        assert_eq!(config.arena.size(), Size::new(640.0, 480.0));
        assert_eq!(config.arena.anchor_edge_distance(), 24.0);
        assert_eq!(config.timing.processing_delay(), Duration::from_millis(800));
        assert_eq!(config.timing.feedback_delay(), Duration::from_millis(1000));
        assert_eq!(config.timing.release_grace(), Duration::from_millis(100));
        assert_eq!(config.snap_spring, SpringParams::SNAP);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config =
            GalleryConfig::from_json(r#"{ "timing": { "processing_delay_ms": 500 } }"#).unwrap();
        assert_eq!(config.timing.processing_delay_ms, 500);
        assert_eq!(config.timing.feedback_delay_ms, 1000);
        assert_eq!(config.arena.width, 640.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GalleryConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(GalleryConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = GalleryConfig::from_json("{ arena: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_element_larger_than_arena() {
        let err = GalleryConfig::from_json(
            r#"{ "arena": { "width": 10, "height": 10, "anchor_inset": 0, "anchor_radius": 0, "element_half_size": 8 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_oversized_delay() {
        let err = GalleryConfig::from_json(
            r#"{ "timing": { "processing_delay_ms": 18446744073709551615 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = GalleryConfig::default();
        config.timing.feedback_delay_ms = MAX_DELAY_MS;
        assert!(config.validate().is_ok());
        config.timing.release_grace_ms = MAX_DELAY_MS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_stiffness() {
        let mut config = GalleryConfig::default();
        config.snap_spring.stiffness = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_key() {
        let mut config = GalleryConfig::default();
        config.activate_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "activate_key": "Space" }}"#).unwrap();
        let config = GalleryConfig::load(file.path()).unwrap();
        assert_eq!(config.activate_key, "Space");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = GalleryConfig::load(missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
