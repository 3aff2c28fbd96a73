//! Toolkit configuration.
//!
//! Settings a host engine typically wants to tune without recompiling:
//! viewport extents, default camera speed, window title. Loadable from
//! TOML; every field has a sensible default so partial files work.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::Result;

/// Host-tunable toolkit settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Viewport width in world units. Also the camera view width.
    pub view_width: f32,

    /// Viewport height in world units. Also the camera view height.
    pub view_height: f32,

    /// Default camera pan speed in world units per frame.
    pub camera_speed: f32,

    /// Window title used by host binaries.
    pub window_title: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            view_width: 1280.0,
            view_height: 720.0,
            camera_speed: 8.0,
            window_title: "bramble".to_string(),
        }
    }
}

impl ToolkitConfig {
    /// Parse a TOML document. Missing fields fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolkitConfig::default();
        assert_eq!(config.view_width, 1280.0);
        assert_eq!(config.view_height, 720.0);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = ToolkitConfig::from_toml_str("view_width = 640.0\n").unwrap();
        assert_eq!(config.view_width, 640.0);
        assert_eq!(config.view_height, 720.0);
        assert_eq!(config.window_title, "bramble");
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
            view_width = 320.0
            view_height = 240.0
            camera_speed = 4.0
            window_title = "demo"
        "#;
        let config = ToolkitConfig::from_toml_str(content).unwrap();
        assert_eq!(config.camera_speed, 4.0);
        assert_eq!(config.window_title, "demo");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ToolkitConfig::from_toml_str("view_width = \"wide\"").is_err());
    }
}
