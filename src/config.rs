//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SPIN_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use spin3d_core::{Spin, SpinError};
use spin3d_math::Vec3;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Spin animation configuration
    #[serde(default)]
    pub spin: SpinConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            spin: SpinConfig::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SPIN_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SPIN_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SPIN_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "spin3d - Spinning Cube".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position [x, y, z]
    pub eye: [f32; 3],
    /// Look-at target [x, y, z]
    pub target: [f32; 3],
    /// Up direction [x, y, z]
    pub up: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, -8.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Spin animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Rotation axis [x, y, z]
    pub axis: [f32; 3],
    /// Seconds per full rotation
    pub period_secs: f32,
    /// Fixed translation applied after the rotation [x, y, z]
    pub translation: [f32; 3],
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            axis: [2.0, 1.0, 0.0],
            period_secs: 8.0,
            translation: [2.0, -1.0, 0.0],
        }
    }
}

impl SpinConfig {
    /// Convert to a validated [`Spin`]
    ///
    /// Fails if the period is not positive or the axis is zero; validation
    /// happens here, at configuration time, not in the frame loop.
    pub fn to_spin(&self) -> Result<Spin, SpinError> {
        Ok(Spin::new(Vec3::from_array(self.axis), self.period_secs)?
            .with_translation(Vec3::from_array(self.translation)))
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.5, 0.4, 0.7, 1.0],
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.spin.period_secs, 8.0);
        assert_eq!(config.camera.eye, [0.0, 0.0, -8.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("period_secs"));
    }

    #[test]
    fn test_spin_config_to_spin() {
        let spin = SpinConfig::default().to_spin().unwrap();
        assert_eq!(spin.period_secs(), 8.0);
        assert_eq!(spin.axis(), Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(spin.translation(), Vec3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn test_spin_config_rejects_bad_period() {
        let config = SpinConfig {
            period_secs: 0.0,
            ..SpinConfig::default()
        };
        assert!(config.to_spin().is_err());
    }
}
