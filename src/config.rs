//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hypermorph_core::{
    KernelConfig, KernelConfigError, INNER_HALF_SIZE, OUTER_HALF_SIZE, ROTATION_SPEED,
    TRANSFORMATION_SPEED,
};
use hypermorph_math::Vec3;
use hypermorph_render::FixedCamera;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HM_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HM_").split("__"));

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
            title: "Hypermorph".to_string(),
            width: 1000,
            height: 1000,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera position
    pub eye: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = FixedCamera::default();
        Self {
            fov: camera.fov_y,
            near: camera.near,
            far: camera.far,
            eye: camera.eye,
            target: camera.target,
            up: camera.up,
        }
    }
}

impl CameraConfig {
    /// Build the camera described by this section
    pub fn to_camera(&self) -> FixedCamera {
        FixedCamera {
            eye: self.eye,
            target: self.target,
            up: self.up,
            fov_y: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Half-extent of the outer cube
    pub outer_size: f64,
    /// Half-extent of the inner cube
    pub inner_size: f64,
    /// Transformation progress added per frame
    pub transformation_speed: f64,
    /// Rotation progress added per frame
    pub rotation_speed: f64,
    /// Start with the animation running
    pub start_running: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            outer_size: OUTER_HALF_SIZE,
            inner_size: INNER_HALF_SIZE,
            transformation_speed: TRANSFORMATION_SPEED,
            rotation_speed: ROTATION_SPEED,
            start_running: true,
        }
    }
}

impl AnimationConfig {
    /// Validate and convert to the kernel's configuration
    pub fn to_kernel_config(&self) -> Result<KernelConfig, KernelConfigError> {
        KernelConfig::new(
            self.outer_size,
            self.inner_size,
            self.transformation_speed,
            self.rotation_speed,
        )
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Edge color [r, g, b, a]
    pub line_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            line_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
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
        assert_eq!(config.window.width, 1000);
        assert_eq!(config.window.height, 1000);
        assert_eq!(config.animation.transformation_speed, 0.004);
        assert_eq!(config.rendering.background_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("transformation_speed"));
        assert!(toml.contains("line_color"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("[animation]\nouter_size = 1.0\ninner_size = 0.3\ntransformation_speed = 0.01\nrotation_speed = 0.002\nstart_running = false\n").unwrap();
        assert_eq!(config.animation.outer_size, 1.0);
        assert!(!config.animation.start_running);
        assert_eq!(config.window.title, "Hypermorph");
    }

    #[test]
    fn test_default_animation_is_valid_kernel_config() {
        let kernel = AnimationConfig::default().to_kernel_config().unwrap();
        assert_eq!(kernel.outer_size(), 0.5);
        assert_eq!(kernel.inner_size(), 0.2);
    }

    #[test]
    fn test_invalid_animation_rejected() {
        let animation = AnimationConfig {
            inner_size: 0.8,
            ..AnimationConfig::default()
        };
        assert!(animation.to_kernel_config().is_err());
    }

    #[test]
    fn test_camera_round_trip_through_config() {
        let camera = CameraConfig::default().to_camera();
        assert_eq!(camera, FixedCamera::default());
    }
}
