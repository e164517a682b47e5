//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RAYPICK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use raypick_core::{Ray, RayQueryConfig, DEFAULT_MAX_DISTANCE, DEFAULT_RAY_WIDTH};
use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Picking configuration
    #[serde(default)]
    pub picking: PickingConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Ray cast by the command-line host
    #[serde(default)]
    pub ray: RayConfig,
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
    /// 3. Environment variables (`RAYPICK_*`)
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

        // RAYPICK_PICKING__RAY_WIDTH=1.5 -> picking.ray_width = 1.5
        figment = figment.merge(Env::prefixed("RAYPICK_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Picking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickingConfig {
    /// Radius around the ray axis, in blocks
    pub ray_width: f64,
    /// How far the ray reaches, in blocks
    pub max_distance: f64,
}

impl Default for PickingConfig {
    fn default() -> Self {
        Self {
            ray_width: DEFAULT_RAY_WIDTH,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl PickingConfig {
    pub fn to_query_config(&self) -> RayQueryConfig {
        RayQueryConfig::new(self.ray_width, self.max_distance)
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Path to the RON scene file
    pub path: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: "scenes/pasture.ron".to_string(),
        }
    }
}

/// Ray configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RayConfig {
    /// Ray origin [x, y, z]
    pub origin: [f64; 3],
    /// Ray direction [x, y, z], need not be unit length
    pub direction: [f64; 3],
}

impl Default for RayConfig {
    fn default() -> Self {
        Self {
            origin: [0.5, 65.6, 0.5],
            direction: [1.0, 0.0, 0.0],
        }
    }
}

impl RayConfig {
    pub fn to_ray(&self) -> Ray {
        Ray::new(self.origin.into(), self.direction.into())
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
#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] figment::Error);
