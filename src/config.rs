//! Configuration management for camprobe
//!
//! Provides configuration loading, saving, and management for the capture
//! device, the black/white detector, and the stimulus window.

use crate::errors::ProbeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub camera: CameraConfig,
    pub detector: DetectorConfig,
    pub window: WindowConfig,
}

/// Capture device configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Device index passed to the capture backend
    pub device_index: u32,
    /// Requested resolution [width, height]
    pub resolution: [u32; 2],
    /// Requested frames per second
    pub fps: u32,
    /// Requested pixel format ("MJPEG" or "YUYV")
    pub format: String,
    /// Disable automatic exposure before setting the fixed value
    pub manual_exposure: bool,
    /// Fixed exposure value applied when manual_exposure is set
    pub exposure: i64,
}

/// Black/white classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Mean-intensity threshold on the 0-255 scale; frames strictly below
    /// classify as black
    pub black_threshold: f64,
}

/// Stimulus window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    /// Square fill size in pixels
    pub size: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                device_index: 0,
                resolution: [1920, 1080],
                fps: 30,
                format: "MJPEG".to_string(),
                manual_exposure: true,
                exposure: 90,
            },
            detector: DetectorConfig {
                black_threshold: 60.0,
            },
            window: WindowConfig {
                title: "Black/White Latency Testing Window".to_string(),
                size: 1500,
            },
        }
    }
}

impl ProbeConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProbeError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ProbeError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: ProbeConfig = toml::from_str(&contents)
            .map_err(|e| ProbeError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ProbeError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ProbeError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ProbeError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| ProbeError::ConfigError(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.camera.resolution[0] == 0 || self.camera.resolution[1] == 0 {
            return Err(ProbeError::ConfigError(
                "camera resolution must be non-zero".to_string(),
            ));
        }
        if self.camera.fps == 0 {
            return Err(ProbeError::ConfigError("camera fps must be non-zero".to_string()));
        }
        if !(0.0..=255.0).contains(&self.detector.black_threshold) {
            return Err(ProbeError::ConfigError(format!(
                "black_threshold must be within 0-255, got {}",
                self.detector.black_threshold
            )));
        }
        if self.window.size == 0 {
            return Err(ProbeError::ConfigError("window size must be non-zero".to_string()));
        }
        Ok(())
    }
}
