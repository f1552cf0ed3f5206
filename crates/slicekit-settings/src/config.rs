//! Job configuration for SliceKit
//!
//! A job bundles everything one generation run needs: the shape, its
//! placement, the printer settings and output options. Jobs are stored as
//! JSON or TOML, chosen by file extension.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use slicekit_core::constants::DEFAULT_SEGMENTS;
use slicekit_core::{PrinterSettings, ShapeParameters, Transform, Vector3};
use slicekit_designer::EncodeMode;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Smallest segment count that still approximates a circle.
pub const MIN_SEGMENTS: usize = 3;

const CONFIG_DIR_NAME: &str = "slicekit";
const DEFAULT_FILE_NAME: &str = "job.toml";

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Output options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Segments used to approximate spheres and cylinders
    pub segments: usize,
    /// Layered slicing or whole-shape point cloud
    pub mode: EncodeMode,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            mode: EncodeMode::Layered,
        }
    }
}

/// Complete job configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub shape: ShapeParameters,
    pub transform: Transform,
    pub printer: PrinterSettings,
    pub output: OutputSettings,
}

fn require_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn require_non_negative(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn require_finite(key: &str, v: Vector3) -> ConfigResult<()> {
    for (axis, value) in [("x", v.x), ("y", v.y), ("z", v.z)] {
        if !value.is_finite() {
            return Err(ConfigError::out_of_range(&format!("{}.{}", key, axis), value));
        }
    }
    Ok(())
}

impl JobConfig {
    /// Load a job from `.json` or `.toml` and validate it.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded job config from {}", path.display());
        Ok(config)
    }

    /// Validate, then write the job as JSON or TOML.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved job config to {}", path.display());
        Ok(())
    }

    /// `<config dir>/slicekit/job.toml` for the current platform.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(DEFAULT_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the job at [`Self::default_path`], or the defaults if none is saved.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!("No job config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Sanity-check values that would make generation meaningless.
    ///
    /// This does not check physical printer limits.
    pub fn validate(&self) -> ConfigResult<()> {
        let printer = &self.printer;
        require_positive("printer.nozzle_diameter", printer.nozzle_diameter)?;
        require_positive("printer.layer_height", printer.layer_height)?;
        require_positive("printer.print_speed", printer.print_speed)?;
        require_positive("printer.filament_diameter", printer.filament_diameter)?;
        require_non_negative("printer.bed_temperature", printer.bed_temperature)?;
        require_non_negative("printer.nozzle_temperature", printer.nozzle_temperature)?;

        if self.output.segments < MIN_SEGMENTS {
            return Err(ConfigError::out_of_range(
                "output.segments",
                self.output.segments,
            ));
        }

        match &self.shape {
            ShapeParameters::Cube(d) => {
                require_positive("shape.width", d.width)?;
                require_positive("shape.height", d.height)?;
                require_positive("shape.depth", d.depth)?;
            }
            ShapeParameters::Sphere(d) => require_positive("shape.radius", d.radius)?,
            ShapeParameters::Cylinder(d) => {
                require_positive("shape.radius", d.radius)?;
                require_positive("shape.height", d.height)?;
            }
            ShapeParameters::Unknown => warn!("Job shape type is unknown; output will be empty"),
        }

        require_finite("transform.rotation", self.transform.rotation)?;
        require_finite("transform.scale", self.transform.scale)?;
        require_finite("transform.translation", self.transform.translation)?;

        Ok(())
    }
}
