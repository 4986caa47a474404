//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command-line overrides. The file is either given explicitly (`--config` or
//! `OVS_CONFIG`) or picked up from the user config directory
//! (`~/.config/ovs/config.yaml` on Linux) when present.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::domain::SweepDomain;
use crate::core::sensitivity::SensitivityModel;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "sensitivity.png";

/// File name looked up in the user config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Largest accepted image side in pixels
pub const MAX_IMAGE_SIDE: u32 = 20_000;

/// Largest accepted image area in pixels
pub const MAX_IMAGE_PIXELS: u64 = 100_000_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("point_count must be at least 1")]
    NoPoints,

    #[error("{field} lower bound ({lower}) must be below its upper bound ({upper})")]
    InvalidRange {
        field: &'static str,
        lower: f64,
        upper: f64,
    },

    #[error("output_resolution must be at least 1 DPI")]
    ZeroResolution,

    #[error(
        "Output image would be {width}x{height} pixels (figure_size x output_resolution); \
         each side must be 1..={max_side} and the area at most {max_pixels} pixels"
    )]
    ImageSize {
        width: f64,
        height: f64,
        max_side: u32,
        max_pixels: u64,
    },

    #[error("output_path must not be empty")]
    EmptyOutputPath,

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Config file already exists: {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every recognized option, with the published defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// First angle of the sweep (degrees)
    pub domain_start: f64,
    /// Last angle of the sweep (degrees)
    pub domain_end: f64,
    /// Number of evenly spaced sweep points
    pub point_count: usize,

    /// Material thickness
    pub thickness: f64,
    /// Height of the intersection region
    pub height: f64,
    /// Angles below this are reported as infinite volume
    pub degenerate_floor_degrees: f64,

    /// Reference line drawn on the chart; does not affect computed values
    pub threshold_marker_degrees: f64,
    /// Visible x range of the chart
    pub x_axis_limit: [f64; 2],
    /// Visible y range of the chart
    pub y_axis_limit: [f64; 2],

    pub output_path: PathBuf,
    /// Dots per inch of the rendered image
    pub output_resolution: u32,
    /// Figure size in inches (width, height)
    pub figure_size: [f64; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain_start: 1.0,
            domain_end: 90.0,
            point_count: 500,
            thickness: 0.225,
            height: 3.0,
            degenerate_floor_degrees: 0.1,
            threshold_marker_degrees: 15.0,
            x_axis_limit: [0.0, 90.0],
            y_axis_limit: [0.0, 1.0],
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            output_resolution: 300,
            figure_size: [10.0, 6.0],
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Values supplied on the command line; `None` keeps the lower layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub domain_start: Option<f64>,
    pub domain_end: Option<f64>,
    pub point_count: Option<usize>,
    pub thickness: Option<f64>,
    pub height: Option<f64>,
    pub degenerate_floor_degrees: Option<f64>,
    pub threshold_marker_degrees: Option<f64>,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    pub output_path: Option<PathBuf>,
    pub output_resolution: Option<u32>,
}

impl Config {
    /// Path of the per-user config file, if a home directory is known
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "ovs")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Parse a YAML config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yml::Error> {
        serde_yml::to_string(self)
    }

    /// Resolve the file layer
    ///
    /// An explicit path must exist. Without one, the user config file is used
    /// only if it is present.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        if let Some(path) = Self::user_config_path() {
            if path.is_file() {
                let config = Self::from_file(&path)?;
                return Ok((config, ConfigSource::File(path)));
            }
        }

        Ok((Self::default(), ConfigSource::Defaults))
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, o: &ConfigOverrides) -> Self {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut self.domain_start, &o.domain_start);
        set(&mut self.domain_end, &o.domain_end);
        set(&mut self.point_count, &o.point_count);
        set(&mut self.thickness, &o.thickness);
        set(&mut self.height, &o.height);
        set(&mut self.degenerate_floor_degrees, &o.degenerate_floor_degrees);
        set(&mut self.threshold_marker_degrees, &o.threshold_marker_degrees);
        set(&mut self.x_axis_limit[0], &o.x_min);
        set(&mut self.x_axis_limit[1], &o.x_max);
        set(&mut self.y_axis_limit[0], &o.y_min);
        set(&mut self.y_axis_limit[1], &o.y_max);
        set(&mut self.output_path, &o.output_path);
        set(&mut self.output_resolution, &o.output_resolution);
        self
    }

    /// Check every field, reporting the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("thickness", self.thickness)?;
        positive("height", self.height)?;
        positive("degenerate_floor_degrees", self.degenerate_floor_degrees)?;
        finite("domain_start", self.domain_start)?;
        finite("domain_end", self.domain_end)?;
        finite("threshold_marker_degrees", self.threshold_marker_degrees)?;

        if self.point_count == 0 {
            return Err(ConfigError::NoPoints);
        }

        range("x_axis_limit", self.x_axis_limit)?;
        range("y_axis_limit", self.y_axis_limit)?;

        if self.output_resolution == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        positive("figure_size width", self.figure_size[0])?;
        positive("figure_size height", self.figure_size[1])?;
        self.check_image_size()?;

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }

        Ok(())
    }

    pub fn domain(&self) -> SweepDomain {
        SweepDomain::new(self.domain_start, self.domain_end, self.point_count)
    }

    pub fn model(&self) -> SensitivityModel {
        SensitivityModel::new(self.thickness, self.height, self.degenerate_floor_degrees)
    }

    /// The bitmap backend allocates `width * height * 3` bytes up front
    fn check_image_size(&self) -> Result<(), ConfigError> {
        let dpi = f64::from(self.output_resolution);
        let width = (self.figure_size[0] * dpi).round();
        let height = (self.figure_size[1] * dpi).round();
        let side_ok = |v: f64| v >= 1.0 && v <= f64::from(MAX_IMAGE_SIDE);

        if side_ok(width) && side_ok(height) && width * height <= MAX_IMAGE_PIXELS as f64 {
            Ok(())
        } else {
            Err(ConfigError::ImageSize {
                width,
                height,
                max_side: MAX_IMAGE_SIDE,
                max_pixels: MAX_IMAGE_PIXELS,
            })
        }
    }

    /// Rendered image size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.output_resolution as f64;
        (
            (self.figure_size[0] * dpi).round() as u32,
            (self.figure_size[1] * dpi).round() as u32,
        )
    }

    /// Write a config file, refusing to clobber unless `force`
    pub fn write_to(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let yaml = self.to_yaml().map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, yaml)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn range(field: &'static str, [lower, upper]: [f64; 2]) -> Result<(), ConfigError> {
    finite(field, lower)?;
    finite(field, upper)?;
    if lower < upper {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            field,
            lower,
            upper,
        })
    }
}
