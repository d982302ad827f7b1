use crate::geom::Size;
use crate::indicator::edge::SizeProfile;
use crate::indicator::{SHORT_WIDE_SIZE, TALL_NARROW_SIZE, VISIBILITY_MARGIN};
use crate::menu::{
    DEFAULT_END_ANGLE, DEFAULT_RADIUS, DEFAULT_START_ANGLE, DEFAULT_STEP, TogglePolicy,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Viewport inflation applied on both axes while the target is visible.
    pub visibility_margin: f64,
    pub tall_narrow: Size,
    pub short_wide: Size,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            visibility_margin: VISIBILITY_MARGIN,
            tall_narrow: TALL_NARROW_SIZE,
            short_wide: SHORT_WIDE_SIZE,
        }
    }
}

impl IndicatorConfig {
    pub fn size_for(&self, profile: SizeProfile) -> Size {
        match profile {
            SizeProfile::TallNarrow => self.tall_narrow,
            SizeProfile::ShortWide => self.short_wide,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Slot orbital radius when `radii` has no entry for the active count.
    pub radius: f64,
    /// Radius per active-slot count; entry `n - 1` serves `n` slots. Empty
    /// means `radius` serves every count.
    pub radii: Vec<f64>,
    pub start_angle: f64,
    pub end_angle: f64,
    /// How far `t` advances per frame during a furl/unfurl.
    pub step: f64,
    pub toggle_policy: TogglePolicy,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            radii: Vec::new(),
            start_angle: DEFAULT_START_ANGLE,
            end_angle: DEFAULT_END_ANGLE,
            step: DEFAULT_STEP,
            toggle_policy: TogglePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OverlayConfig {
    pub indicator: IndicatorConfig,
    pub menu: MenuConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Animation step must be in (0, 1], got {0}")]
    InvalidStep(f64),
    #[error("Radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
    #[error("Visibility margin must be finite, got {0}")]
    InvalidMargin(f64),
    #[error("Size profile dimensions must be finite, got {0}x{1}")]
    InvalidSize(f64, f64),
}

impl OverlayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.menu.step;
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        for &radius in std::iter::once(&self.menu.radius).chain(&self.menu.radii) {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::InvalidRadius(radius));
            }
        }
        if !self.indicator.visibility_margin.is_finite() {
            return Err(ConfigError::InvalidMargin(self.indicator.visibility_margin));
        }
        for size in [self.indicator.tall_narrow, self.indicator.short_wide] {
            if !size.width.is_finite() || !size.height.is_finite() {
                return Err(ConfigError::InvalidSize(size.width, size.height));
            }
        }
        Ok(())
    }
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "gyre").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<OverlayConfig, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("GYRE"))
        .build()?;

    let cfg: OverlayConfig = s.try_deserialize()?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_or_default() -> OverlayConfig {
    match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            OverlayConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
