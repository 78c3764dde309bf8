//! Application configuration
//!
//! Loaded from an optional JSON file; missing fields take their defaults.
//! `REALITY_DATA_DIR` overrides the data directory after the file is read.

use crate::calculations::DEFAULT_PROJECTION_YEARS;
use crate::calculations::analytics::TREND_WINDOW;
use crate::catalog::{self, GameCatalog, InvestmentCatalog};
use crate::error::{RealityError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "REALITY_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the JSON blobs
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Horizon for opportunity-cost projections when none is given
    #[serde(default = "default_projection_years")]
    pub projection_years: u32,

    /// Number of points in the running-edge trend
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,

    /// CSV replacing the built-in game catalog
    #[serde(default)]
    pub game_catalog_csv: Option<PathBuf>,

    /// CSV replacing the built-in investment scenarios
    #[serde(default)]
    pub investment_catalog_csv: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gambling_reality")
}

fn default_projection_years() -> u32 {
    DEFAULT_PROJECTION_YEARS
}

fn default_trend_window() -> usize {
    TREND_WINDOW
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            projection_years: DEFAULT_PROJECTION_YEARS,
            trend_window: TREND_WINDOW,
            game_catalog_csv: None,
            investment_catalog_csv: None,
        }
    }
}

impl AppConfig {
    /// Read `path` if given, otherwise start from defaults, then apply the
    /// environment override
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        log::debug!("Using data directory {}", config.data_dir.display());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RealityError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        if config.trend_window == 0 {
            return Err(RealityError::Config("trend_window must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn game_catalog(&self) -> Result<GameCatalog> {
        match &self.game_catalog_csv {
            Some(path) => catalog::load_game_catalog(path),
            None => Ok(GameCatalog::default()),
        }
    }

    pub fn investment_catalog(&self) -> Result<InvestmentCatalog> {
        match &self.investment_catalog_csv {
            Some(path) => catalog::load_investment_catalog(path),
            None => Ok(InvestmentCatalog::default()),
        }
    }
}
