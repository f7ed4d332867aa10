//! Application configuration.
//!
//! Read from `<data_dir>/config.json` when present; every field is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::deck::DEFAULT_REFILL_BELOW;
use crate::error::{PawError, PawResult};
use crate::services::DEFAULT_MUTUAL_LIKE_CHANCE;
use crate::storage::{self, HOME_ENV};
use crate::swipe::SwipeConfig;

pub const CONFIG_FILE: &str = "config.json";

/// Tunables for the swipe screen.
///
/// # Example
///
/// ```ignore
/// use pawmatch::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_mutual_like_chance(1.0)
///     .with_cell_size(10.0, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Gesture thresholds, in pixel-like units
    pub swipe: SwipeConfig,
    /// Horizontal size of a terminal cell in pixel-like units (default: 8)
    pub cell_width_px: f64,
    /// Vertical size of a terminal cell in pixel-like units (default: 16)
    pub cell_height_px: f64,
    /// Chance a like comes back as a match (default: 0.3)
    pub mutual_like_chance: f64,
    /// Refill the deck below this many cards (default: 3)
    pub refill_below: usize,
    /// Data directory override; not read from the file
    #[serde(skip)]
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            swipe: SwipeConfig::default(),
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            mutual_like_chance: DEFAULT_MUTUAL_LIKE_CHANCE,
            refill_below: DEFAULT_REFILL_BELOW,
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn with_cell_size(mut self, width_px: f64, height_px: f64) -> Self {
        self.cell_width_px = width_px;
        self.cell_height_px = height_px;
        self
    }

    pub fn with_mutual_like_chance(mut self, chance: f64) -> Self {
        self.mutual_like_chance = chance;
        self
    }

    pub fn with_refill_below(mut self, refill_below: usize) -> Self {
        self.refill_below = refill_below;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Defaults with the data directory taken from `PAWMATCH_HOME`, if set.
    pub fn from_env() -> Self {
        match std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            Some(dir) => Self::default().with_data_dir(PathBuf::from(dir)),
            None => Self::default(),
        }
    }

    /// Resolve the data directory and merge its `config.json`.
    pub fn load() -> PawResult<Self> {
        let env = Self::from_env();
        let dir = storage::resolve_data_dir(env.data_dir.as_deref())?;
        Self::load_from(&dir)
    }

    /// Read `<dir>/config.json`, falling back to defaults when it is missing.
    pub fn load_from(dir: &Path) -> PawResult<Self> {
        let path = dir.join(CONFIG_FILE);
        let config = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<AppConfig>(&raw).map_err(|err| PawError::Config {
                path: path.clone(),
                message: err.to_string(),
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(err) => {
                return Err(PawError::Config {
                    path,
                    message: err.to_string(),
                })
            }
        };
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config.with_data_dir(dir))
    }

    /// The data directory this configuration points at.
    pub fn data_dir(&self) -> PawResult<PathBuf> {
        Ok(storage::resolve_data_dir(self.data_dir.as_deref())?)
    }
}
