use crate::cli::Cli;
use crate::domain::errors::TrackerError;
use serde::Deserialize;
use std::path::PathBuf;

fn default_parks() -> PathBuf {
    PathBuf::from("data/national_parks.csv")
}

fn default_coords() -> PathBuf {
    PathBuf::from("data/park_coords.csv")
}

fn default_store() -> PathBuf {
    PathBuf::from("store.json")
}

/// Dataset and store locations. Relative paths resolve against the working
/// directory.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TrackerConfig {
    #[serde(default = "default_parks")]
    pub parks: PathBuf,
    #[serde(default = "default_coords")]
    pub coords: PathBuf,
    #[serde(default = "default_store")]
    pub store: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            parks: default_parks(),
            coords: default_coords(),
            store: default_store(),
        }
    }
}

impl TrackerConfig {
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(p) = &cli.parks {
            self.parks = p.clone();
        }
        if let Some(p) = &cli.coords {
            self.coords = p.clone();
        }
        if let Some(p) = &cli.store {
            self.store = p.clone();
        }
        self
    }
}

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/parktrack/config.toml"))
}

pub fn load_config() -> Result<TrackerConfig, TrackerError> {
    let Some(path) = config_path().filter(|p| p.exists()) else {
        return Ok(TrackerConfig::default());
    };
    let config_err = |reason: String| TrackerError::Config {
        path: path.clone(),
        reason,
    };
    let raw = std::fs::read_to_string(&path).map_err(|e| config_err(e.to_string()))?;
    toml::from_str(&raw).map_err(|e| config_err(e.to_string()))
}
