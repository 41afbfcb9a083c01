//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::graph::Limits;
use crate::types::{GraphError, GraphResult, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_STATIONS};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "STATIONS_CONFIG";

/// Config file picked up from the working directory when nothing else is given.
pub const LOCAL_CONFIG_FILE: &str = "stations.toml";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Station capacity.
    #[serde(default = "default_max_stations")]
    pub max_stations: usize,
    /// Connection capacity.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// Ignore both capacities.
    #[serde(default)]
    pub unbounded: bool,
    /// ANSI colored output.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Default `env_logger` filter.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_stations() -> usize {
    DEFAULT_MAX_STATIONS
}

fn default_max_connections() -> usize {
    DEFAULT_MAX_CONNECTIONS
}

fn default_color() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_stations: default_max_stations(),
            max_connections: default_max_connections(),
            unbounded: false,
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml(text: &str) -> GraphResult<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GraphError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Load the config found by [`resolve_config_path`], or the defaults when
    /// there is none.
    pub fn resolve(explicit: Option<&Path>) -> GraphResult<Self> {
        match resolve_config_path(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values, then
    /// validate the result.
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> GraphResult<()> {
        if let Some(n) = overrides.max_stations {
            self.max_stations = n;
        }
        if let Some(n) = overrides.max_connections {
            self.max_connections = n;
        }
        if overrides.unbounded {
            self.unbounded = true;
        }
        if overrides.no_color {
            self.color = false;
        }
        self.validate()
    }

    /// Reject capacities that would make a store unusable.
    pub fn validate(&self) -> GraphResult<()> {
        if self.unbounded {
            return Ok(());
        }
        if self.max_stations == 0 {
            return Err(GraphError::Config("max_stations must be at least 1".to_string()));
        }
        if self.max_connections == 0 {
            return Err(GraphError::Config("max_connections must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Store limits described by this config.
    pub fn limits(&self) -> Limits {
        if self.unbounded {
            Limits::UNBOUNDED
        } else {
            Limits::fixed(self.max_stations, self.max_connections)
        }
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--max-stations`
    pub max_stations: Option<usize>,
    /// `--max-connections`
    pub max_connections: Option<usize>,
    /// `--unbounded`
    pub unbounded: bool,
    /// `--no-color`
    pub no_color: bool,
}

/// Resolve the config path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. STATIONS_CONFIG environment variable
/// 3. stations.toml in the current directory
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    None
}
