//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration of the map generator tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub world: WorldConfig,
    pub generation: GenerationConfig,
    pub preview: PreviewConfig,
    pub debug: DebugConfig,
}

/// The world being previewed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed. Every field is a pure function of this and a position.
    pub seed: u64,
}

/// Worker pool sizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Worker threads; 0 picks a count from the number of cores.
    pub worker_threads: usize,
    /// Queued surveys before submissions are turned away.
    pub max_in_flight: usize,
    /// Finished surveys buffered before workers wait.
    pub result_capacity: usize,
}

/// The region rendered into preview images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Width in blocks. Node-resolution images are 16 times wider.
    pub width: u32,
    /// Height in blocks.
    pub height: u32,
    /// Block x of the top-left corner.
    pub origin_x: i16,
    /// Block z of the top-left corner.
    pub origin_z: i16,
    /// Block height the biome map is taken at.
    pub block_y: i16,
    /// Where the PNG files go.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter, e.g. "info" or "voxelands_mapgen=trace".
    pub log_level: String,
    /// Directory for the JSON log file; `logs` under the config directory
    /// when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            max_in_flight: 64,
            result_capacity: 128,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            origin_x: -16,
            origin_z: -16,
            block_y: 0,
            output_dir: PathBuf::from("mapgen-preview"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// The platform config directory for the tool, or the working directory
    /// when the platform has none.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("voxelands-mapgen"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Loads `config.ron` from `config_dir`, writing a default one first if
    /// there is none.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-reads `config.ron`. Returns the new settings only if they differ.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
