use crate::error::{Result, SemvError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const SEMV_HOME_ENV: &str = "SEMV_HOME";
const DEFAULT_HOME_DIR: &str = ".semv";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SemvConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolves the directory holding `config.toml`: `$SEMV_HOME`, else `~/.semv`.
pub fn semv_home() -> Result<PathBuf> {
    if let Some(home) = env::var_os(SEMV_HOME_ENV).filter(|home| !home.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_HOME_DIR))
        .ok_or_else(|| SemvError::ConfigError("Unable to determine home directory".to_string()))
}

/// Loads the configuration from the resolved home directory.
pub fn new_semv_config() -> Result<SemvConfig> {
    let home = semv_home()?;
    SemvConfig::load(&home)
}

impl SemvConfig {
    pub fn load(semv_home: &Path) -> Result<Self> {
        let config_path = semv_home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: SemvConfig = toml::from_str(&contents)
            .map_err(|e| SemvError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn save(&self, semv_home: &Path) -> Result<()> {
        let config_path = semv_home.join(CONFIG_FILE_NAME);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SemvError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }
}
