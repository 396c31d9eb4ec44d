//! Config file handling

use std::path::{Path, PathBuf};

use tracing::{debug, info};

#[cfg(feature = "binmode")]
use crate::cli::abbrev::atoi;
use crate::cli::gate::LongOptionPolicy;
use crate::context::Environment;
use crate::errors::{Result, StartupError};

/// Environment variable selecting the long-option policy
pub const LONG_OPTIONS_VAR: &str = "MAWK_LONG_OPTIONS";
/// Environment variable giving the initial binmode
#[cfg(feature = "binmode")]
pub const BINMODE_VAR: &str = "MAWKBINMODE";
/// Environment variable overriding the config directory
pub const CONFIG_DIR_VAR: &str = "RAWK_CONFIG_DIR";

/// rawk configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub long_options: LongOptionPolicy,
    #[cfg(feature = "binmode")]
    pub binmode: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            long_options: LongOptionPolicy::default(),
            #[cfg(feature = "binmode")]
            binmode: None,
        }
    }
}

impl Config {
    /// Load configuration from `config.toml`, then apply environment
    /// overrides
    pub fn load(env: &Environment) -> Result<Self> {
        let config_dir = env
            .var(CONFIG_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_dir);

        let mut config = Self::from_file(&config_dir)?;
        config.apply_env(env);
        info!(
            config_dir = %config.config_dir.display(),
            long_options = %config.long_options,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Defaults, with the environment applied
    pub fn from_env(env: &Environment) -> Self {
        let mut config = Self::default();
        config.apply_env(env);
        config
    }

    fn from_file(config_dir: &Path) -> Result<Self> {
        let mut config = Self {
            config_dir: config_dir.to_path_buf(),
            ..Self::default()
        };

        let config_file = config.config_file();
        if !config_file.exists() {
            debug!(path = %config_file.display(), "no config file");
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| StartupError::Config(format!("Failed to read config: {}", e)))?;

        let toml_value: toml::Value = toml::from_str(&content)
            .map_err(|e| StartupError::Config(format!("Invalid config TOML: {}", e)))?;

        let options = toml_value.get("options");

        if let Some(policy) = options
            .and_then(|o| o.get("long_options"))
            .and_then(|v| v.as_str())
        {
            config.long_options = LongOptionPolicy::from_setting(Some(policy));
        }

        #[cfg(feature = "binmode")]
        {
            config.binmode = options
                .and_then(|o| o.get("binmode"))
                .and_then(|v| v.as_integer())
                .and_then(|n| i32::try_from(n).ok());
        }

        Ok(config)
    }

    fn apply_env(&mut self, env: &Environment) {
        if let Some(value) = env.var(LONG_OPTIONS_VAR) {
            self.long_options = LongOptionPolicy::from_setting(Some(value));
        }
        #[cfg(feature = "binmode")]
        if let Some(value) = env.var(BINMODE_VAR) {
            self.binmode = Some(atoi(value) as i32);
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("rawk"))
            .unwrap_or_else(|| PathBuf::from(".rawk"))
    }

    /// Path of the config file inside the config directory
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}
