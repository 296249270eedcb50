use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::VersionParser;
use crate::error::{AutoMilestoneError, Result};

const LOCAL_CONFIG_FILE: &str = "./automilestone.toml";
const USER_CONFIG_FILE: &str = ".automilestone.toml";

/// Represents the complete configuration for auto-milestone.
///
/// Holds how version milestones are recognised and whether an existing
/// milestone on the target may be replaced.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_prefix() -> String {
    "v".to_string()
}

fn default_separator() -> String {
    ".".to_string()
}

/// How version labels are written in milestone titles.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            prefix: default_prefix(),
            separator: default_separator(),
        }
    }
}

/// Runtime behavior that does not affect version matching.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub overwrite: bool,
}

impl Config {
    /// Applies values given on the command line or through action inputs.
    ///
    /// `None` keeps the value loaded from file or defaults.
    pub fn with_overrides(
        mut self,
        prefix: Option<String>,
        separator: Option<String>,
        overwrite: Option<bool>,
    ) -> Self {
        if let Some(prefix) = prefix {
            self.version.prefix = prefix;
        }
        if let Some(separator) = separator {
            self.version.separator = separator;
        }
        if let Some(overwrite) = overwrite {
            self.behavior.overwrite = overwrite;
        }
        self
    }

    pub fn parser(&self) -> VersionParser {
        VersionParser::new(self.version.prefix.clone(), self.version.separator.clone())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `automilestone.toml` in current directory
/// 3. `.automilestone.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        AutoMilestoneError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        AutoMilestoneError::config(format!("Invalid config '{}': {}", path.display(), e))
    })
}

fn find_config_file() -> Option<PathBuf> {
    if Path::new(LOCAL_CONFIG_FILE).exists() {
        return Some(PathBuf::from(LOCAL_CONFIG_FILE));
    }
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Parses a boolean action input the way the Actions runner accepts them.
///
/// Only `true | True | TRUE | false | False | FALSE` are valid.
pub fn parse_boolean_input(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(AutoMilestoneError::config(format!(
            "Input does not meet YAML 1.2 \"Core Schema\" specification: {}\n\
             Support boolean input list: `true | True | TRUE | false | False | FALSE`",
            name
        ))),
    }
}
