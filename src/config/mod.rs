use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use toml::Value;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LIMIT: usize = 10_000;

const CONFIG_FILENAME: &str = "config.toml";
const KNOWN_KEYS: [&str; 3] = ["port", "open_browser", "log_limit"];

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub open_browser: bool,
    /// Maximum number of commits served by the history panel
    pub log_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_browser: true,
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLoadOutcome {
    pub config: Option<AppConfig>,
    pub warnings: Vec<String>,
}

/// `config.toml` in diffly's platform config directory.
pub fn config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "diffly")
        .ok_or_else(|| anyhow!("Could not determine config directory"))?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn load_config() -> Result<ConfigLoadOutcome> {
    let path = config_path()?;
    load_config_from_path(&path).with_context(|| format!("Failed to load {}", path.display()))
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoadOutcome> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ConfigLoadOutcome::default()),
        Err(err) => return Err(err.into()),
    };

    let value: Value = toml::from_str(&contents)?;
    let table = value
        .as_table()
        .ok_or_else(|| anyhow!("Config root must be a TOML table"))?;

    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    if let Some(port) = table.get("port") {
        match port.as_integer().map(u16::try_from) {
            Some(Ok(port)) if port > 0 => config.port = port,
            _ => warnings.push(
                "Warning: Config key 'port' must be an integer between 1 and 65535; ignoring value"
                    .to_string(),
            ),
        }
    }

    if let Some(open_browser) = table.get("open_browser") {
        if let Some(flag) = open_browser.as_bool() {
            config.open_browser = flag;
        } else {
            warnings.push(
                "Warning: Config key 'open_browser' must be a boolean; ignoring value".to_string(),
            );
        }
    }

    if let Some(log_limit) = table.get("log_limit") {
        match log_limit.as_integer().map(usize::try_from) {
            Some(Ok(limit)) if limit > 0 => config.log_limit = limit,
            _ => warnings.push(
                "Warning: Config key 'log_limit' must be a positive integer; ignoring value"
                    .to_string(),
            ),
        }
    }

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warnings.push(format!("Warning: Unknown config key '{key}', ignoring"));
        }
    }

    Ok(ConfigLoadOutcome {
        config: Some(config),
        warnings,
    })
}
