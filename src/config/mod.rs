use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::error::DeplistError;
use crate::sources::wordlists::WordlistSource;

pub const DEFAULT_CONFIG_PATH: &str = "config/deplist.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_depth: usize,
    pub max_candidates: u64,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub wordlist_dir: String,
    pub wordlists: Vec<WordlistSource>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_depth: 3,
            max_candidates: 50_000_000,
            timeout_ms: 30_000,
            user_agent: format!("deplist/{}", env!("CARGO_PKG_VERSION")),
            wordlist_dir: "data/wordlists".to_string(),
            wordlists: Vec::new(),
        }
    }
}

/// Load TOML config from `path`, or the default location. A missing file
/// yields defaults; an explicit path that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, DeplistError> {
    let (path, explicit) = match path {
        Some(p) => (p, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    if !path.exists() {
        if explicit {
            return Err(DeplistError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| DeplistError::Config(e.to_string()))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, DeplistError> {
    let cfg: AppConfig =
        toml::from_str(content).map_err(|e| DeplistError::Config(e.to_string()))?;
    if !(1..=5).contains(&cfg.default_depth) {
        return Err(DeplistError::Config(format!(
            "default_depth must be between 1 and 5, got {}",
            cfg.default_depth
        )));
    }
    Ok(cfg)
}
