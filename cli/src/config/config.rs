use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::log;

use super::GameMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const SCORES_FILE_NAME: &str = "tictactoe_scores.yaml";
const DEFAULT_AI_DELAY_MS: u64 = 700;
const MAX_AI_DELAY_MS: u64 = 10_000;

fn executable_dir() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(Path::to_path_buf)
}

/// Relative paths are taken relative to the executable's directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match executable_dir() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

pub type SettingsManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&Path>) -> SettingsManager {
    let path = path.unwrap_or(Path::new(CONFIG_FILE_NAME));
    ConfigManager::from_yaml_file(resolve_path(path))
}

/// Reads the settings file. A missing file is created with defaults; a file
/// that fails to parse or validate is never written, and defaults are used
/// for this run only.
pub fn load_config(manager: &SettingsManager) -> Config {
    let path = manager.content_provider().path();
    let existed = path.exists();

    match manager.get_config() {
        Ok(config) => {
            if !existed {
                match manager.set_config(&config) {
                    Ok(()) => log!("Created settings file {}", path.display()),
                    Err(e) => log!("Failed to create settings file {}: {}", path.display(), e),
                }
            }
            config
        }
        Err(e) => {
            log!(
                "Settings file {} rejected, using defaults and leaving it unchanged: {}",
                path.display(),
                e
            );
            Config::default()
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player1_name: String,
    pub player2_name: String,
    pub mode: GameMode,
    #[serde(default = "default_ai_delay_ms")]
    pub ai_delay_ms: u64,
    #[serde(default = "default_scores_file")]
    pub scores_file: String,
}

fn default_ai_delay_ms() -> u64 {
    DEFAULT_AI_DELAY_MS
}

fn default_scores_file() -> String {
    SCORES_FILE_NAME.to_string()
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {} (got {})",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            ));
        }
        if self.scores_file.trim().is_empty() {
            return Err("scores_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            mode: GameMode::TwoPlayer,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            scores_file: default_scores_file(),
        }
    }
}
