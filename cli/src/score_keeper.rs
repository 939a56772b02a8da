use std::path::PathBuf;
use tictactoe_common::ScoreBoard;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use tictactoe_common::tictactoe::GameOutcome;

/// Told about every finished round exactly once by the game loop.
pub trait ScoreKeeper {
    fn scores(&self) -> Result<ScoreBoard, String>;
    fn record_outcome(&mut self, outcome: &GameOutcome) -> Result<ScoreBoard, String>;
    fn clear(&mut self) -> Result<ScoreBoard, String>;
}

pub struct FileScoreKeeper {
    manager: ConfigManager<FileContentConfigProvider, ScoreBoard, YamlConfigSerializer>,
}

impl FileScoreKeeper {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            manager: ConfigManager::from_yaml_file(file_path),
        }
    }
}

impl ScoreKeeper for FileScoreKeeper {
    fn scores(&self) -> Result<ScoreBoard, String> {
        self.manager.get_config()
    }

    fn record_outcome(&mut self, outcome: &GameOutcome) -> Result<ScoreBoard, String> {
        self.manager.update(|scores| {
            scores.record(outcome);
        })
    }

    fn clear(&mut self) -> Result<ScoreBoard, String> {
        self.manager.update(ScoreBoard::clear)
    }
}
