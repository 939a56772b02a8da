use std::fmt;
use std::time::Duration;
use tictactoe_common::tictactoe::Player;

use crate::config::{Config, GameMode};

pub const AI_NAME: &str = "AI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    MissingPlayer1Name,
    MissingPlayer2Name,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingPlayer1Name => write!(f, "Enter Player 1 name."),
            SetupError::MissingPlayer2Name => write!(f, "Enter Player 2 name."),
        }
    }
}

impl std::error::Error for SetupError {}

/// Who plays which mark in one sitting. Player 1 is always X and opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSettings {
    pub mode: GameMode,
    pub player_x: String,
    pub player_o: String,
    pub ai_delay: Duration,
}

impl MatchSettings {
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let player_x = config.player1_name.trim();
        if player_x.is_empty() {
            return Err(SetupError::MissingPlayer1Name);
        }

        let player_o = match config.mode {
            GameMode::SinglePlayer => AI_NAME,
            GameMode::TwoPlayer => {
                let name = config.player2_name.trim();
                if name.is_empty() {
                    return Err(SetupError::MissingPlayer2Name);
                }
                name
            }
        };

        Ok(Self {
            mode: config.mode,
            player_x: player_x.to_string(),
            player_o: player_o.to_string(),
            ai_delay: Duration::from_millis(config.ai_delay_ms),
        })
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x,
            Player::O => &self.player_o,
        }
    }

    pub fn is_ai(&self, player: Player) -> bool {
        self.mode == GameMode::SinglePlayer && player == Player::O
    }
}
