use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::engine::tictactoe::{GameOutcome, Player};

/// Win and tie counters across rounds. Player X is the first player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl ScoreBoard {
    /// Counts a finished round. `InProgress` leaves the counters unchanged
    /// and returns `false`. Counters stop at `u32::MAX`.
    pub fn record(&mut self, outcome: &GameOutcome) -> bool {
        let counter = match outcome {
            GameOutcome::Win(Player::X, _) => &mut self.x_wins,
            GameOutcome::Win(Player::O, _) => &mut self.o_wins,
            GameOutcome::Tie => &mut self.ties,
            GameOutcome::InProgress => return false,
        };
        *counter = counter.saturating_add(1);
        true
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.ties)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Validate for ScoreBoard {
    fn validate(&self) -> Result<(), String> {
        self.x_wins
            .checked_add(self.o_wins)
            .and_then(|sum| sum.checked_add(self.ties))
            .map(|_| ())
            .ok_or_else(|| "Score counters overflow".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};
    use crate::engine::tictactoe::WINNING_LINES;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut scores = ScoreBoard::default();

        assert!(scores.record(&GameOutcome::Win(Player::X, WINNING_LINES[0])));
        assert!(scores.record(&GameOutcome::Win(Player::O, WINNING_LINES[7])));
        assert!(scores.record(&GameOutcome::Win(Player::O, WINNING_LINES[3])));
        assert!(scores.record(&GameOutcome::Tie));

        assert_eq!(scores.wins(Player::X), 1);
        assert_eq!(scores.wins(Player::O), 2);
        assert_eq!(scores.ties, 1);
        assert_eq!(scores.games_played(), 4);
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut scores = ScoreBoard::default();
        assert!(!scores.record(&GameOutcome::InProgress));
        assert_eq!(scores, ScoreBoard::default());
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut scores = ScoreBoard {
            x_wins: 3,
            o_wins: 1,
            ties: 7,
        };
        scores.clear();
        assert_eq!(scores.games_played(), 0);
    }

    #[test]
    fn test_record_saturates_at_counter_limit() {
        let mut scores = ScoreBoard {
            x_wins: u32::MAX,
            o_wins: 0,
            ties: 0,
        };
        assert!(scores.validate().is_ok());

        assert!(scores.record(&GameOutcome::Win(Player::X, WINNING_LINES[0])));

        assert_eq!(scores.x_wins, u32::MAX);
        assert_eq!(scores.games_played(), u32::MAX);
    }

    #[test]
    fn test_overflowing_counters_fail_validation() {
        let scores = ScoreBoard {
            x_wins: u32::MAX,
            o_wins: 1,
            ties: 0,
        };
        assert!(scores.validate().is_err());
        assert!(ScoreBoard::default().validate().is_ok());
    }

    #[test]
    fn test_scores_yaml_round_trip() {
        let scores = ScoreBoard {
            x_wins: 2,
            o_wins: 5,
            ties: 1,
        };
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&scores).unwrap();
        assert!(text.contains("o_wins: 5"));
        let parsed: ScoreBoard = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, scores);
    }
}
