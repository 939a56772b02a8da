use std::fmt;
use std::io::Write;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameSession, MoveError, Player, apply_move, best_move, reset};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, HELP};
use crate::render::{render_board, render_scores, status_message};
use crate::score_keeper::ScoreKeeper;
use crate::setup::MatchSettings;

#[derive(Debug)]
pub enum GameLoopError {
    Io(std::io::Error),
    Search(tokio::task::JoinError),
    NoAiMove,
}

impl fmt::Display for GameLoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameLoopError::Io(e) => write!(f, "IO error: {}", e),
            GameLoopError::Search(e) => write!(f, "AI search failed: {}", e),
            GameLoopError::NoAiMove => write!(f, "AI found no move on an active board"),
        }
    }
}

impl std::error::Error for GameLoopError {}

impl From<std::io::Error> for GameLoopError {
    fn from(e: std::io::Error) -> Self {
        GameLoopError::Io(e)
    }
}

impl From<tokio::task::JoinError> for GameLoopError {
    fn from(e: tokio::task::JoinError) -> Self {
        GameLoopError::Search(e)
    }
}

pub struct GameLoop<K: ScoreKeeper> {
    settings: MatchSettings,
    keeper: K,
    session: GameSession,
}

impl<K: ScoreKeeper> GameLoop<K> {
    pub fn new(settings: MatchSettings, keeper: K) -> Self {
        Self {
            settings,
            keeper,
            session: reset(),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[cfg(test)]
    pub fn keeper(&self) -> &K {
        &self.keeper
    }

    /// Plays rounds until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), GameLoopError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        writeln!(out, "{}", HELP)?;
        self.start_round(out)?;

        loop {
            if self.session.is_active() && self.settings.is_ai(self.session.current_player()) {
                self.play_ai_turn(out).await?;
                continue;
            }

            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                log!("Input closed, leaving the game");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Mark(index)) => {
                    let player = self.session.current_player();
                    self.place(index, player, out)?;
                }
                Ok(Command::Restart) => self.start_round(out)?,
                Ok(Command::ShowScores) => self.show_scores(out)?,
                Ok(Command::ClearScores) => self.clear_scores(out)?,
                Ok(Command::Help) => writeln!(out, "{}", HELP)?,
                Ok(Command::Quit) => {
                    log!("Player quit");
                    break;
                }
                Err(e) => writeln!(out, "{}. {}", e, HELP)?,
            }
        }

        Ok(())
    }

    fn start_round<W: Write>(&mut self, out: &mut W) -> Result<(), GameLoopError> {
        self.session = reset();
        log!(
            "New round: {} (X) vs {} (O), mode {}",
            self.settings.player_x,
            self.settings.player_o,
            self.settings.mode
        );
        self.show_position(out)
    }

    fn show_position<W: Write>(&self, out: &mut W) -> Result<(), GameLoopError> {
        writeln!(out, "\n{}\n", render_board(&self.session.board()))?;
        writeln!(
            out,
            "{}",
            status_message(
                &self.session.outcome(),
                self.session.current_player(),
                &self.settings
            )
        )?;
        Ok(())
    }

    async fn play_ai_turn<W: Write>(&mut self, out: &mut W) -> Result<(), GameLoopError> {
        tokio::time::sleep(self.settings.ai_delay).await;

        let board = self.session.board();
        let player = self.session.current_player();
        let choice = tokio::task::spawn_blocking(move || best_move(&board, player)).await?;

        let Some(choice) = choice else {
            return Err(GameLoopError::NoAiMove);
        };

        log!("AI chose cell {} (score {})", choice.index, choice.score);
        self.place(choice.index, player, out)
    }

    fn place<W: Write>(
        &mut self,
        index: usize,
        player: Player,
        out: &mut W,
    ) -> Result<(), GameLoopError> {
        match apply_move(&self.session, index, player) {
            Ok(next) => {
                log!(
                    "{} ({}) marked cell {}",
                    self.settings.name(player),
                    player,
                    index
                );
                self.session = next;
                self.show_position(out)?;
                if !self.session.is_active() {
                    self.finish_round(out)?;
                }
            }
            Err(e) => {
                log!("Rejected move at {}: {}", index, e);
                writeln!(out, "{}", e)?;
                if e == MoveError::GameInactive {
                    writeln!(out, "Press r to play again.")?;
                }
            }
        }
        Ok(())
    }

    fn finish_round<W: Write>(&mut self, out: &mut W) -> Result<(), GameLoopError> {
        let outcome = self.session.outcome();
        log!("Round over: {:?}", outcome);

        match self.keeper.record_outcome(&outcome) {
            Ok(scores) => writeln!(out, "{}", render_scores(&scores, &self.settings))?,
            Err(e) => {
                log!("Failed to save scores: {}", e);
                writeln!(out, "Could not save scores: {}", e)?;
            }
        }
        writeln!(out, "Press r to play again.")?;
        Ok(())
    }

    fn show_scores<W: Write>(&self, out: &mut W) -> Result<(), GameLoopError> {
        match self.keeper.scores() {
            Ok(scores) => writeln!(out, "{}", render_scores(&scores, &self.settings))?,
            Err(e) => {
                log!("Failed to load scores: {}", e);
                writeln!(out, "Could not load scores: {}", e)?;
            }
        }
        Ok(())
    }

    fn clear_scores<W: Write>(&mut self, out: &mut W) -> Result<(), GameLoopError> {
        match self.keeper.clear() {
            Ok(scores) => {
                log!("Scoreboard cleared");
                writeln!(out, "Scoreboard cleared!")?;
                writeln!(out, "{}", render_scores(&scores, &self.settings))?;
            }
            Err(e) => {
                log!("Failed to clear scores: {}", e);
                writeln!(out, "Could not clear scores: {}", e)?;
            }
        }
        Ok(())
    }
}
