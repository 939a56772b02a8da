use super::board::Board;
use super::types::{BOARD_SIZE, Cell, GameOutcome, MoveError, Player};
use super::win_detector::evaluate;

/// One round of play. Moves produce a new session; the old one is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    active: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            current_player: Player::X,
            active: true,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// False once the round has been won or tied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn apply_move(&self, index: usize, player: Player) -> Result<GameSession, MoveError> {
        if index >= BOARD_SIZE {
            return Err(MoveError::InvalidIndex(index));
        }

        if self.board.get(index) != Some(Cell::Empty) {
            return Err(MoveError::CellOccupied(index));
        }

        if !self.active {
            return Err(MoveError::GameInactive);
        }

        if player != self.current_player {
            return Err(MoveError::WrongTurn {
                expected: self.current_player,
                got: player,
            });
        }

        let board = self.board.with_mark(index, player.mark());
        let finished = evaluate(&board).is_terminal();

        Ok(GameSession {
            board,
            current_player: if finished { player } else { player.opponent() },
            active: !finished,
        })
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }
}

pub fn reset() -> GameSession {
    GameSession::new()
}

pub fn apply_move(
    session: &GameSession,
    index: usize,
    player: Player,
) -> Result<GameSession, MoveError> {
    session.apply_move(index, player)
}
