mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot::{TIE_SCORE, WIN_SCORE, best_move};
pub use game_state::{GameSession, apply_move, reset};
pub use types::{
    BOARD_SIZE, BestMove, Cell, GameOutcome, MoveError, ParseBoardError, Player, WINNING_LINES,
    WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
