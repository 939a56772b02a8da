use tictactoe_common::ScoreBoard;
use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Cell, GameOutcome, Player};

use crate::setup::MatchSettings;

/// Empty cells show the number a player types to take them.
pub fn render_board(board: &Board) -> String {
    let cells: Vec<String> = (0..BOARD_SIZE)
        .map(|index| match board.get(index) {
            Some(Cell::Empty) | None => (index + 1).to_string(),
            Some(cell) => cell.symbol().to_string(),
        })
        .collect();

    cells
        .chunks(3)
        .map(|row| format!(" {} | {} | {} ", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn status_message(outcome: &GameOutcome, to_move: Player, names: &MatchSettings) -> String {
    match outcome {
        GameOutcome::Win(player, line) => {
            format!("{} has won! ({})", names.name(*player), line.label)
        }
        GameOutcome::Tie => "It's a tie!".to_string(),
        GameOutcome::InProgress => format!("{}'s turn", names.name(to_move)),
    }
}

pub fn render_scores(scores: &ScoreBoard, names: &MatchSettings) -> String {
    format!(
        "{}: {} | {}: {} | Ties: {}",
        names.player_x, scores.x_wins, names.player_o, scores.o_wins, scores.ties
    )
}
