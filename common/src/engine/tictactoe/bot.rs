use super::board::Board;
use super::types::{BestMove, GameOutcome, Player};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;
pub const TIE_SCORE: i32 = 0;

/// Picks the optimal move for `player`, assuming the opponent also plays
/// optimally. O maximizes the score, X minimizes it. Among equally good
/// moves the lowest index is returned.
///
/// Returns `None` when the board is already decided.
pub fn best_move(board: &Board, player: Player) -> Option<BestMove> {
    if evaluate(board).is_terminal() {
        return None;
    }

    board.empty_indices().fold(None, |best: Option<BestMove>, index| {
        let next = board.with_mark(index, player.mark());
        let candidate = BestMove {
            index,
            score: minimax(&next, player.opponent()),
        };

        match best {
            Some(current) if !is_better(player, candidate.score, current.score) => Some(current),
            _ => Some(candidate),
        }
    })
}

/// Scores `board` with `player` to move. Wins are not discounted by depth.
fn minimax(board: &Board, player: Player) -> i32 {
    match evaluate(board) {
        GameOutcome::Win(Player::X, _) => -WIN_SCORE,
        GameOutcome::Win(Player::O, _) => WIN_SCORE,
        GameOutcome::Tie => TIE_SCORE,
        GameOutcome::InProgress => best_move(board, player)
            .map(|m| m.score)
            .unwrap_or(TIE_SCORE),
    }
}

fn is_better(player: Player, score: i32, best: i32) -> bool {
    match player {
        Player::O => score > best,
        Player::X => score < best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::{GameSession, apply_move, reset};

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_o_answers_corner_opening_with_center() {
        let result = best_move(&board("X........"), Player::O);
        assert_eq!(result, Some(BestMove { index: 4, score: 0 }));
    }

    #[test]
    fn test_x_completes_column_when_possible() {
        let result = best_move(&board("XOXXOO..."), Player::X).unwrap();
        assert_eq!(result, BestMove { index: 6, score: -10 });
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let result = best_move(&board("XX.OO.X.."), Player::O).unwrap();
        assert_eq!(result, BestMove { index: 5, score: 10 });
    }

    #[test]
    fn test_x_blocks_losing_line() {
        // O threatens the middle row, so X has to take 3 to hold the draw.
        let result = best_move(&board("X...OO..X"), Player::X).unwrap();
        assert_eq!(result, BestMove { index: 3, score: 0 });
    }

    #[test]
    fn test_x_prefers_own_win_over_blocking() {
        let result = best_move(&board("X.X.OO..."), Player::X).unwrap();
        assert_eq!(result, BestMove { index: 1, score: -10 });
    }

    #[test]
    fn test_empty_board_first_move_is_index_zero_for_both_players() {
        assert_eq!(
            best_move(&Board::empty(), Player::X),
            Some(BestMove { index: 0, score: 0 })
        );
        assert_eq!(
            best_move(&Board::empty(), Player::O),
            Some(BestMove { index: 0, score: 0 })
        );
    }

    #[test]
    fn test_terminal_boards_have_no_best_move() {
        assert_eq!(best_move(&board("XXXOO...."), Player::O), None);
        assert_eq!(best_move(&board("XOXXOOOXX"), Player::X), None);
    }

    #[test]
    fn test_single_empty_cell_is_chosen() {
        let result = best_move(&board("XOXXOOOX."), Player::X).unwrap();
        assert_eq!(result, BestMove { index: 8, score: 0 });
    }

    #[test]
    fn test_equal_scores_resolve_to_lowest_index() {
        // X wins at both 6 and 8.
        let b = board("XOXOXO...");
        let result = best_move(&b, Player::X).unwrap();
        let scores: Vec<i32> = b
            .empty_indices()
            .map(|index| minimax(&b.with_mark(index, Player::X.mark()), Player::O))
            .collect();
        let optimum = *scores.iter().min().unwrap();
        let first = b
            .empty_indices()
            .zip(scores.iter())
            .find(|(_, score)| **score == optimum)
            .map(|(index, _)| index)
            .unwrap();
        assert_eq!(result, BestMove { index: first, score: optimum });
        assert_eq!(result, BestMove { index: 6, score: -10 });
    }

    #[test]
    fn test_search_does_not_modify_input_board() {
        let b = board("X...O....");
        let before = b;
        let _ = best_move(&b, Player::X);
        assert_eq!(b, before);
    }

    #[test]
    fn test_engine_against_itself_ends_in_tie() {
        let mut session = reset();
        while session.is_active() {
            let choice = best_move(&session.board(), session.current_player()).unwrap();
            session = apply_move(&session, choice.index, session.current_player()).unwrap();
        }
        assert_eq!(session.outcome(), GameOutcome::Tie);
    }

    fn assert_o_never_loses(session: GameSession) {
        if !session.is_active() {
            assert_ne!(session.outcome().winner(), Some(Player::X), "{}", session.board());
            return;
        }

        match session.current_player() {
            Player::X => {
                let board = session.board();
                for index in board.empty_indices() {
                    let next = apply_move(&session, index, Player::X).unwrap();
                    assert_o_never_loses(next);
                }
            }
            Player::O => {
                let choice = best_move(&session.board(), Player::O).unwrap();
                assert!(choice.score >= 0, "{} scored {}", session.board(), choice.score);
                let next = apply_move(&session, choice.index, Player::O).unwrap();
                assert_o_never_loses(next);
            }
        }
    }

    #[test]
    fn test_o_never_loses_against_any_x_play() {
        assert_o_never_loses(reset());
    }
}
