use super::board::Board;
use super::types::{GameOutcome, Player, WINNING_LINES, WinningLine};

pub fn check_win_with_line(board: &Board) -> Option<(Player, WinningLine)> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line.cells;
        if let Some(player) = cells[a].owner()
            && cells[a] == cells[b]
            && cells[b] == cells[c]
        {
            return Some((player, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|(player, _)| player)
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((player, line)) = check_win_with_line(board) {
        return GameOutcome::Win(player, line);
    }

    if board.is_full() {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::empty()), GameOutcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        for cells in ["XOXXOOOXX", "XOXOXXOXO", "OXOXXOXOX"] {
            assert_eq!(evaluate(&board(cells)), GameOutcome::Tie, "{}", cells);
        }
    }

    #[test]
    fn test_every_line_is_detected_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut b = Board::empty();
                for index in line.cells {
                    b = b.with_mark(index, player.mark());
                }
                assert_eq!(evaluate(&b), GameOutcome::Win(player, line));
            }
        }
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let outcome = evaluate(&board("XXXOOXOXO"));
        assert_eq!(outcome, GameOutcome::Win(Player::X, WINNING_LINES[0]));
    }

    #[test]
    fn test_first_line_in_scan_order_wins_when_several_are_filled() {
        // Top row and left column are both owned by X.
        let outcome = evaluate(&board("XXXXOOXO."));
        assert_eq!(outcome, GameOutcome::Win(Player::X, WINNING_LINES[0]));

        // Middle column and anti-diagonal for O: the column is scanned first.
        let outcome = evaluate(&board("XOOXO.OOX"));
        match outcome {
            GameOutcome::Win(Player::O, line) => assert_eq!(line.label, "col-1"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_win(&board("XXO......")), None);
        assert_eq!(evaluate(&board("XXO......")), GameOutcome::InProgress);
    }
}
