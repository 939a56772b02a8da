use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index, entered by the player as 1-9.
    Mark(usize),
    Restart,
    ClearScores,
    ShowScores,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "r" | "restart" => return Ok(Command::Restart),
            "c" | "clear" => return Ok(Command::ClearScores),
            "s" | "scores" => return Ok(Command::ShowScores),
            "h" | "help" | "?" => return Ok(Command::Help),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        match input.parse::<usize>() {
            Ok(0) => Err("Cells are numbered 1-9".to_string()),
            Ok(cell) => Ok(Command::Mark(cell - 1)),
            Err(_) => Err(format!("Unknown command '{}'", s.trim())),
        }
    }
}

pub const HELP: &str = "Commands: 1-9 mark a cell, r restart, s scores, c clear scores, q quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_map_to_zero_based_indices() {
        assert_eq!("1".parse::<Command>(), Ok(Command::Mark(0)));
        assert_eq!(" 9 ".parse::<Command>(), Ok(Command::Mark(8)));
    }

    #[test]
    fn test_large_numbers_are_left_for_the_board_to_reject() {
        assert_eq!("12".parse::<Command>(), Ok(Command::Mark(11)));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!("0".parse::<Command>().is_err());
    }

    #[test]
    fn test_letters_map_to_commands_case_insensitively() {
        assert_eq!("R".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("clear".parse::<Command>(), Ok(Command::ClearScores));
        assert_eq!("s".parse::<Command>(), Ok(Command::ShowScores));
        assert_eq!("Quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_input_is_an_error() {
        assert_eq!(
            "move".parse::<Command>(),
            Err("Unknown command 'move'".to_string())
        );
    }
}
