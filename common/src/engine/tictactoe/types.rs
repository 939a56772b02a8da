use std::fmt;

pub const BOARD_SIZE: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '.',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(&self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A row, column or diagonal of the 3x3 board, as row-major cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub cells: [usize; 3],
    pub label: &'static str,
}

impl WinningLine {
    const fn new(cells: [usize; 3], label: &'static str) -> Self {
        Self { cells, label }
    }
}

/// Scanned in this order; the first fully owned line decides a win.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine::new([0, 1, 2], "row-0"),
    WinningLine::new([3, 4, 5], "row-1"),
    WinningLine::new([6, 7, 8], "row-2"),
    WinningLine::new([0, 3, 6], "col-0"),
    WinningLine::new([1, 4, 7], "col-1"),
    WinningLine::new([2, 5, 8], "col-2"),
    WinningLine::new([0, 4, 8], "diag-0"),
    WinningLine::new([2, 4, 6], "diag-1"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player, WinningLine),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player, _) => Some(*player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub index: usize,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidIndex(usize),
    CellOccupied(usize),
    GameInactive,
    WrongTurn { expected: Player, got: Player },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidIndex(index) => {
                write!(f, "Cell index {} is out of range 0..{}", index, BOARD_SIZE)
            }
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::GameInactive => write!(f, "Game is already over"),
            MoveError::WrongTurn { expected, got } => {
                write!(f, "Not {}'s turn, {} moves now", got, expected)
            }
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    InvalidLength { expected: usize, found: usize },
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::InvalidLength { expected, found } => {
                write!(f, "Board must have {} cells, found {}", expected, found)
            }
            ParseBoardError::InvalidCharacter { character, position } => {
                write!(f, "Invalid cell '{}' at position {}", character, position)
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}
