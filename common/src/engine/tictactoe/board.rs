use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, Cell, ParseBoardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of the board with `index` set to `cell`.
    /// The caller is responsible for the index being in range.
    pub fn with_mark(&self, index: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[index] = cell;
        next
    }

    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells, row-major: `X`, `O`, and `.` or a space for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != BOARD_SIZE {
            return Err(ParseBoardError::InvalidLength {
                expected: BOARD_SIZE,
                found,
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (position, character) in s.chars().enumerate() {
            cells[position] = match character {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | ' ' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidCharacter { character, position }),
            };
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}
