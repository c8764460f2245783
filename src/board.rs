use anyhow::{anyhow, Result};
use thiserror::Error;

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other side
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell variant this side places on the board
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// Returned by [`Board::insert`] when a move targets a column that
/// cannot take another tile
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidMoveError {
    #[error("column {column} is out of bounds")]
    OutOfBounds { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// A Connect 4 position, row 0 at the top and row 5 at the bottom
///
/// `Board` is an immutable value: [`insert`] and [`successors`] return fresh
/// copies, so positions held by different search branches never alias.
/// Within a column the non-empty cells always form a contiguous block
/// anchored at the bottom, as `insert` is the only way to place a tile.
///
/// [`insert`]: #method.insert
/// [`successors`]: #method.successors
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Replays a string of 1-indexed column digits, players alternating
    /// starting from player one
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board = board.insert(player, column - 1)?;
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// True if the column is in range and has room for another tile
    pub fn can_insert(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Drops a tile into the lowest empty cell of the column
    ///
    /// Returns the new position, leaving `self` untouched.
    pub fn insert(&self, player: Player, column: usize) -> Result<Board, InvalidMoveError> {
        if column >= WIDTH {
            return Err(InvalidMoveError::OutOfBounds { column });
        }
        if !self.cells[0][column].is_empty() {
            return Err(InvalidMoveError::ColumnFull { column });
        }

        let mut next = *self;
        for row in (0..HEIGHT).rev() {
            if next.cells[row][column].is_empty() {
                next.cells[row][column] = player.cell();
                break;
            }
        }
        Ok(next)
    }

    /// The positions reachable by the player in one move, one per open
    /// column in ascending column order
    ///
    /// The order is load-bearing: the search keeps the first best
    /// successor on ties, so lower columns win them.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = Board> + '_ {
        (0..WIDTH).filter_map(move |column| self.insert(player, column).ok())
    }

    /// True if no column can take another tile
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.can_insert(column))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
