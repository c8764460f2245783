//! Heuristic scoring of searched positions

use crate::board::{Board, Cell, Player};
use crate::{HEIGHT, WIDTH};

/// How many times a player's streaks reach each scoring length
///
/// Counting is cumulative as a streak grows: a run of four tiles adds one
/// to each of `twos`, `threes` and `fours`, not just to `fours`.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SequenceCounts {
    pub twos: usize,
    pub threes: usize,
    pub fours: usize,
}

impl SequenceCounts {
    fn record(&mut self, length: usize) {
        match length {
            2 => self.twos += 1,
            3 => self.threes += 1,
            4 => self.fours += 1,
            // longer streaks add nothing beyond their first four tiles
            _ => {}
        }
    }
}

/// Counts the player's streaks along every row, every column, and the
/// diagonals at offsets -2..=3 in both orientations
///
/// The scanned offsets are exactly the diagonals long enough to hold a
/// four-in-a-row; shorter corner diagonals are invisible to the count.
pub fn count_sequences(board: &Board, player: Player) -> SequenceCounts {
    let target = player.cell();
    let mut counts = SequenceCounts::default();

    for row in 0..HEIGHT {
        scan_line(
            &mut counts,
            (0..WIDTH).map(|column| board.get(row, column)),
            target,
        );
    }
    for column in 0..WIDTH {
        scan_line(
            &mut counts,
            (0..HEIGHT).map(|row| board.get(row, column)),
            target,
        );
    }
    for offset in -2..=3 {
        scan_line(&mut counts, diagonal_cells(board, offset, false), target);
        scan_line(&mut counts, diagonal_cells(board, offset, true), target);
    }

    counts
}

fn scan_line<I: Iterator<Item = Cell>>(counts: &mut SequenceCounts, cells: I, target: Cell) {
    let mut run = 0;
    for cell in cells {
        if cell == target {
            run += 1;
            if run >= 2 {
                counts.record(run);
            }
        } else {
            run = 0;
        }
    }
}

// cells of the diagonal `offset` columns right of the top-left corner;
// `rising` flips the board vertically to walk the '/' diagonals instead
fn diagonal_cells(board: &Board, offset: i32, rising: bool) -> impl Iterator<Item = Cell> + '_ {
    (0..HEIGHT as i32).filter_map(move |step| {
        let column = step + offset;
        if column < 0 || column >= WIDTH as i32 {
            return None;
        }
        let row = if rising { HEIGHT as i32 - 1 - step } else { step };
        Some(board.get(row as usize, column as usize))
    })
}

/// Scores a position from the computer player's perspective
///
/// The ladder is ordinal, first match wins: a threat of a given length
/// always outweighs any number of shorter threats from either side, and
/// the human's threats are checked before the computer's at each length.
pub fn utility(board: &Board, computer: Player) -> i32 {
    let computer_counts = count_sequences(board, computer);
    let human_counts = count_sequences(board, computer.opponent());

    if human_counts.fours > 0 {
        -3
    } else if computer_counts.fours > 0 {
        3
    } else if human_counts.threes > 0 {
        -2
    } else if computer_counts.threes > 0 {
        2
    } else if human_counts.twos > 0 {
        -1
    } else if computer_counts.twos > 0 {
        1
    } else {
        0
    }
}
