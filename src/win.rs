//! Four-in-a-row detection

use crate::board::{Board, Player};
use crate::{HEIGHT, WIDTH};

/// True if the player has four consecutive tiles anywhere on the board
///
/// Scans every fixed window of four cells in each orientation, so runs
/// longer than four are still found.
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.cell();

    // horizontal alignments
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - 4 {
            if (0..4).all(|i| board.get(row, column + i) == target) {
                return true;
            }
        }
    }

    // vertical alignments
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - 4 {
            if (0..4).all(|i| board.get(row + i, column) == target) {
                return true;
            }
        }
    }

    // rising diagonal alignments, anchored at the lower-left end
    for row in 3..HEIGHT {
        for column in 0..=WIDTH - 4 {
            if (0..4).all(|i| board.get(row - i, column + i) == target) {
                return true;
            }
        }
    }

    // falling diagonal alignments, anchored at the lower-right end
    for row in 3..HEIGHT {
        for column in 3..WIDTH {
            if (0..4).all(|i| board.get(row - i, column - i) == target) {
                return true;
            }
        }
    }

    false
}
