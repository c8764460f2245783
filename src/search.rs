//! Depth-limited minimax search with alpha-beta pruning

use log::debug;

use crate::board::{Board, Player};
use crate::evaluate::utility;
use crate::win::has_won;

/// The default search depth in plies
pub const DEFAULT_DEPTH: u32 = 5;

/// An agent that picks moves for one side by searching the game tree
///
/// # Move Selection
/// The search alternates maximising plies for the configured side and
/// minimising plies for its opponent down to a fixed depth, pruning
/// branches that cannot change the root value. Leaves are scored by
/// [`utility`]. Ties between equally scored moves go to the lowest
/// column, as successors are generated left to right and only a strictly
/// better value replaces the current best.
pub struct Searcher {
    computer: Player,
    depth: u32,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` playing for the given side at the default depth
    pub fn new(computer: Player) -> Self {
        Self {
            computer,
            depth: DEFAULT_DEPTH,
            node_count: 0,
        }
    }

    /// Sets the maximum search depth of an existing `Searcher`
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Picks the best move for the configured side
    ///
    /// Returns the position after the chosen move. A position that is
    /// already won, or has no open column, is returned unchanged; the
    /// caller decides what a passed turn means.
    pub fn choose_move(&mut self, board: &Board) -> Board {
        let (value, best_successor) =
            self.max_value(board, i32::MIN, i32::MAX, self.depth, self.computer);

        debug!(
            "searched {} nodes, root value {} at depth {}",
            self.node_count, value, self.depth
        );

        best_successor.unwrap_or(*board)
    }

    // wins are checked for both fixed sides on the node's board, never
    // derived from which side moves at this node
    fn terminal(&self, board: &Board, depth: u32) -> bool {
        depth == 0 || has_won(board, self.computer) || has_won(board, self.computer.opponent())
    }

    pub(crate) fn max_value(
        &mut self,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        depth: u32,
        player: Player,
    ) -> (i32, Option<Board>) {
        self.node_count += 1;
        if self.terminal(board, depth) {
            return (utility(board, self.computer), None);
        }

        let mut best_value = i32::MIN;
        let mut best_successor = None;
        let next_player = player.opponent();

        for successor in board.successors(player) {
            let (value, _) = self.min_value(&successor, alpha, beta, depth - 1, next_player);
            // strict comparison keeps the first best successor on ties
            if value > best_value {
                best_value = value;
                best_successor = Some(successor);
            }
            // fail high: the minimiser above will never allow this branch
            if value >= beta {
                return (best_value, best_successor);
            }
            alpha = alpha.max(best_value);
        }

        (best_value, best_successor)
    }

    pub(crate) fn min_value(
        &mut self,
        board: &Board,
        alpha: i32,
        mut beta: i32,
        depth: u32,
        player: Player,
    ) -> (i32, Option<Board>) {
        self.node_count += 1;
        if self.terminal(board, depth) {
            return (utility(board, self.computer), None);
        }

        let mut best_value = i32::MAX;
        let mut best_successor = None;
        let next_player = player.opponent();

        for successor in board.successors(player) {
            let (value, _) = self.max_value(&successor, alpha, beta, depth - 1, next_player);
            if value < best_value {
                best_value = value;
                best_successor = Some(successor);
            }
            // fail low: the maximiser above already has a better option
            if value <= alpha {
                return (best_value, best_successor);
            }
            beta = beta.min(best_value);
        }

        (best_value, best_successor)
    }
}
