//! Moves produced by the search.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A candidate move together with its minimax value.
///
/// The score is from the board's absolute perspective: -1 means X wins
/// with best play, +1 means O wins, 0 is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveScore {
    /// The evaluated move.
    pub mov: Move,
    /// Minimax value of the position after the move.
    pub score: i32,
}

impl MoveScore {
    /// True if `self` is strictly better than `other` for the mover.
    pub fn beats(&self, other: &MoveScore) -> bool {
        if self.mov.player.is_maximizer() {
            self.score > other.score
        } else {
            self.score < other.score
        }
    }
}
