//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// Every winning line, in scan order: each row followed by the column with
/// the same index, then the main diagonal and the anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] fully held by one
/// player, `None` otherwise. Boards with more than one complete line report
/// whichever comes first in scan order.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(player),
            _ => None,
        }
    })
}
