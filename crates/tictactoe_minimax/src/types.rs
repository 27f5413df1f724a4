//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
///
/// X is the minimizing side of the search and O the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (minimizer).
    X,
    /// Player O (maximizer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Terminal score of a win by this player: X = -1, O = +1.
    pub fn score(self) -> i32 {
        match self {
            Player::X => -1,
            Player::O => 1,
        }
    }

    /// True for the side that maximizes the score.
    pub fn is_maximizer(self) -> bool {
        self == Player::O
    }

    /// The player who moves when the search is maximizing or minimizing.
    pub fn to_move(maximizer: bool) -> Self {
        if maximizer { Player::O } else { Player::X }
    }

    /// Single-character code used in the textual grid.
    pub fn code(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    /// Parses a case-insensitive mark code. Anything but X or O is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("x") {
            Some(Player::X)
        } else if code.eq_ignore_ascii_case("o") {
            Some(Player::O)
        } else {
            None
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if nobody has marked this square.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Option<Player>> for Square {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Square::Empty, Square::Occupied)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Stored flat in row-major order; [`Position`] provides the row/column
/// mapping. The board is a plain value and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marked squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True when the board has a winner or no empty squares.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Classifies the board as in progress, won or drawn.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_scores() {
        assert_eq!(Player::X.score(), -1);
        assert_eq!(Player::O.score(), 1);
        assert!(Player::O.is_maximizer());
        assert!(!Player::X.is_maximizer());
        assert_eq!(Player::to_move(true), Player::O);
        assert_eq!(Player::to_move(false), Player::X);
    }

    #[test]
    fn test_player_codes_case_insensitive() {
        assert_eq!(Player::from_code("x"), Some(Player::X));
        assert_eq!(Player::from_code("X"), Some(Player::X));
        assert_eq!(Player::from_code("o"), Some(Player::O));
        assert_eq!(Player::from_code("_"), None);
        assert_eq!(Player::from_code("XO"), None);
        assert_eq!(Player::from_code(""), None);
    }

    #[test]
    fn test_player_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Player::O).unwrap(), "\"O\"");
    }

    #[test]
    fn test_status() {
        let mut board = Board::new();
        assert_eq!(board.status(), GameStatus::InProgress);

        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert_eq!(board.status(), GameStatus::Won(Player::O));
        assert_eq!(board.status().to_string(), "O wins");
        assert_eq!(board.occupied_count(), 3);
    }
}
