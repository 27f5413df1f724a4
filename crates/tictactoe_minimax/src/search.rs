//! Exhaustive minimax search.
//!
//! Scores are absolute: X (the minimizer) wins at -1, O (the maximizer) at
//! +1, and a draw is 0. The search visits every continuation with no
//! pruning, memoization or depth limit; the 3x3 game tree is small enough.

use super::{Board, Move, MoveScore, Player, Position, Square};
use std::ops::{Deref, DerefMut};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// A mark placed on a borrowed board for the lifetime of the guard.
///
/// Dropping the guard clears the square again, so a branch is undone on
/// every exit path, including unwinding.
struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, player: Player) -> Self {
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Square::Empty);
    }
}

/// Minimax value of `board` with the given side to move.
///
/// Terminal boards score immediately: the winner's [`Player::score`], or 0
/// when full. Otherwise every empty square is tried in row-major order and
/// the best child value for the mover is returned. The board is restored
/// before this returns.
pub fn evaluate(board: &mut Board, maximizer_to_move: bool) -> i32 {
    if let Some(winner) = board.winner() {
        return winner.score();
    }
    if board.is_full() {
        return 0;
    }

    let mover = Player::to_move(maximizer_to_move);
    let mut best = if maximizer_to_move { i32::MIN } else { i32::MAX };

    for position in Position::iter() {
        if !board.is_empty(position) {
            continue;
        }
        let mut placed = Placement::new(board, position, mover);
        let score = evaluate(&mut placed, !maximizer_to_move);
        best = if maximizer_to_move {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax value of every legal move for `player`, in row-major order.
///
/// Returns an empty list when the board is already terminal.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn score_moves(board: &Board, player: Player) -> Vec<MoveScore> {
    if board.is_terminal() {
        return Vec::new();
    }

    let mut scratch = *board;
    Position::iter()
        .filter(|&pos| board.is_empty(pos))
        .map(|position| {
            let mut placed = Placement::new(&mut scratch, position, player);
            let score = evaluate(&mut placed, !player.is_maximizer());
            debug!(%position, score, "Scored candidate");
            MoveScore::new(Move::new(player, position), score)
        })
        .collect()
}

/// The move [`apply_best_move`] would make, without touching `board`.
///
/// Ties keep the earliest square in row-major order. `None` when the board
/// is already won or full.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn best_move(board: &Board, player: Player) -> Option<MoveScore> {
    let sentinel = if player.is_maximizer() { i32::MIN } else { i32::MAX };
    let mut best: Option<MoveScore> = None;

    for candidate in score_moves(board, player) {
        let current = best.unwrap_or(MoveScore::new(
            Move::new(player, Position::TopLeft),
            sentinel,
        ));
        if candidate.beats(&current) {
            best = Some(candidate);
        }
    }

    best
}

/// Places the optimal mark for `player` on `board`.
///
/// Does nothing when `player` is `None`, or when the board already has a
/// winner or is full. Otherwise exactly one empty square receives
/// `player`'s mark, and the placed move is returned.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn apply_best_move(board: &mut Board, player: Option<Player>) -> Option<Move> {
    let Some(player) = player else {
        debug!("No player to move");
        return None;
    };

    let Some(best) = best_move(board, player) else {
        debug!(status = %board.status(), "Board is terminal, nothing to do");
        return None;
    };

    board.set(best.mov.position, Square::Occupied(player));
    info!(mov = %best.mov, score = best.score, "Applied best move");
    Some(best.mov)
}
