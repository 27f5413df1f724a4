//! Kani arbitrary implementations and proof harnesses.
//!
//! Only compiled under `cargo kani`.

#[cfg(kani)]
use super::{Board, Player, Square, apply_best_move};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Board::from_squares(squares)
    }
}

#[cfg(kani)]
#[kani::proof]
fn text_round_trip_is_lossless() {
    let board: Board = kani::any();
    let text = board.to_text();
    let parsed = Board::from_text(&text);
    assert!(parsed.is_ok());
    if let Ok(parsed) = parsed {
        assert_eq!(parsed, board);
    }
}

#[cfg(kani)]
#[kani::proof]
fn no_player_is_a_no_op() {
    let mut board: Board = kani::any();
    let before = board;
    assert!(apply_best_move(&mut board, None).is_none());
    assert_eq!(board, before);
}

#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn won_board_is_a_no_op() {
    let mut board: Board = kani::any();
    kani::assume(board.winner().is_some());
    let before = board;
    let player: Player = kani::any();
    assert!(apply_best_move(&mut board, Some(player)).is_none());
    assert_eq!(board, before);
}
