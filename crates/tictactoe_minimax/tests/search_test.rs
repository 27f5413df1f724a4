//! Tests for best-move selection and terminal-state reporting.

use tictactoe_minimax::{
    Board, GameStatus, Player, Position, Square, apply_best_move, evaluate, score_moves,
};

fn board(grid: [[&str; 3]; 3]) -> Board {
    Board::from_text(&grid).unwrap()
}

/// Every distinct board reachable from the empty board by alternating play
/// (X first) in at most `plies` moves, stopping at terminal boards.
fn reachable_boards(plies: usize) -> Vec<(Board, Player)> {
    fn walk(board: Board, to_move: Player, plies: usize, out: &mut Vec<(Board, Player)>) {
        if out.iter().any(|(seen, _)| *seen == board) {
            return;
        }
        out.push((board, to_move));
        if plies == 0 || board.is_terminal() {
            return;
        }
        for pos in Position::valid_moves(&board) {
            let mut next = board;
            next.set(pos, Square::Occupied(to_move));
            walk(next, to_move.opponent(), plies - 1, out);
        }
    }

    let mut out = Vec::new();
    walk(Board::new(), Player::X, plies, &mut out);
    out
}

#[test]
fn test_empty_board_maximizer_takes_corner() {
    let mut b = Board::new();
    apply_best_move(&mut b, Some(Player::O));

    let marked: Vec<Position> = Position::ALL
        .iter()
        .copied()
        .filter(|&pos| !b.is_empty(pos))
        .collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].is_corner() || marked[0] == Position::Center);
    // Every opening draws, so the earliest square wins the tie.
    assert_eq!(marked[0], Position::TopLeft);
    assert_eq!(b.winner(), None);
    assert!(!b.is_full());
}

#[test]
fn test_minimizer_prefers_win_over_block() {
    let mut b = board([["X", "X", "_"], ["O", "O", "_"], ["_", "_", "_"]]);
    apply_best_move(&mut b, Some(Player::X));

    assert_eq!(b.get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(b.winner(), Some(Player::X));
    assert!(!b.is_full());
}

#[test]
fn test_maximizer_completes_own_line_when_available() {
    // O's own row is open, so winning outright beats blocking X.
    let mut b = board([["O", "O", "_"], ["X", "X", "_"], ["_", "_", "_"]]);
    apply_best_move(&mut b, Some(Player::O));

    assert_eq!(b.get(Position::TopRight), Square::Occupied(Player::O));
    assert!(b.is_empty(Position::MiddleRight));
    assert_eq!(b.winner(), Some(Player::O));
}

#[test]
fn test_maximizer_blocks_threat() {
    let mut b = board([["X", "X", "_"], ["O", "_", "_"], ["_", "_", "_"]]);
    apply_best_move(&mut b, Some(Player::O));

    assert_eq!(b.get(Position::TopRight), Square::Occupied(Player::O));
    assert_eq!(b.winner(), None);
    assert!(!b.is_full());
}

#[test]
fn test_minimizer_blocks_threat() {
    let mut b = board([["O", "_", "_"], ["_", "O", "_"], ["X", "_", "_"]]);
    apply_best_move(&mut b, Some(Player::X));

    assert_eq!(b.get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(b.winner(), None);
}

#[test]
fn test_full_board_unchanged() {
    let mut b = board([["X", "O", "X"], ["O", "X", "X"], ["O", "X", "O"]]);
    let before = b;
    assert_eq!(apply_best_move(&mut b, Some(Player::O)), None);

    assert_eq!(b, before);
    assert_eq!(b.winner(), None);
    assert!(b.is_full());
    assert_eq!(b.status(), GameStatus::Draw);
}

#[test]
fn test_won_board_unchanged() {
    let mut b = board([["X", "X", "X"], ["O", "O", "_"], ["_", "_", "_"]]);
    let before = b;
    assert_eq!(apply_best_move(&mut b, Some(Player::O)), None);
    assert_eq!(b, before);
    assert_eq!(b.to_text(), before.to_text());
}

#[test]
fn test_no_player_unchanged() {
    let mut b = board([["X", "_", "_"], ["_", "_", "_"], ["_", "_", "_"]]);
    let before = b;
    assert_eq!(apply_best_move(&mut b, None), None);
    assert_eq!(b, before);
}

#[test]
fn test_chosen_move_is_optimal() {
    for (start, to_move) in reachable_boards(4) {
        if start.is_terminal() {
            continue;
        }

        let mut played = start;
        let mov = apply_best_move(&mut played, Some(to_move)).unwrap();
        assert_eq!(played.occupied_count(), start.occupied_count() + 1);
        assert_eq!(played.get(mov.position), Square::Occupied(to_move));

        let chosen = evaluate(&mut played, !to_move.is_maximizer());
        for alternative in score_moves(&start, to_move) {
            if to_move.is_maximizer() {
                assert!(chosen >= alternative.score, "{start:?}: {alternative:?}");
            } else {
                assert!(chosen <= alternative.score, "{start:?}: {alternative:?}");
            }
        }
    }
}

#[test]
fn test_ties_keep_earliest_square() {
    for (start, to_move) in reachable_boards(3) {
        if start.is_terminal() {
            continue;
        }

        let scores = score_moves(&start, to_move);
        let target = if to_move.is_maximizer() {
            scores.iter().map(|s| s.score).max()
        } else {
            scores.iter().map(|s| s.score).min()
        };
        let earliest = scores.iter().find(|s| Some(s.score) == target).unwrap();

        let mut played = start;
        let mov = apply_best_move(&mut played, Some(to_move)).unwrap();
        assert_eq!(mov.position, earliest.mov.position);
    }
}

#[test]
fn test_self_play_draws() {
    let mut b = Board::new();
    let mut to_move = Player::X;
    while apply_best_move(&mut b, Some(to_move)).is_some() {
        to_move = to_move.opponent();
    }
    assert_eq!(b.status(), GameStatus::Draw);
}

#[test]
fn test_text_round_trip_normalizes() {
    let grid = [["x", "o", "?"], ["_", "X", "O"], ["", "-", "o"]];
    let b = Board::from_text(&grid).unwrap();
    assert_eq!(
        b.to_text(),
        vec![vec!["X", "O", "_"], vec!["_", "X", "O"], vec!["_", "_", "O"]]
    );
    assert_eq!(Board::from_text(&b.to_text()).unwrap(), b);
}
