//! Route wiring and request/response shaping.

use crate::error::ApiError;
use axum::{
    Json, Router,
    body::Body,
    extract::rejection::JsonRejection,
    http::Request,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tictactoe_minimax::{Board, EMPTY_CODE, Player, TextGrid, apply_best_move};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

/// Body of a move request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Rows of cell codes. Must be 3x3.
    pub board: TextGrid,
}

/// Board after the engine's move plus terminal-state flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Rows of canonical cell codes.
    pub board: TextGrid,
    /// `"X"`, `"O"`, or `"_"` when nobody has won.
    pub won: String,
    /// True when no empty square remains.
    pub full: bool,
}

impl MoveResponse {
    /// Snapshots a board into the wire response.
    pub fn from_board(board: &Board) -> Self {
        Self {
            board: board.to_text(),
            won: board
                .winner()
                .map_or(EMPTY_CODE, Player::code)
                .to_string(),
            full: board.is_full(),
        }
    }
}

/// Runs one move for `player` against a request body.
///
/// This is the whole transport contract: validate the grid, let the engine
/// move, report the result. Won or full boards come back unchanged.
#[instrument(skip(payload))]
pub fn play(
    player: Player,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = payload?;
    let mut board = Board::from_text(&request.board)?;
    debug!(board = %board.to_compact(), "Parsed board");

    match apply_best_move(&mut board, Some(player)) {
        Some(mov) => info!(%mov, status = %board.status(), "Engine moved"),
        None => info!(status = %board.status(), "Board already terminal"),
    }

    Ok(Json(MoveResponse::from_board(&board)))
}

async fn move_x(
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    play(Player::X, payload)
}

async fn move_o(
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    play(Player::O, payload)
}

async fn health() -> &'static str {
    "ok"
}

/// Routes without middleware.
pub fn router() -> Router {
    Router::new()
        .route("/move/x", post(move_x))
        .route("/move/o", post(move_o))
        .route("/health", get(health))
}

/// Routes wrapped with request logging, as served by the binary.
pub fn app() -> Router {
    router().layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
        info!(
            method = %req.method(),
            uri = %req.uri(),
            "Incoming HTTP request"
        );
        req
    }))
}
