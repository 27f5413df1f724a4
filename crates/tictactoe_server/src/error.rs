//! Request error types and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::{Display, Error, From};
use tictactoe_minimax::BoardError;
use tracing::warn;

/// Why a move request was rejected.
///
/// Every variant is the caller's fault and maps to `400 Bad Request`.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// The body was not a JSON move request.
    #[display("Malformed request body: {_0}")]
    MalformedBody(JsonRejection),

    /// The board was not a 3x3 grid.
    #[display("Invalid board: {}", _0.kind)]
    InvalidBoard(BoardError),
}

impl ApiError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(error = %self, %status, "Rejecting move request");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
