//! HTTP transport for the tic-tac-toe move oracle.
//!
//! Two endpoints take a textual board, let the minimax engine move for the
//! player named by the route, and answer with the updated board:
//!
//! - `POST /move/x`: X moves.
//! - `POST /move/o`: O moves.
//!
//! ```text
//! request:  {"board": [["X","X","_"],["O","O","_"],["_","_","_"]]}
//! response: {"board": [["X","X","X"],["O","O","_"],["_","_","_"]], "won": "X", "full": false}
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;

pub use api::{MoveRequest, MoveResponse, app, play, router};
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
