//! Command-line interface for tictactoe_server.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_minimax::Player;

/// Tic-tac-toe move oracle
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Optimal tic-tac-toe moves over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the engine's move for a board without starting a server
    Solve {
        /// Player to move
        #[arg(long, value_enum)]
        player: PlayerArg,

        /// Board in compact notation, e.g. "XX_/OO_/___"
        board: String,
    },
}

/// Player selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    /// X, the minimizer.
    X,
    /// O, the maximizer.
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["tictactoe_server", "serve"]).unwrap();
        match cli.command {
            Command::Serve { port, host, config } => {
                assert_eq!(port, None);
                assert_eq!(host, None);
                assert_eq!(config, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_solve() {
        let cli =
            Cli::try_parse_from(["tictactoe_server", "solve", "--player", "o", "OO_/XX_/___"])
                .unwrap();
        match cli.command {
            Command::Solve { player, board } => {
                assert_eq!(Player::from(player), Player::O);
                assert_eq!(board, "OO_/XX_/___");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_player_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_server", "solve", "--player", "z", "___/___/___"]).is_err());
    }
}
