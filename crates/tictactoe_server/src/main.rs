//! Tic-tac-toe move oracle - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayerArg};
use std::path::PathBuf;
use tictactoe_minimax::{Board, apply_best_move};
use tictactoe_server::{ServerConfig, app};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host, config } => run_http_server(host, port, config).await,
        Command::Solve { player, board } => run_solve(player, &board),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Run the HTTP server
async fn run_http_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?
        .with_env_port(std::env::var("PORT").ok().as_deref())
        .with_overrides(host, port);

    init_tracing(config.log_filter());
    info!(?config, "Starting tic-tac-toe move oracle");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!("Server ready at http://{}/", config.bind_addr());
    info!("Routes: POST /move/x, POST /move/o, GET /health");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

/// Apply one engine move to a compact board and print the result
#[instrument(skip(player))]
fn run_solve(player: PlayerArg, board: &str) -> Result<()> {
    init_tracing("warn");

    let mut board: Board = board.parse().context("Invalid board")?;
    match apply_best_move(&mut board, Some(player.into())) {
        Some(mov) => println!("{mov}"),
        None => println!("No move: board is already terminal"),
    }
    println!("{board}");
    println!("{} ({})", board.to_compact(), board.status());
    Ok(())
}
