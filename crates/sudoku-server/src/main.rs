//! Serves random Sudoku puzzle records over HTTP.
//!
//! One route: `GET /api/grid` returns `{question, solution}` for a puzzle
//! picked at random from a JSON-backed store, or a bare 500 when the store
//! is empty or unreadable.

mod routes;
mod store;

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use store::FileStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sudoku-server", about = "Serves random Sudoku puzzles over HTTP")]
struct Args {
    /// JSON file holding an array of {question, solution} records.
    #[arg(long, default_value = "data/puzzles.json")]
    puzzles: PathBuf,
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let store = FileStore::open(&args.puzzles)
        .with_context(|| format!("reading puzzles from {}", args.puzzles.display()))?;
    tracing::info!(puzzles = store.len(), "loaded puzzle store");

    let app = routes::router(Arc::new(store));
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    tracing::info!(addr = %args.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
