mod db;
mod entities;
mod errors;
mod models;
mod repository;
mod resolve;
mod routes;
mod slug;
mod state;
mod validate;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "TIMESYNC_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind
    #[arg(short, long, env = "TIMESYNC_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Database path
    #[arg(short, long, env = "DATABASE_PATH", default_value = "timesync.db")]
    db_path: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    tracing::info!("Initializing database at {}", args.db_path);
    let db = db::init_pool(&args.db_path)
        .await
        .context("database initialisation failed")?;

    let app = routes::router(AppState::new(db));

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
