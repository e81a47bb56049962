use std::net::SocketAddr;

use axum_server::Handle;
use clap::Parser;
use dotenv::dotenv;
use shikayat_core::Database;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use shikayat_server::{AppState, Config, router};

#[derive(Parser, Debug, Clone)]
#[command(name = "shikayat")]
#[command(author, version, about = "Complaint intake portal")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Path to the SQLite database file (created on first run)
    #[arg(long, default_value = "complaints.db")]
    db_path: String,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("shikayat=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)
        .expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = Config::load()?;

    let db = Database::open(&args.db_path).await?;
    db.migrate().await?;

    let state = AppState::new(&db, &config);
    let app = router(state);

    let addr: SocketAddr = args.bind.parse()?;
    info!("shikayat listening on http://{}", addr);

    let handle = Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
        shutdown_handle.graceful_shutdown(None);
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    info!("Server shut down.");
    Ok(())
}
