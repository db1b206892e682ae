use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use skinquiz::{catalog::Catalog, db::Db, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database holding quiz results.
    #[arg(long, env, default_value = "sqlite://skinquiz.db?mode=rwc")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// JSON question set replacing the built-in one.
    #[arg(short, long, env)]
    questions: Option<PathBuf>,

    /// Mark cookies as `Secure` (serve behind HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=debug,skinquiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let catalog = match &args.questions {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    let db = Db::new(&args.database_url).await?;
    let routes = skinquiz::router(AppState {
        db,
        catalog: Arc::new(catalog),
        secure_cookies: args.secure_cookies,
    });

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("could not listen for shutdown signal: {e}");
    }
    tracing::info!("shutting down");
}
