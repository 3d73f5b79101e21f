use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracker::api::{create_router, AppState};
use tracker::config::Config;
use tracker::triplestore::{SparqlHttpClient, Triplestore};

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Provenance lookups against a preservation repository's triplestore")]
struct Args {
    /// Bind host (overrides TRACKER_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides TRACKER_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// SPARQL query endpoint (overrides TRIPLESTORE_URL)
    #[arg(long)]
    triplestore_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.triplestore_url {
        config.triplestore.url = url;
    }
    config.validate()?;

    tracing::info!(
        "Using triplestore {} (repository root {})",
        config.triplestore.url,
        config.repository.root
    );
    let client = SparqlHttpClient::new(&config.triplestore)?;
    let triplestore: Arc<dyn Triplestore> = Arc::new(client);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, triplestore);
    let app = create_router(state);

    tracing::info!("Tracker starting on http://{}", addr);
    tracing::info!("  Item lookup:  http://{}/item/{{id}}", addr);
    tracing::info!("  Health check: http://{}/health", addr);
    tracing::info!("  API docs:     http://{}/docs", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server...");
}
