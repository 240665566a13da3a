//! Gamedex server binary.

use anyhow::{Context, Result};
use clap::Parser;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use gamedex_core::config::AppConfig;
use gamedex_server::{AppState, create_router};
use std::net::SocketAddr;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Plain environment keys accepted for the store settings.
const MONGO_CONNECTION_STRING_VAR: &str = "MongoDB_ConnectionString";
const MONGO_DATABASE_NAME_VAR: &str = "MongoDB_DatabaseName";

/// Gamedex - a game catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "gamedexd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "GAMEDEX_CONFIG",
        default_value = "config/server.toml"
    )]
    config: String,
}

/// Build the configuration sources in precedence order.
///
/// The TOML file is optional. `MongoDB_ConnectionString` and
/// `MongoDB_DatabaseName` override it, and `GAMEDEX_` variables override both.
fn figment(config_path: &Path) -> Figment {
    let mut figment = Figment::new();

    if config_path.exists() {
        tracing::info!(config_path = %config_path.display(), "Loading configuration from file");
        figment = figment.merge(Toml::file(config_path));
    } else {
        tracing::debug!("No config file found at {}", config_path.display());
    }

    let mongo_aliases = Env::raw()
        .only(&[MONGO_CONNECTION_STRING_VAR, MONGO_DATABASE_NAME_VAR])
        .map(|key| {
            if key.as_str().eq_ignore_ascii_case(MONGO_CONNECTION_STRING_VAR) {
                "store.connection_string".into()
            } else if key.as_str().eq_ignore_ascii_case(MONGO_DATABASE_NAME_VAR) {
                "store.database_name".into()
            } else {
                key.as_str().into()
            }
        });

    figment
        .merge(mongo_aliases)
        .merge(Env::prefixed("GAMEDEX_").ignore(&["CONFIG"]).split("__"))
}

/// Load and validate the application configuration.
fn load_config(config_path: &Path) -> Result<AppConfig> {
    let config: AppConfig = figment(config_path)
        .extract()
        .context("failed to load configuration")?;

    config
        .store
        .validate()
        .context("invalid store configuration")?;

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting gamedex v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(Path::new(&args.config))?;

    // Initialize record store
    let store = gamedex_store::from_config(&config.store)
        .await
        .context("failed to initialize record store")?;
    tracing::info!(kind = ?config.store.kind, "Record store initialized");

    // Refuse to serve if the database is unreachable
    store
        .health_check()
        .await
        .context("record store health check failed")?;
    tracing::info!("Record store connectivity verified");

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.server.bind))?;

    let state = AppState::new(config, store);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
