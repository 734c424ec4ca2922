//! Clinic query service entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clinic_api::api::{create_router, AppState};
use clinic_api::config::Config;
use clinic_api::metrics;
use clinic_api::store::{ClinicStore, MySqlStore};
use clinic_api::utils::shutdown_signal;
use clinic_api::{AppError, Result};

/// Read-only HTTP API over the patients and providers tables.
#[derive(Parser, Debug)]
#[command(name = "clinic-api")]
#[command(about = "Serve the patients and providers tables as JSON over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP listening port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP listening port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Check that the database is reachable.
    CheckDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("clinic_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config()?,
        Some(Command::CheckDb) => cmd_check_db().await?,
        Some(Command::Serve { port }) => cmd_serve(port.or(args.port)).await?,
        None => cmd_serve(args.port).await?,
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    config.validate().map_err(|e| {
        error!("{}", e);
        e
    })?;

    Ok(config)
}

/// Check configuration validity.
fn cmd_check_config() -> Result<()> {
    println!("======================================================================");
    println!("CLINIC API - CONFIGURATION CHECK");
    println!("======================================================================");

    let config = load_config()?;

    println!("Configuration Summary:");
    println!("  Database Host: {}:{}", config.db_host, config.db_port);
    println!(
        "  Database User: {}",
        config.db_username.as_deref().unwrap_or("(driver default)")
    );
    println!(
        "  Database Password: {}",
        if config.db_password.is_some() { "present" } else { "not set" }
    );
    println!(
        "  Database Name: {}",
        config.db_name.as_deref().unwrap_or("(none)")
    );
    println!("  Pool Size: {}", config.db_max_connections);
    println!("  HTTP Port: {}", config.port);
    match config.metrics_port {
        Some(port) => println!("  Metrics Port: {}", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Check that the database is reachable.
async fn cmd_check_db() -> Result<()> {
    let config = load_config()?;
    let store = MySqlStore::connect_lazy(&config);

    match store.ping().await {
        Ok(()) => {
            println!("Connected to the MySQL database at {}:{}", config.db_host, config.db_port);
            Ok(())
        }
        Err(e) => {
            println!("Error connecting to the database: {}", e);
            Err(AppError::Store(e))
        }
    }
}

/// Run the HTTP server.
async fn cmd_serve(port_override: Option<u16>) -> Result<()> {
    info!("Loading configuration...");
    let mut config = load_config()?;

    if let Some(port) = port_override {
        config.port = port;
        config.validate()?;
    }

    // The recorder must be installed before metrics are described.
    if let Some(metrics_port) = config.metrics_port {
        metrics::install_exporter(metrics_port)?;
    }
    metrics::init_metrics();

    let store: Arc<dyn ClinicStore> = Arc::new(MySqlStore::connect_lazy(&config));

    // A failed probe is not fatal: data endpoints report it per request.
    match store.ping().await {
        Ok(()) => info!("Connected to the MySQL database"),
        Err(e) => error!("Error connecting to the database: {}", e),
    }

    let router = create_router(AppState::from_shared(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on http://localhost:{}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
