//! menu-server CLI
//!
//! `load` ingests a menu export into the database, `check` validates one
//! without writing, `serve` runs the catalog API.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use menu_server::{AppState, Config, DbService, DryRunStore, IngestReport, api, document, logger};

#[derive(Parser)]
#[command(name = "menu-server", version, about = "Menu ingestion and catalog API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a menu XML export in one transaction
    Load {
        /// Path to the XML file
        file: PathBuf,
    },
    /// Validate a menu XML export without touching the database
    Check { file: PathBuf },
    /// Serve the read-only catalog API
    Serve,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(e) = logger::init_logger(&config.log_level, config.is_production()) {
        eprintln!("{e:#}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("menu-server failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Load { file } => {
            let text = read_menu(&file)?;
            let doc = document::parse(&text)?;
            let db = DbService::new(&config.database_url, config.db_max_connections).await?;
            let report = menu_server::load_menu(&db.pool, &doc)
                .await
                .with_context(|| format!("loading {}", file.display()))?;
            print_report(&report)
        }
        Command::Check { file } => {
            let text = read_menu(&file)?;
            let doc = document::parse(&text)?;
            let report = menu_server::ingest_menu(&mut DryRunStore, &doc)
                .await
                .with_context(|| format!("checking {}", file.display()))?;
            print_report(&report)
        }
        Command::Serve => serve(config).await,
    }
}

fn read_menu(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

fn print_report(report: &IngestReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting menu-server (env: {})", config.environment);

    let state = AppState::new(config).await?;
    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("menu-server HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
