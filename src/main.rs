// Sysview - Systemd Service Status Board
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use sysview::config::{Config, PageChrome};
use sysview::systemd::{SystemctlProbe, UnitCatalog};
use sysview::web::{router, AppState};

// ANSI codes for the fatal configuration banner
const RESET_COLOUR: &str = "\x1b[0m";
const TEXT_BOLD_WHITE: &str = "\x1b[1;37m";
const BG_RED: &str = "\x1b[41m";

#[derive(Parser, Debug)]
#[command(name = "sysview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "sysview=debug" } else { "sysview=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match Config::load(cli.config.map(PathBuf::from)) {
        Ok(config) => config,
        Err(e) => invalid_config(&e.to_string()),
    };

    let chrome = match PageChrome::load(&config.html_dir) {
        Ok(chrome) => chrome,
        Err(e) => invalid_config(&e.to_string()),
    };

    run_server(config, chrome).await
}

async fn run_server(config: Config, chrome: PageChrome) -> Result<()> {
    let state = AppState {
        catalog: Arc::new(UnitCatalog::new(config.unit_dir.clone())),
        probe: Arc::new(SystemctlProbe),
        chrome: Arc::new(chrome),
    };
    let app = router(state);

    let socket = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&socket)
        .await
        .with_context(|| format!("Failed to bind to {}", socket))?;

    tracing::info!("Sysview is running on {}", socket);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("Server error")?;

    Ok(())
}

fn clear_screen() {
    print!("\x1b[H\x1b[2J");
}

/// Draw a box of squares around a console message.
fn message_box(bg_colour: &str, message_colour: &str, message: &str) {
    let top_bottom = " \u{25a1}".repeat(message.len() / 2 + 6);
    let inbetween = " ".repeat(message.len() + 8);
    println!("{}{}", bg_colour, message_colour);
    println!("{} ", top_bottom);
    println!(" \u{25a1}{}\u{25a1} ", inbetween);
    println!(" \u{25a1}    {}    \u{25a1} ", message);
    println!(" \u{25a1}{}\u{25a1} ", inbetween);
    println!("{} ", top_bottom);
    print!("{}", RESET_COLOUR);
}

/// Fatal configuration error: banner on the console, then exit.
///
/// Only the process console sees this; configuration problems are never
/// reported over HTTP.
fn invalid_config(message: &str) -> ! {
    clear_screen();
    message_box(BG_RED, TEXT_BOLD_WHITE, message);
    println!();
    std::process::exit(1);
}
