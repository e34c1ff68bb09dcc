//! ISS tracker CLI
//!
//! Usage:
//!   iss-tracker                      # Serve the dashboard with defaults
//!   iss-tracker serve -p 8080        # Serve on a specific port
//!   iss-tracker serve -c cfg.yaml    # Serve with a YAML config file
//!   iss-tracker fetch                # One-shot: print the current position

use argh::FromArgs;
use iss_tracker::http_server::{run_http_server, AppState};
use iss_tracker::tracker::SharedState;
use iss_tracker::{run_tracker, IssClient, PositionSource, TrackerConfig, TrackerState};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// ISS Real-Time Tracking System
#[derive(FromArgs)]
struct Args {
    /// show version information
    #[argh(switch, short = 'V')]
    version: bool,

    #[argh(subcommand)]
    command: Option<Command>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Serve(ServeArgs),
    Fetch(FetchArgs),
}

/// Run the refresh loop and the dashboard server
#[derive(FromArgs, Default)]
#[argh(subcommand, name = "serve")]
struct ServeArgs {
    /// HTTP listen port (default: 8080)
    #[argh(option, short = 'p')]
    port: Option<u16>,

    /// refresh interval in milliseconds (default: 5000)
    #[argh(option, short = 'i')]
    interval_ms: Option<u64>,

    /// position API URL (default: open-notify iss-now.json)
    #[argh(option, short = 'u')]
    api_url: Option<String>,

    /// path to a YAML config file
    #[argh(option, short = 'c')]
    config: Option<String>,
}

/// Fetch the current position once and print it
#[derive(FromArgs)]
#[argh(subcommand, name = "fetch")]
struct FetchArgs {
    /// position API URL (default: open-notify iss-now.json)
    #[argh(option, short = 'u')]
    api_url: Option<String>,
}

fn load_config(args: &ServeArgs) -> Result<TrackerConfig, Box<dyn std::error::Error + Send + Sync>> {
    let mut config = match &args.config {
        Some(path) => TrackerConfig::from_file(path)?,
        None => TrackerConfig::default(),
    };

    // CLI flags override the file.
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.refresh_interval_ms = interval_ms;
    }
    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }

    Ok(config)
}

async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = load_config(&args)?;

    log::info!(
        "Tracking ISS via {} every {} ms",
        config.api_url,
        config.refresh_interval_ms
    );

    let client = IssClient::new(config.api_url.clone())?;
    let state: SharedState = Arc::new(RwLock::new(TrackerState::default()));

    let (shutdown_tx, shutdown_rx) = watch::channel(());

    let tracker = tokio::spawn(run_tracker(
        client,
        state.clone(),
        config.refresh_interval_ms,
        shutdown_rx.clone(),
    ));

    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    let port = config.http_port;
    run_http_server(
        AppState {
            tracker: state,
            config,
        },
        port,
        shutdown_rx,
    )
    .await?;

    let _ = tracker.await;
    Ok(())
}

async fn run_fetch(args: FetchArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let url = args
        .api_url
        .unwrap_or_else(|| iss_tracker::DEFAULT_API_URL.to_string());
    let client = IssClient::new(url)?;
    let position = client.fetch_position().await?;
    println!(
        "latitude: {:.4}, longitude: {:.4}",
        position.latitude, position.longitude
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Args = argh::from_env();

    if args.version {
        println!("iss-tracker {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match args.command {
        // No subcommand = serve with defaults.
        None => run_serve(ServeArgs::default()).await,
        Some(Command::Serve(args)) => run_serve(args).await,
        Some(Command::Fetch(args)) => run_fetch(args).await,
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await.expect("failed to install Ctrl+C handler");

    log::info!("Shutdown signal received");
}
