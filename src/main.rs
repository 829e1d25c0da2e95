use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nba::api::Client;
use nba::config;
use nba::state::{SharedData, SharedDataHandle};
use nba::{background, commands, tui};

// Channel Constants
/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nba")]
#[command(about = "NBA scores on a map of the US", long_about = "NBA scores on a map of the US\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display scores for a date
    Scores {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only games currently in progress
        #[arg(short, long)]
        live: bool,
    },
    /// Display league standings
    Standings,
    /// Display boxscore for a specific game
    Boxscore {
        /// Game ID (e.g., 0022500123)
        game_id: String,
    },
    /// Display current market odds
    Odds,
    /// Display current configuration
    Config,
}

fn create_client(config: &config::Config) -> Client {
    match Client::new(config.service_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create data-service client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("service_url: {}", cfg.service_url);
    println!("time_format: {}", cfg.time_format);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("highlight_fg: {:?}", cfg.theme.highlight_fg);
    println!("live_fg: {:?}", cfg.theme.live_fg);
    println!("crunch_fg: {:?}", cfg.theme.crunch_fg);
    println!("map_fg: {:?}", cfg.theme.map_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode with background data fetching
async fn run_tui_mode(config: config::Config) -> Result<(), std::io::Error> {
    let shared: SharedDataHandle = Arc::new(RwLock::new(SharedData {
        config: config.clone(),
        ..Default::default()
    }));

    // Create channel for manual refresh triggers
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);

    // Spawn background task to fetch data
    let bg_client = create_client(&config);
    let shared_clone = Arc::clone(&shared);
    let refresh_interval = config.refresh_interval as u64;
    let poller = tokio::spawn(async move {
        background::fetch_data_loop(bg_client, shared_clone, refresh_interval, refresh_rx).await;
    });

    let result = tui::run(shared, refresh_tx).await;

    // The poll task must not outlive the view
    poller.abort();

    result
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &Client,
    config: &config::Config,
    command: Commands,
) -> anyhow::Result<()> {
    let display = config.display();
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Scores { date, live } => {
            commands::scores::run(client, date, live, &display).await
        }
        Commands::Standings => commands::standings::run(client, &display).await,
        Commands::Boxscore { game_id } => {
            commands::boxscore::run(client, game_id, &display).await
        }
        Commands::Odds => commands::odds::run(client, &display).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    if cli.command.is_none() {
        if let Err(e) = run_tui_mode(config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let command = cli.command.unwrap();

    // Handle Config command separately (doesn't need a client)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    // Create client and execute command
    let client = create_client(&config);
    if let Err(e) = execute_command(&client, &config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
