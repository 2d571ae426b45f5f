//! freespace CLI
//!
//! Fetches campus location busyness and prints it as a list.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use freespace::{
    error::{AppError, Result},
    models::{Config, DisplayRow, classify},
    pipeline::{ScreenState, StatusFeed, StatusScreen},
    services::{HttpStatusSource, LocationRegistry},
};

/// freespace - Campus location busyness
#[derive(Parser, Debug)]
#[command(name = "freespace", version, about = "Campus location busyness")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "freespace.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch current status and print one row per location
    Status {
        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the tier for an average report value
    Classify {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// List known locations
    Locations,

    /// Validate configuration file
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, configured: &str) {
    let level = if verbose { "debug" } else { configured };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_rows(rows: &[DisplayRow]) {
    let width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    for row in rows {
        println!(
            "{:>2}  {:<width$}  {:<14}  max capacity: {}",
            row.location_id, row.name, row.label, row.max_capacity
        );
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = cli.config.exists().then(|| Config::load(&cli.config));

    let level = match &loaded {
        Some(Ok(config)) => config.logging.level.as_str(),
        _ => "info",
    };
    init_logging(cli.verbose, level);

    let config = match loaded {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::error!("Failed to load config from {}: {}", cli.config.display(), e);
            return Err(AppError::config(format!(
                "{}: {}",
                cli.config.display(),
                e
            )));
        }
        None => {
            log::debug!("No config at {}, using defaults", cli.config.display());
            Config::default()
        }
    };

    let registry = Arc::new(LocationRegistry::from_config(&config));

    match cli.command {
        Command::Status { json } => {
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            let source = HttpStatusSource::new(&config.client)?;
            let endpoint = source.endpoint().to_string();
            let feed = StatusFeed::new(Box::new(source), Arc::clone(&registry));
            let screen = StatusScreen::new();

            feed.refresh(&Arc::downgrade(&screen)).await?;

            let ScreenState::Ready {
                fetched_at,
                assembly,
            } = screen.state()
            else {
                return Err(AppError::validation("status screen has no rows after refresh"));
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&assembly.rows)?);
            } else {
                print_rows(&assembly.rows);
            }

            log::info!(
                "{} locations from {} as of {}",
                assembly.rows.len(),
                endpoint,
                fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            for failure in &assembly.failures {
                log::warn!(
                    "Skipped record #{}: {}",
                    failure.position,
                    failure.error
                );
            }
        }

        Command::Classify { value } => {
            let tier = classify(value);
            println!("{} ({})", tier.label(), tier.style());
        }

        Command::Locations => {
            for entry in registry.iter() {
                println!("{:>2}  {}  [{}]", entry.id, entry.name, entry.image_ref);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} locations, endpoint {})",
                registry.len(),
                config.client.endpoint
            );
        }
    }

    Ok(())
}
