mod asset;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod filter;
mod format;
mod logging;
mod market;
mod pagination;
mod render;
mod runtime;
mod session;
mod state;
mod ui;
mod workers;

use crate::config::{Config, Overrides, get_config_path};
use crate::environment::Environment;
use crate::session::list::ListOptions;
use crate::session::{run_headless_mode, run_list, run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live market dashboard
    Start {
        /// Print events and listings to the console instead of drawing the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Base URL of a CoinGecko-compatible API, or `production`
        #[arg(long, value_name = "URL", env = "CRYPTO_TRACKER_API_URL")]
        api_url: Option<Environment>,

        /// Seconds between automatic refreshes
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        refresh_secs: Option<u64>,

        /// Paint the dashboard background
        #[arg(long, action = ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Fetch the market listing once and print one page
    List {
        /// Only show assets whose name or symbol contains TERM (case-insensitive)
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Page to print, starting at 1
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        page: u64,

        /// Base URL of a CoinGecko-compatible API, or `production`
        #[arg(long, value_name = "URL", env = "CRYPTO_TRACKER_API_URL")]
        api_url: Option<Environment>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = load_config();
    let color = std::io::stdout().is_terminal();

    match args.command {
        Command::Start {
            headless,
            api_url,
            refresh_secs,
            with_background,
        } => {
            let settings = config.resolve(Overrides {
                environment: api_url,
                refresh_interval_secs: refresh_secs,
                with_background_color: with_background,
            })?;

            // The dashboard owns the terminal, so only console modes log to stderr.
            if headless {
                logging::init_console_logger();
            }

            let session = setup_session(settings.environment, settings.refresh_interval)?;
            if headless {
                run_headless_mode(session, color).await
            } else {
                run_tui_mode(session, settings.with_background_color).await
            }
        }
        Command::List {
            search,
            page,
            api_url,
        } => {
            logging::init_console_logger();
            let settings = config.resolve(Overrides {
                environment: api_url,
                ..Overrides::default()
            })?;

            let options = ListOptions {
                search,
                page: page as usize,
            };
            if let Err(e) = run_list(settings.environment, options, color).await {
                crate::print_cmd_error!("Failed to fetch market data", &e.to_string());
                return Err(e.into());
            }
            Ok(())
        }
    }
}

/// Reads the optional config file. A missing or unreadable file means defaults.
fn load_config() -> Config {
    let config_path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            log::debug!("No config path: {}", e);
            return Config::default();
        }
    };

    match Config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            crate::print_cmd_warn!(
                "Config",
                "Ignoring {}: {}",
                config_path.display(),
                e
            );
            Config::default()
        }
    }
}
