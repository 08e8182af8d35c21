mod analysis;
mod config;
mod consts;
mod dashboard;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod pretty;
mod render;
mod session;
mod ui;

use crate::analysis::{AnalysisApi, AnalysisClient, Interval};
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::pretty::{handle_cmd_error, print_cmd_error, print_cmd_info};
use crate::session::{HeadlessOptions, run_headless_mode, run_tui_mode};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Stock analysis dashboard
struct Args {
    /// Base URL of the analysis API (overrides the config file)
    #[arg(long, global = true, env = "DASHBOARD_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Ticker to analyze as soon as the dashboard opens
        #[arg(long, value_name = "TICKER")]
        ticker: Option<String>,

        /// Candle interval (1m, 5m, 15m, 30m, 1h, 1d, 1wk, 1mo)
        #[arg(long, value_name = "INTERVAL")]
        interval: Option<Interval>,

        /// Paint a dark background behind the dashboard
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Analyze one ticker and print the result
    Analyze {
        /// Ticker symbol, e.g. AAPL
        #[arg(long, value_name = "TICKER")]
        ticker: String,

        /// Candle interval (1m, 5m, 15m, 30m, 1h, 1d, 1wk, 1mo)
        #[arg(long, value_name = "INTERVAL")]
        interval: Option<Interval>,

        /// Write the predictions panel as an HTML fragment
        #[arg(long, value_name = "PATH")]
        html_out: Option<PathBuf>,

        /// Write the chart figure as JSON
        #[arg(long, value_name = "PATH")]
        chart_out: Option<PathBuf>,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Delete the saved configuration
    Reset,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the saved configuration and the resolved API URL
    Show,
    /// Save the analysis API base URL
    SetApiUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Save the interval preselected by the dashboard
    SetInterval {
        #[arg(value_name = "INTERVAL")]
        interval: Interval,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let dashboard_environment_str = std::env::var("DASHBOARD_ENVIRONMENT").unwrap_or_default();
    let fallback = dashboard_environment_str
        .parse::<Environment>()
        .unwrap_or_default();

    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            ticker,
            interval,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let environment =
                Environment::resolve(args.api_url.as_deref(), config.api_url.as_deref(), fallback);
            let api: Arc<dyn AnalysisApi> = Arc::new(AnalysisClient::new(environment)?);
            let ui_config = UIConfig::new(
                with_background,
                ticker,
                interval.unwrap_or(config.default_interval),
            );
            run_tui_mode(api, ui_config).await
        }
        Command::Analyze {
            ticker,
            interval,
            html_out,
            chart_out,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let environment =
                Environment::resolve(args.api_url.as_deref(), config.api_url.as_deref(), fallback);
            let client = AnalysisClient::new(environment)?;
            let options = HeadlessOptions {
                ticker,
                interval: interval.unwrap_or(config.default_interval),
                html_out,
                chart_out,
            };
            match run_headless_mode(&client, options).await {
                Ok(()) => Ok(()),
                Err(e) => Err(handle_cmd_error!(e, "Analysis failed").into()),
            }
        }
        Command::Config { action } => {
            let mut config = Config::load_or_default(&config_path)?;
            match action {
                ConfigAction::Show => {
                    let environment = Environment::resolve(
                        args.api_url.as_deref(),
                        config.api_url.as_deref(),
                        fallback,
                    );
                    print_cmd_info!(
                        "Configuration",
                        "file: {}\napi_url: {}\ndefault_interval: {}\nresolved: {:?}",
                        config_path.display(),
                        config.api_url.as_deref().unwrap_or("(not set)"),
                        config.default_interval,
                        environment
                    );
                    Ok(())
                }
                ConfigAction::SetApiUrl { url } => {
                    let Ok(environment) = url.parse::<Environment>() else {
                        let err_msg = format!(
                            "Invalid API URL: {}. It should be `local` or start with http:// or https://",
                            url
                        );
                        print_cmd_error!("Invalid API URL");
                        return Err(Box::from(err_msg));
                    };
                    // `local` is the built-in fallback, so it is stored as "no URL"
                    config.api_url = match environment {
                        Environment::Local => None,
                        Environment::Custom { api_url } => Some(api_url),
                    };
                    config
                        .save(&config_path)
                        .map_err(|e| format!("Failed to save config: {}", e))?;
                    println!(
                        "Saved API URL: {}",
                        config.api_url.as_deref().unwrap_or("(local)")
                    );
                    Ok(())
                }
                ConfigAction::SetInterval { interval } => {
                    config.default_interval = interval;
                    config
                        .save(&config_path)
                        .map_err(|e| format!("Failed to save config: {}", e))?;
                    println!("Saved default interval: {}", interval);
                    Ok(())
                }
            }
        }
        Command::Reset => {
            println!("Clearing dashboard configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
