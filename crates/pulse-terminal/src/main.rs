//! MarketPulse Terminal: stock analysis dashboard and CLI.

mod app;
mod commands;
mod event;
mod logging;
mod report;
mod terminal;
mod ui;
mod widgets;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pulse_client::{AnalysisProvider, ClientConfig, PulseClient};
use tracing::info;

use app::{App, DEFAULT_TICKER};
use logging::LogTarget;

#[derive(Parser)]
#[command(name = "marketpulse")]
#[command(version, about = "Stock analysis dashboard for the MarketPulse API", long_about = None)]
struct Cli {
    /// Base URL of the analysis API [env: MARKETPULSE_API_URL, default: http://localhost:8000]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds [env: MARKETPULSE_API_TIMEOUT_SECS]; waits indefinitely when unset
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Terminal {
        /// Ticker to analyze on startup
        ticker: Option<String>,
    },

    /// Analyze one ticker and print the result
    Analyze {
        ticker: String,

        /// Print the adapted result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show API health and cache statistics
    Health,

    /// List the most analyzed tickers
    Trending {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Quick results for up to 10 tickers
    Batch {
        #[arg(required = true)]
        tickers: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Terminal { ticker: None });

    let target = match command {
        Commands::Terminal { .. } => LogTarget::dashboard_file(),
        _ => LogTarget::Stderr,
    };
    logging::init(target)?;

    let config = client_config(cli.api_url, cli.timeout);
    let client = PulseClient::new(config)?;
    info!(api_url = %client.base_url(), "MarketPulse starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::Terminal { ticker } => {
            let autostart = ticker.is_some();
            let api_url = client.base_url().to_string();
            let provider: Arc<dyn AnalysisProvider> = Arc::new(client);
            let app = App::new(api_url, provider.backend_name())
                .with_ticker(ticker.as_deref().unwrap_or(DEFAULT_TICKER));
            terminal::run(runtime.handle().clone(), provider, app, autostart)
        }
        Commands::Analyze { ticker, json } => {
            runtime.block_on(commands::analyze(&client, &ticker, json))
        }
        Commands::Health => runtime.block_on(commands::health(&client)),
        Commands::Trending { limit } => runtime.block_on(commands::trending(&client, limit)),
        Commands::Batch { tickers } => runtime.block_on(commands::batch(&client, &tickers)),
    }
}

/// Environment settings with command-line flags taking precedence.
fn client_config(api_url: Option<String>, timeout: Option<u64>) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(url) = api_url {
        config.base_url = url;
    }
    if let Some(secs) = timeout {
        config = config.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["marketpulse", "--api-url", "http://api:8000"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.api_url.as_deref(), Some("http://api:8000"));
    }

    #[test]
    fn test_flags_override_environment() {
        let config = client_config(Some("http://api:9000".into()), Some(15));
        assert_eq!(config.base_url, "http://api:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));

        let config = client_config(Some("http://api:9000".into()), Some(0));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_parses_subcommands() {
        let cli = Cli::try_parse_from(["marketpulse", "analyze", "nvda", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Analyze { ref ticker, json: true }) if ticker == "nvda"
        ));

        let cli = Cli::try_parse_from(["marketpulse", "batch", "AAPL", "MSFT"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Batch { ref tickers }) if tickers.len() == 2));

        assert!(Cli::try_parse_from(["marketpulse", "batch"]).is_err());
    }
}
