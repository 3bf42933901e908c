//! Raffle console
//!
//! Sets up a raffle, sells tickets and runs the lucky draw interactively.

use clap::Parser;
use raffle::config::LogLevel;
use raffle::{ConfigLoader, Currency, Raffle, RaffleConfig, RaffleSession};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raffle")]
#[command(about = "Run a charity raffle from the console", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// What the raffle is raising money for
    #[arg(long)]
    title: Option<String>,

    /// Price of one ticket (prompted for when not set)
    #[arg(long)]
    ticket_price: Option<u64>,

    /// Currency symbol used in prompts and results
    #[arg(long)]
    currency_symbol: Option<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the draw report as JSON once the raffle is over
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut RaffleConfig) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref title) = self.title {
            config.raffle.title = title.clone();
        }
        if let Some(price) = self.ticket_price {
            config.raffle.ticket_price = Some(price);
        }
        if let Some(ref symbol) = self.currency_symbol {
            config.raffle.currency_symbol = symbol.clone();
        }
        if let Some(seed) = self.seed {
            config.draw.seed = Some(seed);
        }
        if let Some(ref level) = self.log_level {
            config.monitoring.log_level = level.parse::<LogLevel>()?;
        }
        config.validate()?;
        Ok(())
    }
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("raffle={}", level.as_filter()).into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(ref path) = args.config {
        loader = loader.with_path(path);
    }
    let mut config = loader.load()?;
    args.apply(&mut config)?;

    init_tracing(config.monitoring.log_level);
    tracing::info!(title = %config.raffle.title, seed = ?config.draw.seed, "starting raffle");

    let raffle = match config.draw.seed {
        Some(seed) => Raffle::with_seed(&config.raffle.title, seed),
        None => Raffle::new(&config.raffle.title),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = RaffleSession::new(raffle, stdin.lock(), stdout.lock())
        .with_currency_symbol(config.raffle.currency_symbol.clone());
    if let Some(price) = config.raffle.ticket_price {
        session = session.with_ticket_price(Currency::new(i64::try_from(price)?)?);
    }

    let result = session.run()?;

    if args.json {
        let report = session.raffle().report(&result);
        println!("{}", report.to_json_pretty()?);
    }

    Ok(())
}
