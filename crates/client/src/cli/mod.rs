//! CLI command definitions.

pub mod dealers;
pub mod reviews;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the CarHub dealership endpoints.
#[derive(Debug, Parser)]
#[command(name = "carhub-client")]
#[command(about = "CLI client for the CarHub dealership endpoints", long_about = None)]
pub struct Cli {
    /// Dealership endpoint base URL.
    #[arg(long, env = "CARHUB_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Sentiment service base URL.
    #[arg(long, env = "SENTIMENT_URL", default_value = "http://localhost:5050")]
    pub sentiment_url: String,

    /// Sentiment service API key.
    #[arg(long, env = "SENTIMENT_API_KEY", default_value = "", hide_env_values = true)]
    pub sentiment_api_key: String,

    /// Maximum in-flight sentiment calls when annotating reviews.
    #[arg(long, env = "SENTIMENT_CONCURRENCY", default_value = "4")]
    pub sentiment_concurrency: usize,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dealer retrieval.
    Dealers(dealers::DealersCommand),
    /// Review retrieval with sentiment annotation.
    Reviews(reviews::ReviewsCommand),
}
