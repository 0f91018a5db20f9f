//! Review CLI commands.

use clap::{Parser, Subcommand};

/// Review retrieval commands.
#[derive(Debug, Parser)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub action: ReviewsAction,
}

/// Available review actions.
#[derive(Debug, Subcommand)]
pub enum ReviewsAction {
    /// List reviews, annotated with sentiment.
    List {
        /// Filter by dealer id.
        #[arg(long)]
        dealer_id: Option<u64>,
    },
}
