//! Dealer CLI commands.

use clap::{Parser, Subcommand};

/// Dealer retrieval commands.
#[derive(Debug, Parser)]
pub struct DealersCommand {
    #[command(subcommand)]
    pub action: DealersAction,
}

/// Available dealer actions.
#[derive(Debug, Subcommand)]
pub enum DealersAction {
    /// List all dealers.
    List,
    /// Look up a single dealer.
    Get {
        /// Dealer id. Without it, the lookup endpoint picks its first row.
        #[arg(long)]
        id: Option<u64>,
    },
}
