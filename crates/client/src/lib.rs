//! carhub_client - Data-access client for the CarHub dealership endpoints.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::sentiment::SentimentClient;
pub use client::CarHubClient;
pub use config::Config;
pub use error::{ClientError, Result};
