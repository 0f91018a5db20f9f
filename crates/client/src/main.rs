//! carhub-client CLI entry point.

use carhub_client::cli::{Cli, Commands, OutputFormat};
use carhub_client::client::reviews::ListReviewsQuery;
use carhub_client::client::CarHubClient;
use carhub_client::output::{format_output, pretty};
use carhub_client::SentimentClient;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carhub_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = CarHubClient::new(&cli.base_url);

    match cli.command {
        Commands::Dealers(dealers_cmd) => {
            use carhub_client::cli::dealers::DealersAction;
            match dealers_cmd.action {
                DealersAction::List => {
                    let dealers = client.list_dealers().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&dealers, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_dealers(&dealers)),
                    }
                }
                DealersAction::Get { id } => match client.get_dealer(id).await? {
                    Some(lookup) => match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&lookup, cli.format)),
                        OutputFormat::Pretty => {
                            println!("{}", pretty::format_dealer_lookup(&lookup))
                        }
                    },
                    None => {
                        if !cli.quiet {
                            println!("No dealer found.");
                        }
                    }
                },
            }
        }
        Commands::Reviews(reviews_cmd) => {
            use carhub_client::cli::reviews::ReviewsAction;
            let sentiment = SentimentClient::new(&cli.sentiment_url, &cli.sentiment_api_key)
                .with_concurrency(cli.sentiment_concurrency);
            match reviews_cmd.action {
                ReviewsAction::List { dealer_id } => {
                    let reviews = client
                        .list_reviews(&sentiment, ListReviewsQuery { id: dealer_id })
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&reviews, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_reviews(&reviews)),
                    }
                }
            }
        }
    }

    Ok(())
}
