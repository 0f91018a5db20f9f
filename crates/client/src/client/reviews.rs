//! Review API operations.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::sentiment::SentimentClient;
use super::CarHubClient;
use crate::error::{ClientError, Result};
use carhub_core::serde::{
    deserialize_optional_date, deserialize_optional_string, deserialize_optional_year,
};
use carhub_core::{Review, Sentiment};

/// Query parameters for listing reviews.
#[derive(Debug, Default, Serialize)]
pub struct ListReviewsQuery {
    /// Dealer id filter; omitted from the request when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// Review endpoint response: `{"data": {"docs": [...]}}`.
#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    data: Option<ReviewsData>,
}

#[derive(Debug, Default, Deserialize)]
struct ReviewsData {
    #[serde(default)]
    docs: Vec<ReviewDoc>,
}

/// A review document as served by the review endpoint, before sentiment
/// annotation.
#[derive(Debug, Deserialize)]
struct ReviewDoc {
    id: u64,
    dealership: u64,
    name: String,
    review: String,
    purchase: bool,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    car_make: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    car_model: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_year")]
    car_year: Option<i32>,
}

impl ReviewDoc {
    fn into_review(self, sentiment: Sentiment) -> Review {
        Review {
            id: self.id,
            dealership: self.dealership,
            name: self.name,
            review: self.review,
            purchase: self.purchase,
            purchase_date: self.purchase_date,
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year,
            sentiment,
        }
    }
}

impl CarHubClient {
    /// List reviews, optionally filtered by dealer id, each annotated with
    /// the sentiment of its text.
    ///
    /// The `id` query parameter is sent iff a dealer id was supplied.
    /// Sentiment calls are dispatched concurrently up to the sentiment
    /// client's limit, preserving review order; a failed call fails the
    /// whole fetch with a `Sentiment` error.
    pub async fn list_reviews(
        &self,
        sentiment: &SentimentClient,
        query: ListReviewsQuery,
    ) -> Result<Vec<Review>> {
        let response: ReviewsResponse = self.get_json("/api/reviews", &query).await?;
        let docs = response.data.unwrap_or_default().docs;

        debug!(count = docs.len(), "annotating reviews with sentiment");

        stream::iter(docs.into_iter().map(|doc| async move {
            let label = sentiment
                .analyze(&doc.review)
                .await
                .map_err(|err| ClientError::Sentiment(Box::new(err)))?;
            Ok::<Review, ClientError>(doc.into_review(label))
        }))
        .buffered(sentiment.concurrency())
        .try_collect()
        .await
    }
}
