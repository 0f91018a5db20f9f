//! Dealer API operations.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CarHubClient;
use crate::error::Result;
use carhub_core::Dealer;

/// Query parameters for dealer lookups.
#[derive(Debug, Default, Serialize)]
pub struct DealerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// Envelope around a dealer document as stored in the listing endpoint.
///
/// The upstream store returns `{"doc": {...}}` rows; `doc` may be missing
/// or incomplete for hand-edited records.
#[derive(Debug, Deserialize)]
struct DealerEnvelope {
    #[serde(default)]
    doc: Option<serde_json::Value>,
}

/// Container for a single-dealer lookup, serializing as `{"dealer": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealerLookup {
    pub dealer: Dealer,
}

impl CarHubClient {
    /// List all dealers from the dealer-listing endpoint.
    ///
    /// Rows whose `doc` object is missing required fields are skipped with a
    /// warning; an empty or null result yields an empty vec.
    pub async fn list_dealers(&self) -> Result<Vec<Dealer>> {
        let rows: Option<Vec<DealerEnvelope>> =
            self.get_json("/api/dealerships", &DealerQuery::default()).await?;

        let rows = rows.unwrap_or_default();
        let mut dealers = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(doc) = row.doc else {
                warn!("dealer row has no doc object, skipping");
                continue;
            };
            match serde_json::from_value::<Dealer>(doc) {
                Ok(dealer) => dealers.push(dealer),
                Err(err) => warn!(error = %err, "dealer doc is incomplete, skipping"),
            }
        }
        Ok(dealers)
    }

    /// Look up a single dealer from the dealership-lookup endpoint,
    /// optionally filtered by dealer id.
    ///
    /// The endpoint returns a JSON array; the first element is materialized.
    /// An empty array yields `None`.
    pub async fn get_dealer(&self, dealer_id: Option<u64>) -> Result<Option<DealerLookup>> {
        let dealers: Vec<Dealer> = self
            .get_json("/api/dealership", &DealerQuery { id: dealer_id })
            .await?;

        Ok(dealers.into_iter().next().map(|dealer| DealerLookup { dealer }))
    }
}
