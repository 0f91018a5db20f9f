//! Pretty output formatting.

use crate::client::dealers::DealerLookup;
use carhub_core::{Dealer, Review};

/// Format a dealer for display.
pub fn format_dealer(dealer: &Dealer) -> String {
    format!(
        "{} ({})\n  ID: {}\n  Address: {}, {}, {} {}\n  Location: {}, {}",
        dealer.full_name,
        dealer.short_name,
        dealer.id,
        dealer.address,
        dealer.city,
        dealer.st,
        dealer.zip,
        dealer.lat,
        dealer.long
    )
}

/// Format dealers for display.
pub fn format_dealers(dealers: &[Dealer]) -> String {
    if dealers.is_empty() {
        return "No dealers found.".to_string();
    }
    let mut output = format!("DEALERS ({})\n", dealers.len());
    output.push_str(&"-".repeat(40));
    for dealer in dealers {
        output.push_str(&format!("\n{}", format_dealer(dealer)));
        output.push('\n');
    }
    output
}

/// Format a single-dealer lookup for display.
pub fn format_dealer_lookup(lookup: &DealerLookup) -> String {
    format_dealer(&lookup.dealer)
}

/// Format a review for display.
pub fn format_review(review: &Review) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Dealer: {}\n  \"{}\"",
        review.name, review.sentiment, review.id, review.dealership, review.review
    );
    if review.purchase {
        output.push_str("\n  Purchased");
        if let Some(date) = review.purchase_date {
            output.push_str(&format!(": {}", date));
        }
        if let (Some(make), Some(model)) = (&review.car_make, &review.car_model) {
            output.push_str(&format!("\n  Car: {} {}", make, model));
            if let Some(year) = review.car_year {
                output.push_str(&format!(" ({})", year));
            }
        }
    }
    output
}

/// Format reviews for display.
pub fn format_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews found.".to_string();
    }
    let mut output = format!("REVIEWS ({})\n", reviews.len());
    output.push_str(&"-".repeat(40));
    for review in reviews {
        output.push_str(&format!("\n{}", format_review(review)));
        output.push('\n');
    }
    output
}
