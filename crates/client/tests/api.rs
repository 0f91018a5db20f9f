//! Integration tests against throwaway local HTTP servers.
//!
//! The dealership endpoints and the sentiment service are both stood up as
//! axum routers bound to `127.0.0.1:0`, so the client is exercised over real
//! sockets without any external dependency.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use carhub_client::client::reviews::ListReviewsQuery;
use carhub_client::{CarHubClient, ClientError, SentimentClient};
use carhub_core::Sentiment;

/// Bind a router on an ephemeral port and return its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn dealer_doc(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "address": "3200 SW Topeka Blvd",
        "city": "Topeka",
        "full_name": name,
        "short_name": name,
        "st": "KS",
        "zip": "66611",
        "lat": 39.0158,
        "long": -95.6938
    })
}

/// Sentiment mock: requires basic auth, labels by keyword.
fn sentiment_app() -> Router {
    Router::new().route(
        "/v1/analyze",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.starts_with("Basic "))
                .unwrap_or(false);
            if !authorized {
                return (StatusCode::UNAUTHORIZED, Json(json!({"error": "no auth"})));
            }

            let text = body["text"].as_str().unwrap_or_default().to_lowercase();
            let label = if text.contains("great") {
                "positive"
            } else if text.contains("terrible") {
                "negative"
            } else {
                "neutral"
            };
            (
                StatusCode::OK,
                Json(json!({"sentiment": {"document": {"label": label, "score": 0.9}}})),
            )
        }),
    )
}

#[tokio::test]
async fn test_list_dealers_maps_all_rows() {
    let app = Router::new().route(
        "/api/dealerships",
        get(|| async {
            Json(json!([
                {"doc": dealer_doc(1, "Holdlamis")},
                {"doc": dealer_doc(2, "Temp")}
            ]))
        }),
    );
    let client = CarHubClient::new(spawn(app).await);

    let dealers = client.list_dealers().await.unwrap();
    assert_eq!(dealers.len(), 2);
    assert_eq!(dealers[0].id, 1);
    assert_eq!(dealers[0].full_name, "Holdlamis");
    assert_eq!(dealers[0].city, "Topeka");
    assert_eq!(dealers[0].st, "KS");
    assert_eq!(dealers[0].zip, "66611");
    assert_eq!(dealers[0].lat, 39.0158);
    assert_eq!(dealers[0].long, -95.6938);
    assert_eq!(dealers[1].id, 2);
}

#[tokio::test]
async fn test_list_dealers_empty_array() {
    let app = Router::new().route("/api/dealerships", get(|| async { Json(json!([])) }));
    let client = CarHubClient::new(spawn(app).await);

    let dealers = client.list_dealers().await.unwrap();
    assert!(dealers.is_empty());
}

#[tokio::test]
async fn test_list_dealers_null_body_is_empty() {
    let app = Router::new().route("/api/dealerships", get(|| async { Json(json!(null)) }));
    let client = CarHubClient::new(spawn(app).await);

    let dealers = client.list_dealers().await.unwrap();
    assert!(dealers.is_empty());
}

#[tokio::test]
async fn test_list_dealers_skips_incomplete_docs() {
    let app = Router::new().route(
        "/api/dealerships",
        get(|| async {
            Json(json!([
                {"doc": dealer_doc(1, "Holdlamis")},
                {"doc": {"id": 2, "city": "Nowhere"}},
                {"key": "row-without-doc"}
            ]))
        }),
    );
    let client = CarHubClient::new(spawn(app).await);

    let dealers = client.list_dealers().await.unwrap();
    assert_eq!(dealers.len(), 1);
    assert_eq!(dealers[0].id, 1);
}

#[tokio::test]
async fn test_get_dealer_wraps_first_element() {
    let app = Router::new().route(
        "/api/dealership",
        get(|| async { Json(json!([dealer_doc(7, "Frosties"), dealer_doc(8, "Other")])) }),
    );
    let client = CarHubClient::new(spawn(app).await);

    let lookup = client.get_dealer(Some(7)).await.unwrap().unwrap();
    assert_eq!(lookup.dealer.id, 7);
    assert_eq!(lookup.dealer.full_name, "Frosties");

    let value = serde_json::to_value(&lookup).unwrap();
    assert_eq!(value["dealer"]["id"], 7);
}

#[tokio::test]
async fn test_get_dealer_empty_array_is_none() {
    let app = Router::new().route("/api/dealership", get(|| async { Json(json!([])) }));
    let client = CarHubClient::new(spawn(app).await);

    assert!(client.get_dealer(Some(99)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_dealer_forwards_id_parameter() {
    let seen: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();
    let app = Router::new().route(
        "/api/dealership",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(params);
                Json(json!([dealer_doc(7, "Frosties")]))
            }
        }),
    );
    let client = CarHubClient::new(spawn(app).await);

    client.get_dealer(Some(7)).await.unwrap();
    client.get_dealer(None).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].get("id"), Some(&"7".to_string()));
    assert!(!seen[1].contains_key("id"));
}

#[tokio::test]
async fn test_list_reviews_annotates_each_review() {
    let app = Router::new().route(
        "/api/reviews",
        get(|| async {
            Json(json!({"data": {"docs": [
                {
                    "id": 1, "dealership": 15, "name": "Berta",
                    "review": "Great service!", "purchase": true,
                    "purchase_date": "02/16/2021",
                    "car_make": "Audi", "car_model": "A6", "car_year": 2015
                },
                {
                    "id": 2, "dealership": 15, "name": "Sam",
                    "review": "Terrible experience", "purchase": false
                },
                {
                    "id": 3, "dealership": 15, "name": "Kim",
                    "review": "It was okay", "purchase": false
                }
            ]}}))
        }),
    );
    let client = CarHubClient::new(spawn(app).await);
    let sentiment = SentimentClient::new(spawn(sentiment_app()).await, "test-key");

    let reviews = client
        .list_reviews(&sentiment, ListReviewsQuery { id: Some(15) })
        .await
        .unwrap();

    assert_eq!(reviews.len(), 3);
    // Order preserved despite concurrent dispatch
    assert_eq!(reviews[0].id, 1);
    assert_eq!(reviews[0].sentiment, Sentiment::Positive);
    assert_eq!(reviews[0].car_year, Some(2015));
    assert_eq!(reviews[1].sentiment, Sentiment::Negative);
    assert_eq!(reviews[2].sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn test_list_reviews_forwards_dealer_filter() {
    let seen: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();
    let app = Router::new().route(
        "/api/reviews",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(params);
                Json(json!({"data": {"docs": []}}))
            }
        }),
    );
    let client = CarHubClient::new(spawn(app).await);
    let sentiment = SentimentClient::new(spawn(sentiment_app()).await, "test-key");

    client
        .list_reviews(&sentiment, ListReviewsQuery { id: Some(15) })
        .await
        .unwrap();
    client
        .list_reviews(&sentiment, ListReviewsQuery::default())
        .await
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].get("id"), Some(&"15".to_string()));
    assert!(!seen[1].contains_key("id"));
}

#[tokio::test]
async fn test_list_reviews_sentiment_failure_is_typed() {
    let app = Router::new().route(
        "/api/reviews",
        get(|| async {
            Json(json!({"data": {"docs": [
                {"id": 1, "dealership": 2, "name": "Sam", "review": "Hi", "purchase": false}
            ]}}))
        }),
    );
    let broken_sentiment = Router::new().route(
        "/v1/analyze",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = CarHubClient::new(spawn(app).await);
    let sentiment = SentimentClient::new(spawn(broken_sentiment).await, "test-key");

    let err = client
        .list_reviews(&sentiment, ListReviewsQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_sentiment());
}

#[tokio::test]
async fn test_unknown_sentiment_label_is_invalid_response() {
    let odd_sentiment = Router::new().route(
        "/v1/analyze",
        post(|| async { Json(json!({"sentiment": {"document": {"label": "mixed"}}})) }),
    );
    let sentiment = SentimentClient::new(spawn(odd_sentiment).await, "test-key");

    let err = sentiment.analyze("hmm").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_non_2xx_status_is_server_error() {
    let app = Router::new().route(
        "/api/dealerships",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db down") }),
    );
    let client = CarHubClient::new(spawn(app).await);

    let err = client.list_dealers().await.unwrap_err();
    match err {
        ClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let app = Router::new().route("/api/dealerships", get(|| async { "not json" }));
    let client = CarHubClient::new(spawn(app).await);

    let err = client.list_dealers().await.unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[tokio::test]
async fn test_post_returns_raw_response() {
    let app = Router::new().route(
        "/api/reviews",
        post(|Json(body): Json<Value>| async move {
            (StatusCode::CREATED, Json(json!({"echo": body})))
        }),
    );
    let client = CarHubClient::new(spawn(app).await);

    let response = client
        .post_json("/api/reviews", &json!({"review": "Great car"}))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(body["echo"]["review"], "Great car");
}
