//! Integration tests for the HTTP adapter.
//!
//! These drive the full router with in-memory adapters, covering status
//! mapping, query defaults and cache headers.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use beerbox_hex::{PricingService, inbound::HttpServer};
use beerbox_repo::MemoryProductRepo;
use beerbox_types::{RateError, RatePair, RateProvider};
use exchange_rates::MemoryRateProvider;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Router over the two sample beers and the sample rate table.
fn sample_app() -> Router {
    app_with_rates(MemoryRateProvider::default())
}

fn app_with_rates<P: RateProvider + 'static>(rates: P) -> Router {
    let service = PricingService::new(MemoryProductRepo::with_sample_data(), rates);
    HttpServer::new(service).router()
}

/// Rate source that always fails with the given error.
struct FailingRates(RateError);

#[async_trait]
impl RateProvider for FailingRates {
    async fn get_rate(&self, _pair: &RatePair) -> Result<f64, RateError> {
        Err(self.0.clone())
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn test_health() {
    let response = sample_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_list_beers_sets_public_cache_headers() {
    let response = sample_app().oneshot(get("/api/beers")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "public, max-age=100"
    );
    assert_eq!(response.headers()[header::VARY], "User-Agent");

    let json = json_body(response).await;
    let beers = json.as_array().unwrap();
    assert_eq!(beers.len(), 2);
    assert_eq!(beers[0]["id"], 1);
    assert_eq!(beers[1]["currency"], "MXN");
}

#[tokio::test]
async fn test_get_beer_sets_private_cache_headers() {
    let response = sample_app().oneshot(get("/api/beers/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "private, max-age=100"
    );
    assert_eq!(response.headers()[header::VARY], "User-Agent");
    assert_eq!(json_body(response).await["price"], 17.5);
}

#[tokio::test]
async fn test_get_beer_not_found() {
    let response = sample_app().oneshot(get("/api/beers/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["error"], "not found beer with id '99'");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    for uri in ["/api/beers/abc", "/api/beers/abc/boxprice"] {
        let response = sample_app().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_create_beer() {
    let app = sample_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/beers",
            serde_json::json!({
                "name": "Pacifico",
                "brewery": "Cervecería del Pacífico",
                "country": "Mexico",
                "price": 20.0,
                "currency": "MXN"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["id"], 3);
    assert_eq!(created["name"], "Pacifico");

    let response = app.oneshot(get("/api/beers/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_beer_accepts_capitalized_fields() {
    let response = sample_app()
        .oneshot(post_json(
            "/api/beers",
            serde_json::json!({ "Name": "Tecate", "Price": 1.0, "Currency": "USD" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_beer_validation_error() {
    let response = sample_app()
        .oneshot(post_json(
            "/api/beers",
            serde_json::json!({ "name": "", "price": 1.0, "currency": "USD" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["error"], "the name of beer cannot be empty");
}

#[tokio::test]
async fn test_create_beer_with_unknown_currency_is_not_found() {
    let response = sample_app()
        .oneshot(post_json(
            "/api/beers",
            serde_json::json!({ "name": "Kross", "price": 3.0, "currency": "CLP" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_box_price_defaults_to_six_usd() {
    let response = sample_app()
        .oneshot(get("/api/beers/1/boxprice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["Price Total"], 12.0);
}

#[tokio::test]
async fn test_box_price_converts_currency() {
    let response = sample_app()
        .oneshot(get("/api/beers/1/boxprice?currency=MXN&quantity=6"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let total = json_body(response).await["Price Total"].as_f64().unwrap();
    assert_close(total, 244.56);
}

#[tokio::test]
async fn test_box_price_empty_and_garbage_params_fall_back() {
    let response = sample_app()
        .oneshot(get("/api/beers/2/boxprice?currency=&quantity=lots"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let total = json_body(response).await["Price Total"].as_f64().unwrap();
    assert_close(total, 5.145);
}

#[tokio::test]
async fn test_box_price_missing_rate_pair_is_not_found() {
    let response = sample_app()
        .oneshot(get("/api/beers/1/boxprice?currency=EUR"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_box_price_upstream_errors() {
    let cases = [
        (
            RateError::UpstreamRejected("invalid currency".into()),
            StatusCode::BAD_GATEWAY,
        ),
        (
            RateError::Transport("connection refused".into()),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
    ];

    for (error, expected) in cases {
        let response = app_with_rates(FailingRates(error))
            .oneshot(get("/api/beers/1/boxprice?currency=MXN"))
            .await
            .unwrap();

        assert_eq!(response.status(), expected);
        assert_eq!(json_body(response).await["code"], expected.as_u16());
    }
}

#[tokio::test]
async fn test_create_beer_rejected_bodies_are_json_bad_requests() {
    let requests = [
        Request::builder()
            .method(Method::POST)
            .uri("/api/beers")
            .header("Content-Type", "text/plain")
            .body(Body::from(r#"{"name":"Sol","price":1.0,"currency":"USD"}"#))
            .unwrap(),
        Request::builder()
            .method(Method::POST)
            .uri("/api/beers")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
        post_json(
            "/api/beers",
            serde_json::json!({ "name": "Sol", "currency": "USD" }),
        ),
    ];

    for request in requests {
        let response = sample_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let json = json_body(response).await;
        assert_eq!(json["code"], 400);
        assert!(!json["error"].as_str().unwrap().is_empty());
    }
}
