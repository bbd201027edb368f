//! End-to-end tests against a running server.

use std::net::SocketAddr;

use itinerary_server::itinerary::{DetectorKind, ItineraryConfig, ItineraryService, StartSelection};
use itinerary_server::web::{AppState, ErrorResponse, HealthResponse, ItineraryResponse, create_router};
use reqwest::StatusCode;
use serde_json::json;

/// Start a server on an ephemeral port and return its base URL.
async fn spawn_server(config: ItineraryConfig) -> String {
    let app = create_router(AppState::new(ItineraryService::new(config)));
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn reference_flights() -> serde_json::Value {
    json!([
        ["BCN", "PSC"], ["JFK", "AAL"], ["FCO", "BCN"], ["GSO", "IND"],
        ["SFO", "ATL"], ["AAL", "HEL"], ["PSC", "BLQ"], ["IND", "EWR"],
        ["BGY", "RAR"], ["BJZ", "AKL"], ["AUH", "FCO"], ["HEL", "CAK"],
        ["RAR", "AUH"], ["CAK", "BJZ"], ["ATL", "GSO"], ["CHI", "JFK"],
        ["BLQ", "MAD"], ["EWR", "CHI"], ["MAD", "SFO"]
    ])
}

#[tokio::test]
async fn health_endpoints() {
    let base = spawn_server(ItineraryConfig::default()).await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: HealthResponse = res.json().await.unwrap();
    assert_eq!(body.data, "Server is up and running");

    let res = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn calculate_returns_start_and_end() {
    let base = spawn_server(ItineraryConfig::default()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/calculate"))
        .json(&json!([["MUC", "LHR"], ["LHR", "SFO"]]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<String> = res.json().await.unwrap();
    assert_eq!(body, vec!["MUC", "SFO"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn calculate_with_concurrent_detector() {
    let config = ItineraryConfig::new(StartSelection::DegreeBalance, DetectorKind::Concurrent);
    let base = spawn_server(config).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/calculate"))
        .json(&reference_flights())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<String> = res.json().await.unwrap();
    assert_eq!(body, vec!["BGY", "AKL"]);
}

#[tokio::test]
async fn itinerary_returns_full_path() {
    let base = spawn_server(ItineraryConfig::default()).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/itinerary"))
        .json(&json!([["LHR", "SFO"], ["MUC", "LHR"]]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: ItineraryResponse = res.json().await.unwrap();
    assert_eq!(body.itinerary, vec!["MUC", "LHR", "SFO"]);
    assert!(body.complete);
    assert_eq!(body.unused_segments, 0);
}

#[tokio::test]
async fn itinerary_with_longest_path_strategy() {
    let config = ItineraryConfig::new(StartSelection::LongestPath, DetectorKind::Sequential);
    let base = spawn_server(config).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/itinerary"))
        .json(&reference_flights())
        .send()
        .await
        .unwrap();

    let body: ItineraryResponse = res.json().await.unwrap();
    assert_eq!(body.itinerary.len(), 20);
    assert_eq!(body.itinerary.first().map(String::as_str), Some("BGY"));
    assert_eq!(body.itinerary.last().map(String::as_str), Some("AKL"));
    assert_eq!(body.start_source, "longest");
}

#[tokio::test]
async fn large_unbalanced_input_starts_at_first_departure() {
    let config = ItineraryConfig::default().with_max_fallback_segments(2);
    let base = spawn_server(config).await;

    let res = reqwest::Client::new()
        .post(format!("{base}/itinerary"))
        .json(&json!([["C", "Z"], ["A", "Z"], ["B", "Z"]]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: ItineraryResponse = res.json().await.unwrap();
    assert_eq!(body.itinerary, vec!["C", "Z"]);
    assert_eq!(body.start_source, "departure");
    assert_eq!(body.unused_segments, 2);
    assert!(!body.complete);
}

#[tokio::test]
async fn malformed_payloads_are_bad_requests() {
    let base = spawn_server(ItineraryConfig::default()).await;
    let client = reqwest::Client::new();

    let cases = [
        "not json".to_string(),
        "[]".to_string(),
        json!([["MUC"]]).to_string(),
        json!([["", "LHR"]]).to_string(),
        json!({"segments": [["MUC", "LHR"]]}).to_string(),
    ];

    for path in ["calculate", "itinerary"] {
        for body in &cases {
            let res = client
                .post(format!("{base}/{path}"))
                .header("content-type", "application/json")
                .body(body.clone())
                .send()
                .await
                .unwrap();

            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}: {body}");
            let err: ErrorResponse = res.json().await.unwrap();
            assert!(!err.error.is_empty());
        }
    }
}

#[tokio::test]
async fn cycle_has_no_endpoints_but_has_an_itinerary() {
    let base = spawn_server(ItineraryConfig::default()).await;
    let client = reqwest::Client::new();
    let cycle = json!([["A", "B"], ["B", "A"]]);

    let res = client
        .post(format!("{base}/calculate"))
        .json(&cycle)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .post(format!("{base}/itinerary"))
        .json(&cycle)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: ItineraryResponse = res.json().await.unwrap();
    assert_eq!(body.itinerary, vec!["A", "B", "A"]);
    assert_eq!(body.start_source, "circuit");
}

#[tokio::test]
async fn cors_headers_are_sent() {
    let base = spawn_server(ItineraryConfig::default()).await;

    let res = reqwest::Client::new()
        .get(format!("{base}/health"))
        .header("origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert!(res.headers().contains_key("access-control-allow-origin"));
}
