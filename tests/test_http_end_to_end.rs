//! Full path over real HTTP: a local axum server stands in for the
//! comparison service and the reqwest client talks to it.

use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use remitlens::domain::entities::selection::Selection;
use remitlens::domain::values::amount::TransferAmount;
use remitlens::domain::values::corridor::Corridor;
use remitlens::domain::values::source_result::SourceKind;
use remitlens::infrastructure::http::config::ClientConfig;
use remitlens::RemitLens;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

async fn competitive_analysis(Path(corridor): Path<String>) -> Json<Value> {
    Json(json!({
        "corridor": corridor,
        "data_points": 21,
        "providers_analyzed": ["Wise", "Remitly"],
        "most_competitive": {"provider": "Wise", "total_cost": 12.5},
        "stats_by_provider": {
            "Wise": {"avg_rate": 18.27, "avg_fee": 6.2, "total_cost": 12.5, "sample_size": 9},
            "Remitly": {"avg_rate": 17.46, "avg_fee": 3.99, "total_cost": 15.0, "sample_size": 12}
        }
    }))
}

async fn garbled_analysis(Path(_corridor): Path<String>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        "{\"stats_by_provider\": [not json",
    )
}

async fn insight(Path(_corridor): Path<String>) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn p2p(
    Path(_corridor): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let amount: f64 = params
        .get("amount")
        .and_then(|a| a.parse().ok())
        .unwrap_or(0.0);
    Json(json!({
        "success": true,
        "data": {
            "exchange_rate": 19.0,
            "recipient_receives": amount * 19.0,
            "fee": 0,
            "payment_methods": [{"tradeMethodName": "SPEI"}]
        }
    }))
}

async fn stalled_p2p(Path(_corridor): Path<String>) -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({"success": true, "data": {"exchange_rate": 19.0}}))
}

async fn crypto_rates(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let currency = params.get("currencies").cloned().unwrap_or_default();
    Json(json!({
        "data": {
            "rates": {
                "USDT": {(currency.clone()): {"rate": 20.1, "source": "binance"}},
                "USDC": {(currency): {"rate": null, "source": "unavailable"}}
            }
        }
    }))
}

async fn card_premiums(Path(corridor): Path<String>) -> Json<Value> {
    Json(json!({
        "country": corridor,
        "amount": 400,
        "providers": [{
            "name": "Wise",
            "bank_transfer": {"total_cost": 10.0, "method": "ACH/Wire"},
            "debit_card": {"total_cost": 10.8},
            "credit_card": {"total_cost": 9.5}
        }]
    }))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "timestamp": "2025-06-01T12:00:00"}))
}

async fn spawn_fixture() -> String {
    serve(fixture_app(get(competitive_analysis), get(p2p))).await
}

fn fixture_app(analysis_route: MethodRouter, p2p_route: MethodRouter) -> Router {
    Router::new()
        .route("/api/v1/competitive-analysis/:corridor", analysis_route)
        .route("/api/v1/rag/competitive-insight/:corridor", get(insight))
        .route("/api/v1/binance-p2p/:corridor", p2p_route)
        .route("/api/v1/crypto-rates", get(crypto_rates))
        .route("/api/v1/card-premiums/:corridor", get(card_premiums))
        .route("/health", get(health))
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> RemitLens {
    client_with_timeout(base_url, Duration::from_secs(5))
}

fn client_with_timeout(base_url: String, timeout: Duration) -> RemitLens {
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(timeout);
    RemitLens::with_config(config).unwrap()
}

#[tokio::test]
async fn test_snapshot_over_http() {
    let rl = client(spawn_fixture().await);
    let amount = TransferAmount::new(dec!(400)).unwrap();
    let view = rl.snapshot(Selection::new(Corridor::Mx, Some(amount))).await;

    // The insight endpoint answers 500 and is the only absent section.
    assert_eq!(view.absent_sources, vec![SourceKind::Insight]);

    let metrics = view.metrics.as_ref().unwrap();
    assert_eq!(metrics.cheapest.provider, "Wise");
    assert_eq!(metrics.price_gap, dec!(2.5));

    let quote = view.p2p.clone().ok().unwrap();
    assert_eq!(quote.recipient_receives, Some(dec!(7600)));
    assert_eq!(quote.payment_methods, vec!["SPEI"]);

    let rates = view.stablecoin.clone().ok().unwrap();
    assert!(rates.rates.iter().all(|r| r.currency == "MXN"));

    let entry = &view.card_premium_entries[0];
    assert_eq!(entry.debit_premium_pct, Some(dec!(8)));
    assert_eq!(entry.credit_premium_pct, Some(dec!(-5)));
}

#[tokio::test]
async fn test_undecodable_body_counts_as_absent() {
    let base = serve(fixture_app(get(garbled_analysis), get(p2p))).await;
    let view = client(base).snapshot(Selection::default()).await;

    assert_eq!(
        view.absent_sources,
        vec![SourceKind::CostAnalysis, SourceKind::Insight]
    );
    assert!(view.metrics.is_none());
    assert!(view.p2p.is_ok());
    assert!(view.card_premiums.is_ok());
}

#[tokio::test]
async fn test_timed_out_source_counts_as_absent() {
    let base = serve(fixture_app(get(competitive_analysis), get(stalled_p2p))).await;
    let rl = client_with_timeout(base, Duration::from_millis(500));

    let started = std::time::Instant::now();
    let view = rl.snapshot(Selection::default()).await;

    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(view.absent_sources, vec![SourceKind::Insight, SourceKind::P2p]);
    assert!(view.metrics.is_some());
    assert!(view.stablecoin.is_ok());
}

#[tokio::test]
async fn test_health_over_http() {
    let rl = client(spawn_fixture().await);
    let status = rl.health().await.unwrap();
    assert!(status.is_healthy());
    assert_eq!(status.timestamp.as_deref(), Some("2025-06-01T12:00:00"));
}

#[tokio::test]
async fn test_unreachable_service_yields_all_absent() {
    let rl = client("http://127.0.0.1:9".into());
    let view = rl.snapshot(Selection::default()).await;
    assert!(view.is_empty());
    assert!(view.metrics.is_none());
    assert!(rl.health().await.is_err());
}
