use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use std::str::FromStr;
use tower::ServiceExt;

use scooter_rental::config::{EnvironmentConfig, PricingConfig};
use scooter_rental::routes::create_app;
use scooter_rental::state::AppState;
use scooter_rental::utils::jwt::{generate_token, JwtConfig};

const TEST_SECRET: &str = "test-secret";

// App real con un pool perezoso: ninguna ruta de estas pruebas llega a
// tocar la base de datos, así que no hace falta un Postgres levantado.
fn create_test_app() -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/scooter_rental_test")
        .unwrap();

    let config = EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration: 3600,
        cors_origins: Vec::new(),
    };

    let pricing = PricingConfig {
        start_fee: Decimal::from_str("10").unwrap(),
        per_minute: Decimal::from_str("2.5").unwrap(),
        parking_fee: Decimal::from_str("15").unwrap(),
        currency: "SEK".to_string(),
    };

    let state = AppState::new(pool, config, pricing);
    create_app(state)
}

fn bearer_token(user_id: &str, role: &str) -> String {
    let config = JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration: 3600,
    };
    generate_token(user_id, role, &config).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_status_endpoint() {
    let (status, body) = get(create_test_app(), "/api/v1/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_pricing_endpoint_serves_configured_tariff() {
    let (status, body) = get(create_test_app(), "/api/v1/pricing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "SEK");
    assert_eq!(body["startFee"], "10");
    assert_eq!(body["perMinute"], "2.5");
    assert_eq!(body["parkingFee"], "15");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, _) = get(create_test_app(), "/api/v1/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_without_token_is_unauthorized() {
    let (status, body) = get(create_test_app(), "/api/v1/rent/history").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let request = Request::builder()
        .uri("/api/v1/rent/history")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_admin_routes_reject_customers() {
    let token = bearer_token("demo-user-1", "customer");
    let request = Request::builder()
        .uri("/api/v1/admin/users")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(create_test_app(), request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_zone_check_requires_coordinates() {
    let (status, body) = get(create_test_app(), "/api/v1/zones/check").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_simulation_state_without_start_is_empty() {
    let (status, body) = get(create_test_app(), "/api/v1/simulation/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
