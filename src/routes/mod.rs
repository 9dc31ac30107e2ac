//! Routers de la API
//!
//! Un router por recurso, anidados bajo /api/v1. `create_app` monta la
//! aplicación completa (rutas + CORS + estado) y es lo que sirven tanto
//! el binario como los tests de integración.

pub mod admin_routes;
pub mod cities_routes;
pub mod pricing_routes;
pub mod rent_routes;
pub mod scooter_routes;
pub mod simulation_routes;
pub mod station_routes;
pub mod user_routes;
pub mod zone_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Aplicación completa con todas las rutas montada sobre `state`
pub fn create_app(state: AppState) -> Router {
    let api_v1 = Router::new()
        .route("/status", get(status_endpoint))
        .nest("/rent", rent_routes::create_rent_router(state.clone()))
        .nest("/scooters", scooter_routes::create_scooter_router(state.clone()))
        .nest("/zones", zone_routes::create_zone_router(state.clone()))
        .nest("/stations", station_routes::create_station_router())
        .nest("/cities", cities_routes::create_cities_router())
        .nest("/users", user_routes::create_user_router(state.clone()))
        .nest("/admin", admin_routes::create_admin_router(state.clone()))
        .nest("/pricing", pricing_routes::create_pricing_router())
        .nest("/simulation", simulation_routes::create_simulation_router());

    Router::new()
        .nest("/api/v1", api_v1)
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// Endpoint de health check
async fn status_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
