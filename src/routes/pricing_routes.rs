use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn create_pricing_router() -> Router<AppState> {
    Router::new().route("/", get(get_pricing))
}

/// Tarifa vigente; cambiarla requiere reiniciar el proceso
async fn get_pricing(State(state): State<AppState>) -> Json<serde_json::Value> {
    let pricing = &state.pricing;
    Json(json!({
        "currency": pricing.currency,
        "startFee": pricing.start_fee,
        "perMinute": pricing.per_minute,
        "parkingFee": pricing.parking_fee,
        "description": {
            "startFee": "One-time fee when starting a trip",
            "perMinute": "Cost per minute of riding",
            "parkingFee": "Extra fee for parking out of designated zones",
        },
    }))
}
