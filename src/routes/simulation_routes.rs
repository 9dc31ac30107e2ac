use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::services::simulation::SimulatedScooter;
use crate::state::AppState;

const DEFAULT_FLEET_SIZE: usize = 1000;

pub fn create_simulation_router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_simulation))
        .route("/stop", post(stop_simulation))
        .route("/state", get(simulation_state))
}

async fn start_simulation(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.simulation.start(DEFAULT_FLEET_SIZE).await;
    Json(json!({ "message": "Simulation started" }))
}

async fn stop_simulation(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.simulation.stop().await;
    Json(json!({ "message": "Simulation stopped" }))
}

async fn simulation_state(State(state): State<AppState>) -> Json<Vec<SimulatedScooter>> {
    Json(state.simulation.snapshot().await)
}
