use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::scooter_controller::ScooterController;
use crate::dto::scooter_dto::{ScooterFilters, ScooterResponse, TelemetryRequest};
use crate::middleware::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_scooter_router(state: AppState) -> Router<AppState> {
    // La telemetría la envían los propios scooters autenticados;
    // el listado y el detalle son públicos.
    let protected = Router::new()
        .route("/:id/telemetry", post(update_telemetry))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_scooters))
        .route("/:id", get(get_scooter))
        .merge(protected)
}

async fn list_scooters(
    State(state): State<AppState>,
    Query(filters): Query<ScooterFilters>,
) -> Result<Json<Vec<ScooterResponse>>, AppError> {
    let controller = ScooterController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_scooter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScooterResponse>, AppError> {
    let controller = ScooterController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_telemetry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TelemetryRequest>,
) -> Result<Json<ScooterResponse>, AppError> {
    let controller = ScooterController::new(state.pool.clone());
    let response = controller.update_telemetry(id, request).await?;
    Ok(Json(response))
}
