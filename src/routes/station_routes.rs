use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::station_controller::StationController;
use crate::dto::zone_dto::StationListResponse;
use crate::models::Zone;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_station_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stations))
        .route("/:id", get(get_station))
}

#[derive(Debug, Deserialize)]
struct StationFilters {
    city: Option<String>,
}

async fn list_stations(
    State(state): State<AppState>,
    Query(filters): Query<StationFilters>,
) -> Result<Json<StationListResponse>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.list(filters.city).await?;
    Ok(Json(response))
}

async fn get_station(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Zone>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
