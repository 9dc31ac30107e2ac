use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::zone_controller::ZoneController;
use crate::dto::zone_dto::{
    CreateZoneRequest, UpdateZoneRequest, ZoneCheckQuery, ZoneCheckResponse, ZoneFilters,
    ZoneListResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::{auth_middleware, require_admin};
use crate::models::Zone;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_zone_router(state: AppState) -> Router<AppState> {
    // Lectura pública; mutaciones solo para admin
    let admin = Router::new()
        .route("/", post(create_zone))
        .route("/:id", put(update_zone))
        .route("/:id", delete(delete_zone))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_zones))
        .route("/check", get(check_point))
        .route("/:id", get(get_zone))
        .merge(admin)
}

async fn list_zones(
    State(state): State<AppState>,
    Query(filters): Query<ZoneFilters>,
) -> Result<Json<ZoneListResponse>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn check_point(
    State(state): State<AppState>,
    Query(query): Query<ZoneCheckQuery>,
) -> Result<Json<ZoneCheckResponse>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let response = controller.check_point(query).await?;
    Ok(Json(response))
}

async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Zone>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_zone(
    State(state): State<AppState>,
    Json(request): Json<CreateZoneRequest>,
) -> Result<Json<ApiResponse<Zone>>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let zone = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        zone,
        "Zone created".to_string(),
    )))
}

async fn update_zone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateZoneRequest>,
) -> Result<Json<ApiResponse<Zone>>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let zone = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        zone,
        "Zone updated".to_string(),
    )))
}

async fn delete_zone(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Zone>>, AppError> {
    let controller = ZoneController::new(state.pool.clone());
    let zone = controller.delete(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        zone,
        "Zone deleted".to_string(),
    )))
}
