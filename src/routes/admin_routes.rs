use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{
    CreateScooterRequest, FleetListResponse, PaymentFilters, PaymentListResponse, RideFilters,
    RideListResponse, UpdateScooterRequest, UserFilters, UserListResponse,
};
use crate::dto::scooter_dto::{ScooterFilters, ScooterResponse};
use crate::dto::ApiResponse;
use crate::middleware::{auth_middleware, require_admin};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/scooters", get(list_fleet))
        .route("/scooters", post(create_scooter))
        .route("/scooters/:id", put(update_scooter))
        .route("/scooters/:id", delete(delete_scooter))
        .route("/rides", get(list_rides))
        .route("/payments", get(list_payments))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn controller(state: &AppState) -> AdminController {
    AdminController::new(state.pool.clone(), state.pricing.currency.clone())
}

async fn list_users(
    State(state): State<AppState>,
    Query(filters): Query<UserFilters>,
) -> Result<Json<UserListResponse>, AppError> {
    let response = controller(&state).list_users(filters).await?;
    Ok(Json(response))
}

async fn list_fleet(
    State(state): State<AppState>,
    Query(filters): Query<ScooterFilters>,
) -> Result<Json<FleetListResponse>, AppError> {
    let response = controller(&state).list_fleet(filters).await?;
    Ok(Json(response))
}

async fn create_scooter(
    State(state): State<AppState>,
    Json(request): Json<CreateScooterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ScooterResponse>>), AppError> {
    let scooter = controller(&state).create_scooter(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            scooter,
            "Scooter created".to_string(),
        )),
    ))
}

async fn update_scooter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateScooterRequest>,
) -> Result<Json<ApiResponse<ScooterResponse>>, AppError> {
    let scooter = controller(&state).update_scooter(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        scooter,
        "Scooter updated".to_string(),
    )))
}

async fn delete_scooter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ScooterResponse>>, AppError> {
    let scooter = controller(&state).delete_scooter(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        scooter,
        "Scooter deleted".to_string(),
    )))
}

async fn list_rides(
    State(state): State<AppState>,
    Query(filters): Query<RideFilters>,
) -> Result<Json<RideListResponse>, AppError> {
    let response = controller(&state).list_rides(filters).await?;
    Ok(Json(response))
}

async fn list_payments(
    State(state): State<AppState>,
    Query(filters): Query<PaymentFilters>,
) -> Result<Json<PaymentListResponse>, AppError> {
    let response = controller(&state).list_payments(filters).await?;
    Ok(Json(response))
}
