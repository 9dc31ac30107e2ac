use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::rent_controller::RentController;
use crate::dto::rent_dto::{HistoryResponse, StartRentalResponse, StopRentalResponse, TripSummary};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rent_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/start/:id", post(start_rental))
        .route("/stop/:id", post(stop_rental))
        .route("/history", get(get_history))
        .route("/history/:trip_id", get(get_trip_detail))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn start_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<StartRentalResponse>, AppError> {
    let controller = RentController::new(state.pool.clone(), state.pricing.clone());
    let response = controller.start(id, &user).await?;
    Ok(Json(response))
}

async fn stop_rental(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<StopRentalResponse>, AppError> {
    let controller = RentController::new(state.pool.clone(), state.pricing.clone());
    let response = controller.stop(id, &user).await?;
    Ok(Json(response))
}

async fn get_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<HistoryResponse>, AppError> {
    let controller = RentController::new(state.pool.clone(), state.pricing.clone());
    let response = controller.history(&user).await?;
    Ok(Json(response))
}

async fn get_trip_detail(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<TripSummary>, AppError> {
    let controller = RentController::new(state.pool.clone(), state.pricing.clone());
    let response = controller.trip_detail(trip_id, &user).await?;
    Ok(Json(response))
}
