use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{BalanceResponse, FillupRequest, FillupResponse, UserResponse};
use crate::middleware::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_user))
        .route("/:id/balance", get(get_balance))
        .route("/:id/fillup", post(fillup))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn get_user(
    State(state): State<AppState>,
    Extension(requester): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.pricing.currency.clone());
    let response = controller.get_profile(&id, &requester).await?;
    Ok(Json(response))
}

async fn get_balance(
    State(state): State<AppState>,
    Extension(requester): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.pricing.currency.clone());
    let response = controller.get_balance(&id, &requester).await?;
    Ok(Json(response))
}

async fn fillup(
    State(state): State<AppState>,
    Extension(requester): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(request): Json<FillupRequest>,
) -> Result<Json<FillupResponse>, AppError> {
    let controller = UserController::new(state.pool.clone(), state.pricing.currency.clone());
    let response = controller.fillup(&id, &requester, request).await?;
    Ok(Json(response))
}
