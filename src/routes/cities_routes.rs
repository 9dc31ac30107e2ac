use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::city_controller::CityController;
use crate::dto::city_dto::CityListResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cities_router() -> Router<AppState> {
    Router::new().route("/", get(list_cities))
}

async fn list_cities(State(state): State<AppState>) -> Result<Json<CityListResponse>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
