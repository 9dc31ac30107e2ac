use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::rent_dto::TripSummary;
use crate::dto::scooter_dto::{Coordinates, ScooterResponse};
use crate::dto::user_dto::UserResponse;

/// Request de alta de scooter (admin)
#[derive(Debug, Deserialize)]
pub struct CreateScooterRequest {
    pub name: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub battery: Option<f64>,
    pub status: Option<String>,
}

/// Request de actualización de scooter (admin); solo los campos presentes
#[derive(Debug, Deserialize)]
pub struct UpdateScooterRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub battery: Option<f64>,
    pub speed: Option<f64>,
    pub status: Option<String>,
}

/// Filtros del listado de usuarios
#[derive(Debug, Deserialize)]
pub struct UserFilters {
    pub active: Option<bool>,
}

/// Filtros del listado de viajes
#[derive(Debug, Deserialize)]
pub struct RideFilters {
    pub status: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub limit: Option<i64>,
}

/// Filtros del listado de cobros
#[derive(Debug, Deserialize)]
pub struct PaymentFilters {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub count: usize,
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
pub struct FleetListResponse {
    pub count: usize,
    pub scooters: Vec<ScooterResponse>,
}

#[derive(Debug, Serialize)]
pub struct RideListResponse {
    pub count: usize,
    pub rides: Vec<TripSummary>,
}

/// Un cobro en el listado de pagos
#[derive(Debug, Serialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub user_id: String,
    pub scooter: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub trip_duration_minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub count: usize,
    pub total_income: Decimal,
    pub currency: String,
    pub payments: Vec<PaymentRecord>,
}
