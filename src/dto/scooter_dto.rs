use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Scooter;

/// Coordenadas como las expone la API (objeto anidado)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response de scooter para la API
#[derive(Debug, Serialize)]
pub struct ScooterResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub coordinates: Coordinates,
    pub battery: f64,
    pub speed: f64,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Scooter> for ScooterResponse {
    fn from(scooter: Scooter) -> Self {
        Self {
            id: scooter.id,
            name: scooter.name,
            city: scooter.city,
            coordinates: Coordinates {
                latitude: scooter.latitude,
                longitude: scooter.longitude,
            },
            battery: scooter.battery,
            speed: scooter.speed,
            status: scooter.status.to_string(),
            updated_at: scooter.updated_at,
        }
    }
}

/// Resumen corto del scooter en responses de alquiler
#[derive(Debug, Serialize)]
pub struct ScooterSummary {
    pub id: Uuid,
    pub name: String,
    pub status: String,
}

impl From<&Scooter> for ScooterSummary {
    fn from(scooter: &Scooter) -> Self {
        Self {
            id: scooter.id,
            name: scooter.name.clone(),
            status: scooter.status.to_string(),
        }
    }
}

/// Filtros de listado de scooters
#[derive(Debug, Deserialize)]
pub struct ScooterFilters {
    pub status: Option<String>,
    pub city: Option<String>,
}

/// Request de telemetría
#[derive(Debug, Deserialize)]
pub struct TelemetryRequest {
    pub coordinates: Option<Coordinates>,
    pub battery: Option<f64>,
    pub speed: Option<f64>,
    pub status: Option<String>,
}
