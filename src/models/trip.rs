//! Modelo de Trip
//!
//! Un viaje es la sesión de alquiler completa: se crea una vez al
//! iniciar y se muta exactamente una vez al terminar. Después de
//! completarse es solo-lectura.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "trip_status")]
pub enum TripStatus {
    #[sqlx(rename = "active")]
    #[serde(rename = "active")]
    Active,
    #[sqlx(rename = "completed")]
    #[serde(rename = "completed")]
    Completed,
    #[sqlx(rename = "cancelled")]
    #[serde(rename = "cancelled")]
    Cancelled,
}

/// Clasificación del aparcamiento al terminar el viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "parking_type")]
pub enum ParkingType {
    /// Dentro de una zona de aparcamiento o carga que lo permite
    #[sqlx(rename = "designated")]
    #[serde(rename = "designated")]
    Designated,
    /// Fuera de zonas marcadas: tolerado pero con recargo
    #[sqlx(rename = "free")]
    #[serde(rename = "free")]
    Free,
    /// Dentro de una zona que prohíbe aparcar; se factura con recargo
    #[sqlx(rename = "forbidden")]
    #[serde(rename = "forbidden")]
    Forbidden,
}

impl ParkingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParkingType::Designated => "designated",
            ParkingType::Free => "free",
            ParkingType::Forbidden => "forbidden",
        }
    }
}

/// Posición instantánea (ciudad + coordenadas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Trip - mapea a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub scooter_id: Uuid,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub start_city: String,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_city: Option<String>,
    pub end_latitude: Option<f64>,
    pub end_longitude: Option<f64>,
    pub parking_type: Option<ParkingType>,
    /// Distancia recorrida en metros; la alimenta la telemetría, no el motor
    pub distance: Option<f64>,
    pub cost: Decimal,
    pub status: TripStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn start_position(&self) -> Position {
        Position {
            city: self.start_city.clone(),
            latitude: self.start_latitude,
            longitude: self.start_longitude,
        }
    }

    pub fn end_position(&self) -> Option<Position> {
        match (&self.end_city, self.end_latitude, self.end_longitude) {
            (Some(city), Some(latitude), Some(longitude)) => Some(Position {
                city: city.clone(),
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}
