//! Modelo de Scooter
//!
//! Mapea a la tabla `scooters` e implementa la máquina de estados
//! del vehículo: un alquiler solo puede empezar desde `Available`
//! y terminar desde `In use`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado operativo del scooter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "scooter_status")]
pub enum ScooterStatus {
    #[sqlx(rename = "Available")]
    #[serde(rename = "Available")]
    Available,
    #[sqlx(rename = "In use")]
    #[serde(rename = "In use")]
    InUse,
    #[sqlx(rename = "Charging")]
    #[serde(rename = "Charging")]
    Charging,
    #[sqlx(rename = "Maintenance")]
    #[serde(rename = "Maintenance")]
    Maintenance,
    #[sqlx(rename = "Off")]
    #[serde(rename = "Off")]
    Off,
}

impl ScooterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScooterStatus::Available => "Available",
            ScooterStatus::InUse => "In use",
            ScooterStatus::Charging => "Charging",
            ScooterStatus::Maintenance => "Maintenance",
            ScooterStatus::Off => "Off",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(ScooterStatus::Available),
            "In use" => Some(ScooterStatus::InUse),
            "Charging" => Some(ScooterStatus::Charging),
            "Maintenance" => Some(ScooterStatus::Maintenance),
            "Off" => Some(ScooterStatus::Off),
            _ => None,
        }
    }

    /// El alquiler solo puede empezar desde Available
    pub fn can_start_rental(&self) -> bool {
        matches!(self, ScooterStatus::Available)
    }

    /// El alquiler solo puede terminar desde In use
    pub fn can_stop_rental(&self) -> bool {
        matches!(self, ScooterStatus::InUse)
    }
}

impl std::fmt::Display for ScooterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Velocidad nominal que se fija al iniciar un viaje (km/h)
pub const RENTAL_START_SPEED: f64 = 10.0;

/// Scooter - mapea a la tabla scooters
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Scooter {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Porcentaje de batería [0, 100]; lo actualiza la telemetría
    pub battery: f64,
    pub speed: f64,
    pub status: ScooterStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_available_can_start() {
        assert!(ScooterStatus::Available.can_start_rental());
        for status in [
            ScooterStatus::InUse,
            ScooterStatus::Charging,
            ScooterStatus::Maintenance,
            ScooterStatus::Off,
        ] {
            assert!(!status.can_start_rental(), "{} should not start", status);
        }
    }

    #[test]
    fn only_in_use_can_stop() {
        assert!(ScooterStatus::InUse.can_stop_rental());
        for status in [
            ScooterStatus::Available,
            ScooterStatus::Charging,
            ScooterStatus::Maintenance,
            ScooterStatus::Off,
        ] {
            assert!(!status.can_stop_rental(), "{} should not stop", status);
        }
    }

    #[test]
    fn status_labels_roundtrip() {
        for status in [
            ScooterStatus::Available,
            ScooterStatus::InUse,
            ScooterStatus::Charging,
            ScooterStatus::Maintenance,
            ScooterStatus::Off,
        ] {
            assert_eq!(ScooterStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ScooterStatus::parse("Broken"), None);
    }
}
