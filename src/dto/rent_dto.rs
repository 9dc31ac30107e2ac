use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::dto::scooter_dto::{Coordinates, ScooterSummary};
use crate::models::{Position, Trip};
use crate::services::pricing;
use crate::services::rental_service::{StartOutcome, StopOutcome};

/// Posición con ciudad, como la expone la API
#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub city: String,
    pub coordinates: Coordinates,
}

impl From<Position> for PositionResponse {
    fn from(position: Position) -> Self {
        Self {
            city: position.city,
            coordinates: Coordinates {
                latitude: position.latitude,
                longitude: position.longitude,
            },
        }
    }
}

/// Response de inicio de viaje
#[derive(Debug, Serialize)]
pub struct StartRentalResponse {
    pub message: String,
    pub trip: StartedTrip,
    pub scooter: ScooterSummary,
}

#[derive(Debug, Serialize)]
pub struct StartedTrip {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub start_position: PositionResponse,
    pub status: String,
}

impl From<StartOutcome> for StartRentalResponse {
    fn from(outcome: StartOutcome) -> Self {
        Self {
            message: "Trip started".to_string(),
            scooter: ScooterSummary::from(&outcome.scooter),
            trip: StartedTrip {
                id: outcome.trip.id,
                start_time: outcome.trip.start_time,
                start_position: outcome.trip.start_position().into(),
                status: "active".to_string(),
            },
        }
    }
}

/// Response de fin de viaje, con desglose de coste
#[derive(Debug, Serialize)]
pub struct StopRentalResponse {
    pub message: String,
    pub trip: CompletedTrip,
    pub scooter: ScooterSummary,
    pub new_balance: Decimal,
    /// Aviso sobre el aparcamiento; distingue "fuera de toda zona" de
    /// "dentro de zona prohibida" aunque ambos lleven recargo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompletedTrip {
    pub id: Uuid,
    pub duration_minutes: i64,
    pub cost: Decimal,
    pub currency: String,
    pub parking_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl From<StopOutcome> for StopRentalResponse {
    fn from(outcome: StopOutcome) -> Self {
        let alert = if !outcome.policy.in_zone {
            Some("Parked outside all known zones, parking fee applied".to_string())
        } else if !outcome.policy.park_allowed {
            Some("Parked in a zone where parking is forbidden, parking fee applied".to_string())
        } else if outcome.breakdown.parking_fee > Decimal::ZERO {
            Some("Parked outside a designated parking zone, parking fee applied".to_string())
        } else {
            None
        };

        Self {
            message: "Trip stopped".to_string(),
            scooter: ScooterSummary::from(&outcome.scooter),
            new_balance: outcome.new_balance,
            alert,
            trip: CompletedTrip {
                id: outcome.trip.id,
                duration_minutes: outcome.breakdown.duration_minutes,
                cost: outcome.breakdown.total,
                currency: outcome.breakdown.currency.clone(),
                parking_type: outcome
                    .trip
                    .parking_type
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default(),
                start_time: outcome.trip.start_time,
                end_time: outcome.trip.end_time,
            },
        }
    }
}

/// Resumen de viaje en el historial
#[derive(Debug, Serialize)]
pub struct TripSummary {
    pub id: Uuid,
    pub scooter_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i64>,
    pub cost: Decimal,
    pub parking_type: Option<String>,
    pub start_position: PositionResponse,
    pub end_position: Option<PositionResponse>,
    pub status: String,
}

impl From<Trip> for TripSummary {
    fn from(trip: Trip) -> Self {
        let duration_minutes = trip
            .end_time
            .map(|end| pricing::duration_minutes(trip.start_time, end));

        Self {
            id: trip.id,
            scooter_id: trip.scooter_id,
            start_time: trip.start_time,
            end_time: trip.end_time,
            duration_minutes,
            cost: trip.cost,
            parking_type: trip.parking_type.map(|p| p.as_str().to_string()),
            start_position: trip.start_position().into(),
            end_position: trip.end_position().map(Into::into),
            status: match trip.status {
                crate::models::TripStatus::Active => "active".to_string(),
                crate::models::TripStatus::Completed => "completed".to_string(),
                crate::models::TripStatus::Cancelled => "cancelled".to_string(),
            },
        }
    }
}

/// Response del historial de viajes
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub trips: Vec<TripSummary>,
}
