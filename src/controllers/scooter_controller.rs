use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::scooter_dto::{ScooterFilters, ScooterResponse, TelemetryRequest};
use crate::models::ScooterStatus;
use crate::repositories::ScooterRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct ScooterController {
    repository: ScooterRepository,
}

impl ScooterController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ScooterRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: ScooterFilters) -> Result<Vec<ScooterResponse>, AppError> {
        let status = match filters.status.as_deref() {
            Some(raw) => Some(ScooterStatus::parse(raw).ok_or_else(|| {
                AppError::Validation(format!("Invalid scooter status '{}'", raw))
            })?),
            None => None,
        };

        let scooters = self.repository.list(status, filters.city).await?;
        Ok(scooters.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ScooterResponse, AppError> {
        let scooter = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Scooter", &id.to_string()))?;

        Ok(scooter.into())
    }

    /// Actualización de telemetría con validación de rangos
    pub async fn update_telemetry(
        &self,
        id: Uuid,
        request: TelemetryRequest,
    ) -> Result<ScooterResponse, AppError> {
        if let Some(battery) = request.battery {
            if !(0.0..=100.0).contains(&battery) {
                return Err(AppError::Validation(
                    "Battery has to be between 0 and 100".to_string(),
                ));
            }
        }

        if let Some(speed) = request.speed {
            if speed < 0.0 {
                return Err(AppError::Validation(
                    "Speed cannot be negative".to_string(),
                ));
            }
        }

        let status = match request.status.as_deref() {
            Some(raw) => Some(ScooterStatus::parse(raw).ok_or_else(|| {
                AppError::Validation(format!("Invalid scooter status '{}'", raw))
            })?),
            None => None,
        };

        let (latitude, longitude) = match request.coordinates {
            Some(coordinates) => (Some(coordinates.latitude), Some(coordinates.longitude)),
            None => (None, None),
        };

        let scooter = self
            .repository
            .update_telemetry(id, latitude, longitude, request.battery, request.speed, status)
            .await?
            .ok_or_else(|| not_found_error("Scooter", &id.to_string()))?;

        Ok(scooter.into())
    }
}
