//! Controlador de administración de flota
//!
//! CRUD de scooters y listados globales de usuarios, viajes y cobros.
//! Todas las operaciones van detrás del guard de admin en el router.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::{
    CreateScooterRequest, FleetListResponse, PaymentFilters, PaymentListResponse, PaymentRecord,
    RideFilters, RideListResponse, UpdateScooterRequest, UserFilters, UserListResponse,
};
use crate::dto::scooter_dto::{ScooterFilters, ScooterResponse};
use crate::models::{ScooterStatus, TripStatus};
use crate::repositories::{ScooterRepository, TripRepository, UserRepository};
use crate::services::pricing;
use crate::utils::errors::{not_found_error, AppError};

const DEFAULT_LIST_LIMIT: i64 = 100;
const MAX_LIST_LIMIT: i64 = 1000;

pub struct AdminController {
    pool: PgPool,
    currency: String,
}

impl AdminController {
    pub fn new(pool: PgPool, currency: String) -> Self {
        Self { pool, currency }
    }

    fn validate_battery(battery: f64) -> Result<(), AppError> {
        if !(0.0..=100.0).contains(&battery) {
            return Err(AppError::Validation(
                "Battery has to be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }

    fn parse_status(raw: &str) -> Result<ScooterStatus, AppError> {
        ScooterStatus::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("Invalid scooter status '{}'", raw)))
    }

    fn clamp_limit(limit: Option<i64>) -> i64 {
        limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
    }

    pub async fn list_users(&self, filters: UserFilters) -> Result<UserListResponse, AppError> {
        let users = UserRepository::new(self.pool.clone())
            .list(filters.active)
            .await?;

        Ok(UserListResponse {
            count: users.len(),
            users: users.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_fleet(&self, filters: ScooterFilters) -> Result<FleetListResponse, AppError> {
        let status = match filters.status.as_deref() {
            Some(raw) => Some(Self::parse_status(raw)?),
            None => None,
        };

        let scooters = ScooterRepository::new(self.pool.clone())
            .list(status, filters.city)
            .await?;

        Ok(FleetListResponse {
            count: scooters.len(),
            scooters: scooters.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn create_scooter(
        &self,
        request: CreateScooterRequest,
    ) -> Result<ScooterResponse, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("Scooter name is required".to_string()));
        }
        if request.city.trim().is_empty() {
            return Err(AppError::Validation("City is required".to_string()));
        }

        let battery = request.battery.unwrap_or(100.0);
        Self::validate_battery(battery)?;

        let status = match request.status.as_deref() {
            Some(raw) => Self::parse_status(raw)?,
            None => ScooterStatus::Available,
        };

        let scooter = ScooterRepository::new(self.pool.clone())
            .create(
                request.name,
                request.city,
                request.coordinates.latitude,
                request.coordinates.longitude,
                battery,
                status,
            )
            .await?;

        Ok(scooter.into())
    }

    pub async fn update_scooter(
        &self,
        id: Uuid,
        request: UpdateScooterRequest,
    ) -> Result<ScooterResponse, AppError> {
        if let Some(battery) = request.battery {
            Self::validate_battery(battery)?;
        }
        if let Some(speed) = request.speed {
            if speed < 0.0 {
                return Err(AppError::Validation(
                    "Speed cannot be negative".to_string(),
                ));
            }
        }

        let status = match request.status.as_deref() {
            Some(raw) => Some(Self::parse_status(raw)?),
            None => None,
        };

        let (latitude, longitude) = match request.coordinates {
            Some(coordinates) => (Some(coordinates.latitude), Some(coordinates.longitude)),
            None => (None, None),
        };

        let scooter = ScooterRepository::new(self.pool.clone())
            .update_admin(
                id,
                request.name,
                request.city,
                latitude,
                longitude,
                request.battery,
                request.speed,
                status,
            )
            .await?
            .ok_or_else(|| not_found_error("Scooter", &id.to_string()))?;

        Ok(scooter.into())
    }

    pub async fn delete_scooter(&self, id: Uuid) -> Result<ScooterResponse, AppError> {
        let scooter = ScooterRepository::new(self.pool.clone())
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error("Scooter", &id.to_string()))?;

        Ok(scooter.into())
    }

    pub async fn list_rides(&self, filters: RideFilters) -> Result<RideListResponse, AppError> {
        let status = match filters.status.as_deref() {
            Some("active") => Some(TripStatus::Active),
            Some("completed") => Some(TripStatus::Completed),
            Some("cancelled") => Some(TripStatus::Cancelled),
            Some(raw) => {
                return Err(AppError::Validation(format!(
                    "Invalid trip status '{}'",
                    raw
                )))
            }
            None => None,
        };

        let trips = TripRepository::new(self.pool.clone())
            .list_all(status, filters.user_id, Self::clamp_limit(filters.limit))
            .await?;

        Ok(RideListResponse {
            count: trips.len(),
            rides: trips.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_payments(
        &self,
        filters: PaymentFilters,
    ) -> Result<PaymentListResponse, AppError> {
        let rows = TripRepository::new(self.pool.clone())
            .payments(filters.user_id, Self::clamp_limit(filters.limit))
            .await?;

        let total_income: Decimal = rows.iter().map(|row| row.cost).sum();
        let payments: Vec<PaymentRecord> = rows
            .into_iter()
            .map(|row| PaymentRecord {
                id: row.id,
                user_id: row.user_id,
                scooter: row.scooter_name,
                amount: row.cost,
                date: row.end_time.unwrap_or(row.start_time),
                trip_duration_minutes: row
                    .end_time
                    .map(|end| pricing::duration_minutes(row.start_time, end))
                    .unwrap_or(0),
            })
            .collect();

        Ok(PaymentListResponse {
            count: payments.len(),
            total_income,
            currency: self.currency.clone(),
            payments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::scooter_dto::Coordinates;
    use sqlx::postgres::PgPoolOptions;

    // Pool perezoso: la validación falla antes de tocar la base de datos
    fn test_controller() -> AdminController {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/scooter_rental_test")
            .unwrap();
        AdminController::new(pool, "SEK".to_string())
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_battery() {
        let controller = test_controller();
        let err = controller
            .create_scooter(CreateScooterRequest {
                name: "SparkRunners#99".to_string(),
                city: "Stockholm".to_string(),
                coordinates: Coordinates {
                    latitude: 59.33,
                    longitude: 18.06,
                },
                battery: Some(150.0),
                status: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_status() {
        let controller = test_controller();
        let err = controller
            .create_scooter(CreateScooterRequest {
                name: "SparkRunners#99".to_string(),
                city: "Stockholm".to_string(),
                coordinates: Coordinates {
                    latitude: 59.33,
                    longitude: 18.06,
                },
                battery: None,
                status: Some("Broken".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let controller = test_controller();
        let err = controller
            .create_scooter(CreateScooterRequest {
                name: "  ".to_string(),
                city: "Stockholm".to_string(),
                coordinates: Coordinates {
                    latitude: 59.33,
                    longitude: 18.06,
                },
                battery: None,
                status: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn ride_listing_rejects_unknown_status() {
        let controller = test_controller();
        let err = controller
            .list_rides(RideFilters {
                status: Some("paused".to_string()),
                user_id: None,
                limit: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn listing_limit_is_clamped() {
        assert_eq!(AdminController::clamp_limit(None), 100);
        assert_eq!(AdminController::clamp_limit(Some(10)), 10);
        assert_eq!(AdminController::clamp_limit(Some(0)), 1);
        assert_eq!(AdminController::clamp_limit(Some(100_000)), 1000);
    }
}
