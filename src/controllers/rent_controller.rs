use sqlx::PgPool;
use uuid::Uuid;

use crate::config::PricingConfig;
use crate::dto::rent_dto::{HistoryResponse, StartRentalResponse, StopRentalResponse, TripSummary};
use crate::middleware::AuthenticatedUser;
use crate::services::RentalService;
use crate::utils::errors::AppError;

pub struct RentController {
    service: RentalService,
}

impl RentController {
    pub fn new(pool: PgPool, pricing: PricingConfig) -> Self {
        Self {
            service: RentalService::new(pool, pricing),
        }
    }

    pub async fn start(
        &self,
        scooter_id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<StartRentalResponse, AppError> {
        let outcome = self.service.start(scooter_id, &user.user_id).await?;
        Ok(outcome.into())
    }

    pub async fn stop(
        &self,
        scooter_id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<StopRentalResponse, AppError> {
        let outcome = self.service.stop(scooter_id, &user.user_id).await?;
        Ok(outcome.into())
    }

    pub async fn history(&self, user: &AuthenticatedUser) -> Result<HistoryResponse, AppError> {
        let trips = self.service.history(&user.user_id).await?;
        let trips: Vec<TripSummary> = trips.into_iter().map(Into::into).collect();
        Ok(HistoryResponse {
            count: trips.len(),
            trips,
        })
    }

    pub async fn trip_detail(
        &self,
        trip_id: Uuid,
        user: &AuthenticatedUser,
    ) -> Result<TripSummary, AppError> {
        let trip = self
            .service
            .trip_detail(trip_id, &user.user_id, user.is_admin())
            .await?;
        Ok(trip.into())
    }
}
