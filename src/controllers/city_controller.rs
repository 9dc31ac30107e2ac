use sqlx::PgPool;

use crate::dto::city_dto::CityListResponse;
use crate::repositories::CityRepository;
use crate::utils::errors::AppError;

pub struct CityController {
    repository: CityRepository,
}

impl CityController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CityRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<CityListResponse, AppError> {
        let cities = self.repository.list_active().await?;

        Ok(CityListResponse {
            count: cities.len(),
            cities: cities.into_iter().map(Into::into).collect(),
        })
    }
}
